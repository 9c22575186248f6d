// シードディレクトリ読み込みサービス
//
// シードディレクトリをスキャンし、`.sql` ファイルをシードとして読み込み、
// ファイル名の辞書順に並べて返します。

use crate::core::error::LoadError;
use crate::core::naming::SEED_EXTENSION;
use crate::core::seed::Seed;
use std::fs;
use std::path::Path;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// シード読み込みサービス
#[derive(Debug, Clone, Default)]
pub struct SeedLoader;

impl SeedLoader {
    /// 新しいSeedLoaderを作成
    pub fn new() -> Self {
        Self
    }

    /// シードディレクトリからすべてのシードを読み込む
    ///
    /// - サブディレクトリは走査しない
    /// - 拡張子が厳密に `sql` のファイルのみを対象とする（大文字小文字を区別）
    /// - 結果はシード名の昇順にソートされる
    /// - ファイルを1つ読むごとにキャンセルを確認する
    ///
    /// # Arguments
    ///
    /// * `dir` - シードディレクトリ
    /// * `cancel` - キャンセルトークン
    ///
    /// # Returns
    ///
    /// ソート済みのシード一覧。途中で失敗した場合は何も返さない
    pub fn load_dir(&self, dir: &Path, cancel: &CancellationToken) -> Result<Vec<Seed>, LoadError> {
        let directory_error = |source| LoadError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        };

        let entries = fs::read_dir(dir).map_err(directory_error)?;

        let mut seeds = Vec::new();
        for entry in entries {
            let entry = entry.map_err(directory_error)?;
            let path = entry.path();

            if !Self::is_seed_file(&path) {
                continue;
            }

            if cancel.is_cancelled() {
                return Err(LoadError::Cancelled);
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            let content = fs::read_to_string(&path).map_err(|source| LoadError::FileRead {
                name: name.clone(),
                path: path.clone(),
                source,
            })?;

            debug!(seed = %name, bytes = content.len(), "Read seed file");
            seeds.push(Seed::new(name, &content, path));
        }

        // シード名順にソート
        seeds.sort_by(|a, b| a.name().cmp(b.name()));

        Ok(seeds)
    }

    /// シードファイルかどうかを判定
    ///
    /// 最後のドット以降が拡張子と一致するファイルを対象とする（`.sql` 単体も含む）。
    fn is_seed_file(path: &Path) -> bool {
        path.is_file()
            && path.file_name().is_some_and(|name| {
                name.to_string_lossy()
                    .rsplit_once('.')
                    .is_some_and(|(_, ext)| ext == SEED_EXTENSION)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    fn names(seeds: &[Seed]) -> Vec<&str> {
        seeds.iter().map(|s| s.name()).collect()
    }

    #[test]
    fn test_load_sorted_by_name() {
        let temp_dir = TempDir::new().unwrap();
        write(&temp_dir, "010_comments.sql", "SELECT 3;");
        write(&temp_dir, "001_users.sql", "SELECT 1;");
        write(&temp_dir, "002_posts.sql", "SELECT 2;");

        let seeds = SeedLoader::new()
            .load_dir(temp_dir.path(), &CancellationToken::new())
            .unwrap();

        assert_eq!(
            names(&seeds),
            vec!["001_users.sql", "002_posts.sql", "010_comments.sql"]
        );
    }

    #[test]
    fn test_skip_non_sql_files_and_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        write(&temp_dir, "001_users.sql", "SELECT 1;");
        write(&temp_dir, "notes.txt", "not a seed");
        write(&temp_dir, "seed.sql.bak", "SELECT 0;");
        write(&temp_dir, "UPPER.SQL", "SELECT 0;");
        write(&temp_dir, "sql", "SELECT 0;");
        fs::create_dir(temp_dir.path().join("nested.sql")).unwrap();
        fs::create_dir(temp_dir.path().join("more")).unwrap();
        fs::write(temp_dir.path().join("more").join("003_deep.sql"), "SELECT 0;").unwrap();

        let seeds = SeedLoader::new()
            .load_dir(temp_dir.path(), &CancellationToken::new())
            .unwrap();

        assert_eq!(names(&seeds), vec!["001_users.sql"]);
    }

    #[test]
    fn test_dotfile_named_sql_is_a_seed() {
        let temp_dir = TempDir::new().unwrap();
        write(&temp_dir, "a.sql", "SELECT 1;");
        write(&temp_dir, ".sql", "SELECT 0;");

        let seeds = SeedLoader::new()
            .load_dir(temp_dir.path(), &CancellationToken::new())
            .unwrap();

        // "." は "a" より前にソートされる
        assert_eq!(names(&seeds), vec![".sql", "a.sql"]);
    }

    #[test]
    fn test_content_preserved_except_surrounding_whitespace() {
        let temp_dir = TempDir::new().unwrap();
        let raw = "\n  INSERT INTO users (id) VALUES (1);\n\n\nINSERT INTO users (id) VALUES (2);\n\n";
        write(&temp_dir, "001_users.sql", raw);

        let seeds = SeedLoader::new()
            .load_dir(temp_dir.path(), &CancellationToken::new())
            .unwrap();

        assert_eq!(seeds[0].sql(), raw.trim());
        assert!(seeds[0].sql().contains("\n\n\n"));
    }

    #[test]
    fn test_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does_not_exist");

        let err = SeedLoader::new()
            .load_dir(&missing, &CancellationToken::new())
            .unwrap_err();

        assert!(err.is_directory_read());
    }

    #[test]
    fn test_path_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        write(&temp_dir, "001_users.sql", "SELECT 1;");

        let err = SeedLoader::new()
            .load_dir(&temp_dir.path().join("001_users.sql"), &CancellationToken::new())
            .unwrap_err();

        assert!(err.is_directory_read());
    }

    #[test]
    fn test_unreadable_file_names_the_seed() {
        let temp_dir = TempDir::new().unwrap();
        write(&temp_dir, "001_users.sql", "SELECT 1;");
        fs::write(temp_dir.path().join("002_binary.sql"), [0xff, 0xfe, 0x00]).unwrap();

        let err = SeedLoader::new()
            .load_dir(temp_dir.path(), &CancellationToken::new())
            .unwrap_err();

        match err {
            LoadError::FileRead { name, .. } => assert_eq!(name, "002_binary.sql"),
            other => panic!("Expected FileRead, got {:?}", other),
        }
    }

    #[test]
    fn test_cancelled_before_reading() {
        let temp_dir = TempDir::new().unwrap();
        write(&temp_dir, "001_users.sql", "SELECT 1;");

        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = SeedLoader::new().load_dir(temp_dir.path(), &cancel).unwrap_err();
        assert!(err.is_cancelled());
    }

    #[test]
    fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let seeds = SeedLoader::new()
            .load_dir(temp_dir.path(), &CancellationToken::new())
            .unwrap();

        assert!(seeds.is_empty());
    }
}
