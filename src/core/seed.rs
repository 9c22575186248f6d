// シードモデル
//
// 1つのフィクスチャファイルをメモリ上で表現する値型。

use std::path::{Path, PathBuf};

/// シード
///
/// `.sql` ファイル1つ分のフィクスチャSQL。`name` はファイルのベース名（拡張子を含む）で、
/// 実行順序の決定とエラー・ログの帰属に使われます。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    /// ファイルのベース名（例: `001_users.sql`）
    name: String,
    /// 前後の空白を除去したSQL本文
    sql: String,
    /// 読み込み元のファイルパス
    path: PathBuf,
}

impl Seed {
    /// 新しいシードを作成
    ///
    /// `raw` の前後の空白のみを除去し、内部の空行や文末記号はそのまま保持します。
    pub fn new(name: impl Into<String>, raw: &str, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            sql: raw.trim().to_string(),
            path: path.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// SQL本文が空かどうか
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_surrounding_whitespace_only() {
        let raw = "\n\n  INSERT INTO users (id) VALUES (1);\n\nINSERT INTO users (id) VALUES (2);  \n\t";
        let seed = Seed::new("001_users.sql", raw, "/seeds/001_users.sql");

        assert_eq!(seed.name(), "001_users.sql");
        assert_eq!(
            seed.sql(),
            "INSERT INTO users (id) VALUES (1);\n\nINSERT INTO users (id) VALUES (2);"
        );
        assert_eq!(seed.path(), Path::new("/seeds/001_users.sql"));
    }

    #[test]
    fn test_whitespace_only_content_is_empty() {
        let seed = Seed::new("blank.sql", "  \n\t ", "blank.sql");
        assert!(seed.is_empty());
    }
}
