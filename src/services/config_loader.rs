// 設定ファイル読み込みサービス
//
// core::config の純粋性を保つため、ファイルI/Oはこのサービスに集約する。
// 拡張子が `.json` の場合はJSON、それ以外はYAMLとして扱う。

use crate::core::config::Config;
use crate::core::naming::CONFIG_PATH_ENV;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// 設定ファイル読み込みサービス
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// ファイルから設定を読み込み、検証する
    pub fn from_file(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: Config = if Self::is_json(path) {
            serde_json::from_str(&content).with_context(|| "Failed to parse config file")?
        } else {
            content.parse()?
        };

        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", path))?;

        Ok(config)
    }

    /// 設定をファイルに書き出す
    pub fn save(path: &Path, config: &Config) -> Result<()> {
        let content = if Self::is_json(path) {
            serde_json::to_string_pretty(config)?
        } else {
            serde_saphyr::to_string(config)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))
    }

    /// 設定ファイルのパスを解決
    ///
    /// 優先順位: 明示的な指定 > 環境変数 `SEEDBED_CONFIG_PATH` > プロジェクトルートの既定ファイル
    pub fn resolve_path(project_path: &Path, explicit: Option<&Path>) -> PathBuf {
        Self::resolve_path_with_env(
            project_path,
            explicit,
            std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from),
        )
    }

    fn resolve_path_with_env(
        project_path: &Path,
        explicit: Option<&Path>,
        from_env: Option<PathBuf>,
    ) -> PathBuf {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| from_env.filter(|p| !p.as_os_str().is_empty()))
            .unwrap_or_else(|| PathBuf::from(Config::DEFAULT_CONFIG_PATH));

        if path.is_absolute() {
            path
        } else {
            project_path.join(path)
        }
    }

    fn is_json(path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == "json")
    }
}
