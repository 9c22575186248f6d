// コマンド共通コンテキスト
//
// 設定ファイル読み込みやパス解決の重複をCLI層で集約する。

use crate::adapters::database::DatabaseConnectionService;
use crate::core::config::Config;
use crate::services::config_loader::ConfigLoader;
use anyhow::{anyhow, Context, Result};
use sqlx::AnyPool;
use std::path::{Path, PathBuf};

/// CLIコマンド共通の実行コンテキスト
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub project_path: PathBuf,
    pub config_path: PathBuf,
    pub config: Config,
}

impl CommandContext {
    /// プロジェクトルートから設定を読み込んでコンテキストを作成
    pub fn load(project_path: PathBuf, config_path: Option<&Path>) -> Result<Self> {
        let config_path = ConfigLoader::resolve_path(&project_path, config_path);
        if !config_path.exists() {
            return Err(anyhow!(
                "Config file not found: {:?}. Please initialize the project first with the `init` command.",
                config_path
            ));
        }

        let config = ConfigLoader::from_file(&config_path)?;

        Ok(Self {
            project_path,
            config_path,
            config,
        })
    }

    /// シードディレクトリの絶対パス
    ///
    /// コマンドラインでの指定を設定ファイルの `seeds_dir` より優先する。
    pub fn seeds_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        let dir = override_dir.unwrap_or(self.config.seeds_dir.as_path());
        self.project_path.join(dir)
    }

    /// 指定環境のデータベースに接続する
    pub async fn connect(&self, env: &str, timeout: Option<u64>) -> Result<AnyPool> {
        let db_config = self
            .config
            .get_database_config(env)
            .with_context(|| format!("Config for environment '{}' not found", env))?;

        let service = DatabaseConnectionService::new();
        let pool = service
            .create_pool(self.config.dialect, &db_config, timeout)
            .await
            .with_context(|| "Failed to connect to database")?;
        service
            .test_connection(&pool)
            .await
            .with_context(|| format!("Database for environment '{}' is not reachable", env))?;

        Ok(pool)
    }
}
