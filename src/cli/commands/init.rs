// initコマンドハンドラー
//
// プロジェクトの初期化処理を実装します。
// - シードディレクトリの作成（seeds/）
// - デフォルト設定ファイルの生成（.seedbed.yaml）
// - 初期化済みプロジェクトの検出

use crate::core::config::{Config, Dialect};
use crate::services::config_loader::ConfigLoader;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// initコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct InitCommand {
    /// プロジェクトのルートパス
    pub project_path: PathBuf,
    /// 書き出す設定ファイル（未指定の場合は既定パス）
    pub config_path: Option<PathBuf>,
    /// データベース方言
    pub dialect: Dialect,
    /// データベース名
    pub database_name: String,
    /// 強制的に初期化（既存の設定を上書き）
    pub force: bool,
}

/// initコマンドハンドラー
#[derive(Debug, Clone, Default)]
pub struct InitCommandHandler {}

impl InitCommandHandler {
    /// 新しいInitCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// initコマンドを実行
    ///
    /// # Returns
    ///
    /// 作成した設定ファイルのパス
    pub fn execute(&self, command: &InitCommand) -> Result<PathBuf> {
        let config_path =
            ConfigLoader::resolve_path(&command.project_path, command.config_path.as_deref());

        // 初期化済みチェック
        if config_path.exists() && !command.force {
            return Err(anyhow!(
                "Project is already initialized. Use --force option to force re-initialization."
            ));
        }

        let config = Config::new_default(command.dialect, &command.database_name);

        let seeds_dir = command.project_path.join(&config.seeds_dir);
        fs::create_dir_all(&seeds_dir)
            .with_context(|| format!("Failed to create seeds directory: {:?}", seeds_dir))?;

        ConfigLoader::save(&config_path, &config)?;
        info!(config = %config_path.display(), dialect = %command.dialect, "Project initialized");

        Ok(config_path)
    }
}
