// listコマンドハンドラー
//
// シードディレクトリを読み込み、実行順にシード名を表示します。

use crate::cli::command_context::CommandContext;
use crate::cli::commands::{render_output, CommandOutput};
use crate::cli::OutputFormat;
use crate::services::seed_loader::SeedLoader;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

/// listコマンドの出力構造体
#[derive(Debug, Clone, Serialize)]
pub struct ListOutput {
    /// シードディレクトリ
    pub seeds_dir: PathBuf,
    /// 実行順のシード
    pub seeds: Vec<ListedSeed>,
}

/// 一覧の1行
#[derive(Debug, Clone, Serialize)]
pub struct ListedSeed {
    pub position: usize,
    pub name: String,
    pub path: PathBuf,
    pub bytes: usize,
    /// SQL本文が空（空白のみ）かどうか
    pub empty: bool,
}

impl CommandOutput for ListOutput {
    fn to_text(&self) -> String {
        if self.seeds.is_empty() {
            return format!("No seed files found in {:?}", self.seeds_dir);
        }

        let mut text = format!(
            "{} seed(s) in {:?} (execution order):\n",
            self.seeds.len(),
            self.seeds_dir
        );
        for seed in &self.seeds {
            let note = if seed.empty { ", empty" } else { "" };
            text.push_str(&format!(
                "  {:>3}. {} ({} bytes{})\n",
                seed.position, seed.name, seed.bytes, note
            ));
        }
        text
    }
}

/// listコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct ListCommand {
    /// プロジェクトのルートパス
    pub project_path: PathBuf,
    /// カスタム設定ファイルパス
    pub config_path: Option<PathBuf>,
    /// シードディレクトリの上書き
    pub dir: Option<PathBuf>,
    /// 出力フォーマット
    pub format: OutputFormat,
}

/// listコマンドハンドラー
#[derive(Debug, Default)]
pub struct ListCommandHandler {}

impl ListCommandHandler {
    /// 新しいListCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// listコマンドを実行
    pub fn execute(&self, command: &ListCommand, cancel: &CancellationToken) -> Result<String> {
        let context = CommandContext::load(command.project_path.clone(), command.config_path.as_deref())?;
        let seeds_dir = context.seeds_dir(command.dir.as_deref());

        let seeds = SeedLoader::new()
            .load_dir(&seeds_dir, cancel)
            .with_context(|| "Failed to load seeds")?;

        let output = ListOutput {
            seeds_dir,
            seeds: seeds
                .iter()
                .enumerate()
                .map(|(i, seed)| ListedSeed {
                    position: i + 1,
                    name: seed.name().to_string(),
                    path: seed.path().to_path_buf(),
                    bytes: seed.sql().len(),
                    empty: seed.is_empty(),
                })
                .collect(),
        };

        render_output(&output, &command.format)
    }
}
