// seedコマンドハンドラー
//
// シードの適用機能を実装します。
// - データベース接続の確立
// - シードディレクトリの読み込み
// - シードの順次実行（シードごとのトランザクション内）
// - 実行結果の表示

use crate::cli::command_context::CommandContext;
use crate::cli::commands::{render_output, CommandOutput};
use crate::cli::OutputFormat;
use crate::core::seed::Seed;
use crate::core::summary::RunSummary;
use crate::services::progress::{SeedProgress, TracingProgress};
use crate::services::seed_loader::SeedLoader;
use crate::services::seeder::Seeder;
use anyhow::{Context, Result};
use chrono::Duration;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// seedコマンドの出力構造体
#[derive(Debug, Clone, Serialize)]
pub struct SeedOutput {
    /// Dry runモードかどうか
    pub dry_run: bool,
    /// 適用された（dry runでは適用予定の）シード数
    pub applied_count: usize,
    /// 各シードの結果
    pub seeds: Vec<SeedResult>,
    /// 合計実行時間（ミリ秒）
    pub total_duration_ms: i64,
    /// メッセージ
    #[serde(skip)]
    pub message: String,
}

/// 個別シード結果
#[derive(Debug, Clone, Serialize)]
pub struct SeedResult {
    pub name: String,
    pub duration_ms: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sql: Option<String>,
}

impl CommandOutput for SeedOutput {
    fn to_text(&self) -> String {
        self.message.clone()
    }
}

/// seedコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct SeedCommand {
    /// プロジェクトのルートパス
    pub project_path: PathBuf,
    /// カスタム設定ファイルパス
    pub config_path: Option<PathBuf>,
    /// 対象環境
    pub env: String,
    /// シードディレクトリの上書き
    pub dir: Option<PathBuf>,
    /// タイムアウト（秒）
    pub timeout: Option<u64>,
    /// Dry run - 実行せずにSQLを表示
    pub dry_run: bool,
    /// 出力フォーマット
    pub format: OutputFormat,
}

/// 適用済みシードを1行ずつ表示する通知先
#[derive(Debug, Clone, Default)]
pub struct ConsoleProgress;

impl SeedProgress for ConsoleProgress {
    fn seed_applied(&self, seed: &Seed, duration: Duration) {
        println!(
            "{} {} ({}ms)",
            "✓".green(),
            seed.name(),
            duration.num_milliseconds()
        );
    }
}

/// seedコマンドハンドラー
#[derive(Debug, Default)]
pub struct SeedCommandHandler {}

impl SeedCommandHandler {
    /// 新しいSeedCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// seedコマンドを実行
    ///
    /// # Arguments
    ///
    /// * `command` - seedコマンドのパラメータ
    /// * `cancel` - キャンセルトークン（シードとシードの間で確認される）
    ///
    /// # Returns
    ///
    /// 成功時は適用されたシードの概要、失敗時は失敗したシード名を含むエラー
    pub async fn execute(&self, command: &SeedCommand, cancel: &CancellationToken) -> Result<String> {
        let context = CommandContext::load(command.project_path.clone(), command.config_path.as_deref())?;
        let seeds_dir = context.seeds_dir(command.dir.as_deref());
        debug!(seeds_dir = %seeds_dir.display(), "Resolved seeds directory");

        // Dry run モードではデータベースに接続しない
        if command.dry_run {
            let seeds = SeedLoader::new()
                .load_dir(&seeds_dir, cancel)
                .with_context(|| "Failed to load seeds")?;
            return render_output(&self.dry_run_output(&seeds), &command.format);
        }

        let pool = context.connect(&command.env, command.timeout).await?;

        let result = self.seed(&pool, &seeds_dir, &command.format, cancel).await;

        // 接続プールの所有者はこのハンドラー
        pool.close().await;

        let summary = result?;
        render_output(&self.summary_output(&summary), &command.format)
    }

    /// シードを読み込んで実行する
    async fn seed(
        &self,
        pool: &sqlx::AnyPool,
        seeds_dir: &std::path::Path,
        format: &OutputFormat,
        cancel: &CancellationToken,
    ) -> Result<RunSummary> {
        // JSON出力時は標準出力を汚さないようにtracingへ流す
        let mut seeder = match format {
            OutputFormat::Text => Seeder::new(pool).with_progress(ConsoleProgress),
            OutputFormat::Json => Seeder::new(pool).with_progress(TracingProgress),
        };

        let count = seeder
            .load(seeds_dir, cancel)
            .with_context(|| "Failed to load seeds")?;
        info!(count, seeds_dir = %seeds_dir.display(), "Loaded seeds");

        let summary = seeder.run(cancel).await?;
        Ok(summary)
    }

    /// Dry runモードの出力を生成
    fn dry_run_output(&self, seeds: &[Seed]) -> SeedOutput {
        let mut message = String::from("=== DRY RUN MODE ===\n");
        if seeds.is_empty() {
            message.push_str("No seed files found.\n");
        } else {
            message.push_str(&format!(
                "The following {} seed(s) will be applied:\n\n",
                seeds.len()
            ));
        }

        for seed in seeds {
            message.push_str(&format!("\u{25b6} {}\n", seed.name()));
            message.push_str("SQL:\n");
            message.push_str(&format!("{}\n\n", seed.sql()));
        }

        SeedOutput {
            dry_run: true,
            applied_count: seeds.len(),
            seeds: seeds
                .iter()
                .map(|seed| SeedResult {
                    name: seed.name().to_string(),
                    duration_ms: 0,
                    sql: Some(seed.sql().to_string()),
                })
                .collect(),
            total_duration_ms: 0,
            message,
        }
    }

    /// 適用結果のサマリーを生成
    fn summary_output(&self, summary: &RunSummary) -> SeedOutput {
        let message = if summary.is_empty() {
            "No seed files found. Nothing to apply.".to_string()
        } else {
            format!(
                "\n=== Seeding Complete ===\n{} seed(s) applied\nTotal execution time: {}ms",
                summary.applied_count(),
                summary.total_duration_ms()
            )
        };

        SeedOutput {
            dry_run: false,
            applied_count: summary.applied_count(),
            seeds: summary
                .applied
                .iter()
                .map(|applied| SeedResult {
                    name: applied.name.clone(),
                    duration_ms: applied.duration_ms,
                    sql: None,
                })
                .collect(),
            total_duration_ms: summary.total_duration_ms(),
            message,
        }
    }
}
