use anyhow::{Context, Result};
use clap::Parser;
use colored::control as color_control;
use seedbed::cli::commands::init::{InitCommand, InitCommandHandler};
use seedbed::cli::commands::list::{ListCommand, ListCommandHandler};
use seedbed::cli::commands::seed::{SeedCommand, SeedCommandHandler};
use seedbed::cli::{Cli, Commands};
use seedbed::core::config::{Dialect, LoggingConfig};
use seedbed::core::naming::APP_NAME;
use seedbed::services::config_loader::ConfigLoader;
use std::env;
use std::fs::OpenOptions;
use std::path::Path;
use std::process;
use std::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

fn main() {
    sqlx::any::install_default_drivers();

    // CLIをパースして実行
    let cli = Cli::parse();

    // 非同期ランタイムを作成して実行
    let runtime = tokio::runtime::Runtime::new()
        .context("Failed to create Tokio runtime")
        .unwrap_or_else(|e| {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        });

    let result = runtime.block_on(run_command(cli));

    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// コマンドを実行する
async fn run_command(cli: Cli) -> Result<String> {
    if cli.no_color {
        color_control::set_override(false);
    }

    // プロジェクトのルートパスを取得
    let project_path = env::current_dir()?;

    init_tracing(&project_path, cli.config.as_deref(), cli.verbose)?;

    // Ctrl-C でキャンセル（実行中のシードは完了またはロールバックまで待つ）
    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received; stopping after the current seed");
            signal_cancel.cancel();
        }
    });

    match cli.command {
        Commands::Init {
            dialect,
            database,
            force,
        } => {
            let dialect: Dialect = dialect.parse()?;
            let database_name = database.unwrap_or_else(|| match dialect {
                Dialect::SQLite => format!("{}.db", APP_NAME),
                _ => format!("{}_dev", APP_NAME),
            });
            let handler = InitCommandHandler::new();
            let command = InitCommand {
                project_path,
                config_path: cli.config,
                dialect,
                database_name,
                force,
            };
            let config_path = handler.execute(&command)?;
            Ok(format!("Project initialized. Config written to {:?}", config_path))
        }

        Commands::Seed {
            env,
            dir,
            timeout,
            dry_run,
        } => {
            let handler = SeedCommandHandler::new();
            let command = SeedCommand {
                project_path,
                config_path: cli.config,
                env,
                dir,
                timeout,
                dry_run,
                format: cli.format,
            };
            handler.execute(&command, &cancel).await
        }

        Commands::List { dir } => {
            let handler = ListCommandHandler::new();
            let command = ListCommand {
                project_path,
                config_path: cli.config,
                dir,
                format: cli.format,
            };
            handler.execute(&command, &cancel)
        }
    }
}

/// tracingサブスクライバーを初期化する
///
/// レベルの優先順位: RUST_LOG > --verbose > 設定ファイルの logging.level
fn init_tracing(project_path: &Path, config_path: Option<&Path>, verbose: bool) -> Result<()> {
    // 設定ファイルが読めない場合は既定値で続行し、エラーはコマンド側で報告する
    let logging = Some(ConfigLoader::resolve_path(project_path, config_path))
        .filter(|path| path.exists())
        .and_then(|path| ConfigLoader::from_file(&path).ok())
        .map(|config| config.logging)
        .unwrap_or_default();

    let level = if verbose { "debug" } else { logging.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match &logging {
        LoggingConfig {
            file: Some(file), ..
        } => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(project_path.join(file))
                .with_context(|| format!("Failed to open log file: {:?}", file))?;
            builder.with_writer(Mutex::new(file)).with_ansi(false).init();
        }
        _ => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}
