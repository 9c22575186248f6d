// CLI Layer
// ユーザー入力の受付とコマンドルーティング

pub mod command_context;
pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// 出力フォーマット
#[derive(Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// Structured JSON output
    Json,
}

/// Seedbed - Database Fixture Seeding CLI
///
/// Applies ordered SQL seed files to a database, one transaction per file.
#[derive(Parser, Debug)]
#[command(name = "seedbed")]
#[command(author = "Seedbed Contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Database fixture seeding CLI tool")]
#[command(long_about = "Seedbed - Database Fixture Seeding CLI

Loads every *.sql file from a flat seeds directory, orders them by file name,
and applies each one inside its own transaction. The first failing seed aborts
the run; seeds committed before it stay applied.

Prefix file names to control the order, e.g. 001_users.sql, 002_posts.sql.

Supported databases: PostgreSQL, MySQL, SQLite")]
#[command(propagate_version = true)]
#[command(after_help = "GETTING STARTED:
  1. Initialize a new project:     seedbed init --dialect sqlite
  2. Add seed files:               seeds/001_users.sql, seeds/002_posts.sql
  3. Preview the order:            seedbed list
  4. Apply the seeds:              seedbed seed

For detailed help on each command, use: seedbed <command> --help")]
pub struct Cli {
    /// Path to configuration file (overrides SEEDBED_CONFIG_PATH)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Output format (text or json)
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new seeding project
    ///
    /// Creates the seeds/ directory and a default configuration file.
    ///
    /// EXAMPLES:
    ///   # Initialize with SQLite
    ///   seedbed init --dialect sqlite --database dev.db
    ///
    ///   # Force re-initialization
    ///   seedbed init --force
    Init {
        /// Database dialect (postgresql, mysql, sqlite)
        #[arg(short, long, value_name = "DIALECT", default_value = "postgresql")]
        dialect: String,

        /// Database name (file path for SQLite)
        #[arg(long, value_name = "NAME")]
        database: Option<String>,

        /// Force initialization even if config exists
        #[arg(short, long)]
        force: bool,
    },

    /// Apply all seed files to the database
    ///
    /// Every run executes all seeds from the beginning. Nothing records which
    /// seeds were applied before, so seeds that are not safe to re-apply
    /// (plain INSERTs of fixed keys, for example) fail or duplicate data when
    /// run a second time.
    ///
    /// EXAMPLES:
    ///   # Seed the development database
    ///   seedbed seed
    ///
    ///   # Preview the seeds without connecting
    ///   seedbed seed --dry-run
    ///
    ///   # Seed staging from another directory
    ///   seedbed seed --env staging --dir fixtures/staging
    Seed {
        /// Target environment
        #[arg(short, long, default_value = "development")]
        env: String,

        /// Seeds directory (overrides seeds_dir in the config file)
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Connection timeout in seconds
        #[arg(long, value_name = "SECONDS")]
        timeout: Option<u64>,

        /// Dry run - show seeds and SQL without executing
        #[arg(long)]
        dry_run: bool,
    },

    /// List seed files in execution order
    ///
    /// EXAMPLES:
    ///   seedbed list
    ///   seedbed list --dir fixtures
    List {
        /// Seeds directory (overrides seeds_dir in the config file)
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },
}
