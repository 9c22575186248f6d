// 設定ファイル管理
//
// プロジェクトの設定ファイル（YAML/JSON形式）のモデル、デフォルト値、検証、
// 環境別のデータベース接続設定の管理を行います。

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;

/// データベース方言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    #[serde(rename = "postgresql", alias = "postgres")]
    PostgreSQL,
    #[serde(rename = "mysql")]
    MySQL,
    #[serde(rename = "sqlite")]
    SQLite,
}

impl Dialect {
    /// 方言ごとの既定ポート
    pub fn default_port(&self) -> u16 {
        match self {
            Dialect::PostgreSQL => 5432,
            Dialect::MySQL => 3306,
            Dialect::SQLite => 0,
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::PostgreSQL => write!(f, "postgresql"),
            Dialect::MySQL => write!(f, "mysql"),
            Dialect::SQLite => write!(f, "sqlite"),
        }
    }
}

impl FromStr for Dialect {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "postgresql" | "postgres" => Ok(Dialect::PostgreSQL),
            "mysql" => Ok(Dialect::MySQL),
            "sqlite" => Ok(Dialect::SQLite),
            other => Err(anyhow!(
                "Unsupported database dialect: {}. Please specify one of: postgresql, mysql, sqlite.",
                other
            )),
        }
    }
}

/// プロジェクト設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 設定ファイルのバージョン
    pub version: String,

    /// データベース方言
    #[serde(default)]
    pub dialect: Dialect,

    /// シードディレクトリ
    #[serde(default = "default_seeds_dir")]
    pub seeds_dir: PathBuf,

    /// 環境別のデータベース設定
    pub environments: BTreeMap<String, DatabaseConfig>,

    /// ログ設定
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_seeds_dir() -> PathBuf {
    PathBuf::from(crate::core::naming::SEEDS_DIR)
}

impl Config {
    /// デフォルトの設定ファイルパス
    pub const DEFAULT_CONFIG_PATH: &'static str = crate::core::naming::CONFIG_FILE;

    /// 既定の環境名
    pub const DEFAULT_ENVIRONMENT: &'static str = "development";

    /// `init` で書き出す初期設定を作成
    pub fn new_default(dialect: Dialect, database: &str) -> Self {
        let mut environments = BTreeMap::new();
        environments.insert(
            Self::DEFAULT_ENVIRONMENT.to_string(),
            DatabaseConfig {
                host: default_host(),
                port: Some(dialect.default_port()),
                database: database.to_string(),
                user: None,
                password: None,
                ssl_mode: default_ssl_mode(),
                timeout: None,
            },
        );

        Self {
            version: "1.0".to_string(),
            dialect,
            seeds_dir: default_seeds_dir(),
            environments,
            logging: LoggingConfig::default(),
        }
    }

    /// 指定された環境のデータベース設定を取得
    pub fn get_database_config(&self, environment: &str) -> Result<DatabaseConfig> {
        self.environments.get(environment).cloned().ok_or_else(|| {
            anyhow!(
                "Environment '{}' not found. Available environments: {:?}",
                environment,
                self.environments.keys().collect::<Vec<_>>()
            )
        })
    }

    /// 設定の妥当性を検証
    pub fn validate(&self) -> Result<()> {
        // バージョンチェック
        if self.version.is_empty() {
            return Err(anyhow!("Config file version is not specified"));
        }

        // 環境設定チェック
        if self.environments.is_empty() {
            return Err(anyhow!(
                "At least one environment configuration is required"
            ));
        }

        for (env_name, db_config) in &self.environments {
            db_config
                .validate()
                .with_context(|| format!("Invalid config for environment '{}'", env_name))?;
        }

        self.logging.validate()
    }
}

/// std::str::FromStrトレイトの実装（YAML）
impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(yaml: &str) -> Result<Self, Self::Err> {
        serde_saphyr::from_str(yaml).with_context(|| "Failed to parse config file")
    }
}

/// データベース接続設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// ホスト名（SQLiteの場合は不要）
    #[serde(default = "default_host")]
    pub host: String,

    /// ポート番号（省略時は方言の既定ポート）
    #[serde(default)]
    pub port: Option<u16>,

    /// データベース名（SQLiteの場合はファイルパス）
    pub database: String,

    /// ユーザー名
    #[serde(default)]
    pub user: Option<String>,

    /// パスワード
    #[serde(default)]
    pub password: Option<String>,

    /// SSLモード
    #[serde(default = "default_ssl_mode")]
    pub ssl_mode: String,

    /// 接続タイムアウト（秒）
    #[serde(default)]
    pub timeout: Option<u64>,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_ssl_mode() -> String {
    "disable".to_string()
}

impl DatabaseConfig {
    /// 方言を考慮した実効ポート
    pub fn port_for(&self, dialect: Dialect) -> u16 {
        self.port.unwrap_or_else(|| dialect.default_port())
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<()> {
        if self.database.is_empty() {
            return Err(anyhow!("Database name is not specified"));
        }

        Ok(())
    }
}

/// ログ設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// ログレベル（trace, debug, info, warn, error）
    #[serde(default = "default_log_level")]
    pub level: String,

    /// ログの出力先ファイル（未指定の場合は標準エラー出力）
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    const LEVELS: [&'static str; 5] = ["trace", "debug", "info", "warn", "error"];

    pub fn validate(&self) -> Result<()> {
        if !Self::LEVELS.contains(&self.level.as_str()) {
            return Err(anyhow!(
                "Invalid log level '{}'. Expected one of: {}",
                self.level,
                Self::LEVELS.join(", ")
            ));
        }
        Ok(())
    }
}
