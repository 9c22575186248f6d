// データベース接続アダプター
//
// SQLxを使用したデータベース接続の管理を行います。
// PostgreSQL、MySQL、SQLiteに対応した統一されたインターフェースを提供します。

use crate::adapters::connection_string;
use crate::core::config::{DatabaseConfig, Dialect};
use crate::core::error::DatabaseError;
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use std::time::Duration;
use tracing::debug;

/// 既定の接続取得タイムアウト（秒）
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// データベース接続サービス
///
/// データベース接続プールの初期化を行います。
#[derive(Debug, Clone, Default)]
pub struct DatabaseConnectionService;

impl DatabaseConnectionService {
    /// 新しいDatabaseConnectionServiceを作成
    pub fn new() -> Self {
        Self
    }

    /// データベース接続プールを作成
    ///
    /// # Arguments
    ///
    /// * `dialect` - データベース方言
    /// * `config` - データベース設定
    /// * `timeout_override` - 設定ファイルのタイムアウトより優先するタイムアウト（秒）
    pub async fn create_pool(
        &self,
        dialect: Dialect,
        config: &DatabaseConfig,
        timeout_override: Option<u64>,
    ) -> Result<AnyPool, DatabaseError> {
        sqlx::any::install_default_drivers();

        let connection_string = connection_string::build_connection_string(dialect, config);
        let timeout = timeout_override
            .or(config.timeout)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        debug!(dialect = %dialect, host = %config.host, timeout, "Connecting to database");

        self.create_pool_options(timeout)
            .connect(&connection_string)
            .await
            .map_err(|e| DatabaseError::Connection {
                message: format!("Failed to create connection pool for {}", dialect),
                cause: e.to_string(),
            })
    }

    /// 接続テストを実行
    pub async fn test_connection(&self, pool: &AnyPool) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1")
            .execute(pool)
            .await
            .map(|_| ())
            .map_err(|e| DatabaseError::Connection {
                message: "Database connection test failed".to_string(),
                cause: e.to_string(),
            })
    }

    /// プールオプションを作成
    ///
    /// シードは1つずつ順番に実行されるため、接続は1本で足りる。
    pub fn create_pool_options(&self, timeout_secs: u64) -> AnyPoolOptions {
        AnyPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(timeout_secs))
    }
}
