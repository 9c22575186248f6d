// トランザクション実行サービス
//
// 1つのシードを専用のトランザクション内で適用します。
// SQL本文は分割せず、1回の実行単位としてドライバへ渡します。

use crate::core::error::SeedError;
use crate::core::seed::Seed;
use sqlx::AnyPool;
use tracing::{debug, error};

/// トランザクション実行サービス
#[derive(Debug, Clone, Default)]
pub struct TransactionExecutor;

impl TransactionExecutor {
    /// 新しいTransactionExecutorを作成
    pub fn new() -> Self {
        Self
    }

    /// シードをトランザクション内で実行
    ///
    /// 実行に失敗した場合はロールバックし、ロールバック自体の失敗も
    /// `SeedError::Execution` に含めて返します。リトライは行いません。
    ///
    /// # Arguments
    ///
    /// * `pool` - データベース接続プール（借用のみ）
    /// * `seed` - 実行するシード
    pub async fn execute(&self, pool: &AnyPool, seed: &Seed) -> Result<(), SeedError> {
        let mut tx = pool
            .begin()
            .await
            .map_err(|source| SeedError::TransactionBegin {
                seed: seed.name().to_string(),
                source,
            })?;
        debug!(seed = %seed.name(), "Transaction started");

        if let Err(source) = sqlx::raw_sql(seed.sql()).execute(&mut *tx).await {
            let rollback = tx.rollback().await.err();
            if let Some(rollback_error) = &rollback {
                error!(
                    seed = %seed.name(),
                    error = %rollback_error,
                    "Rollback failed; connection state may be inconsistent"
                );
            }

            return Err(SeedError::Execution {
                seed: seed.name().to_string(),
                source,
                rollback,
            });
        }

        tx.commit().await.map_err(|source| SeedError::Commit {
            seed: seed.name().to_string(),
            source,
        })?;
        debug!(seed = %seed.name(), "Transaction committed");

        Ok(())
    }
}
