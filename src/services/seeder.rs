// シーダーサービス
//
// 読み込んだシードの順序付き一覧と借用したデータベース接続プールを保持し、
// シード読み込みとトランザクション実行を組み合わせてシーディングを行います。

use crate::core::error::{LoadError, RunError};
use crate::core::seed::Seed;
use crate::core::summary::{AppliedSeed, RunSummary};
use crate::services::progress::{SeedProgress, TracingProgress};
use crate::services::seed_loader::SeedLoader;
use crate::services::transaction_executor::TransactionExecutor;
use chrono::Utc;
use sqlx::AnyPool;
use std::path::Path;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// シーダー
///
/// 接続プールは借用するだけで、閉じることはありません。
/// シード一覧はこのインスタンスが排他的に所有します。
pub struct Seeder<'a> {
    pool: &'a AnyPool,
    seeds: Vec<Seed>,
    loader: SeedLoader,
    executor: TransactionExecutor,
    progress: Box<dyn SeedProgress + Send + Sync + 'a>,
}

impl<'a> Seeder<'a> {
    /// 新しいSeederを作成
    pub fn new(pool: &'a AnyPool) -> Self {
        Self {
            pool,
            seeds: Vec::new(),
            loader: SeedLoader::new(),
            executor: TransactionExecutor::new(),
            progress: Box::new(TracingProgress),
        }
    }

    /// 進捗の通知先を差し替える
    pub fn with_progress(mut self, progress: impl SeedProgress + Send + Sync + 'a) -> Self {
        self.progress = Box::new(progress);
        self
    }

    /// ディレクトリからシードを読み込み、既存の一覧の末尾に追加する
    ///
    /// 読み込みは全件成功か全件失敗のどちらかで、エラー時は一覧を変更しません。
    /// 複数回呼び出した場合は一覧が累積されます（置き換えではない）。
    ///
    /// # Returns
    ///
    /// 追加されたシード数
    pub fn load(
        &mut self,
        dir: impl AsRef<Path>,
        cancel: &CancellationToken,
    ) -> Result<usize, LoadError> {
        let dir = dir.as_ref();
        let batch = self.loader.load_dir(dir, cancel)?;

        for seed in &batch {
            if self.seeds.iter().any(|loaded| loaded.name() == seed.name()) {
                warn!(seed = %seed.name(), "Seed name already loaded; it will run twice");
            }
        }

        let count = batch.len();
        self.seeds.extend(batch);
        debug!(dir = %dir.display(), count, total = self.seeds.len(), "Loaded seeds");

        Ok(count)
    }

    /// 読み込み済みのシードを順番に実行する
    ///
    /// 最初に失敗したシードで実行全体を中断し、以降のシードは実行しません。
    /// それまでにコミットされたシードは元に戻しません。
    /// キャンセルはシードとシードの間でのみ確認されます。
    ///
    /// 適用済みシードの記録は行わないため、再度呼び出すとすべてのシードが
    /// 最初から再実行されます。冪等でないシード（競合処理のないINSERTなど）は
    /// 2回目の実行で失敗するか、データが重複します。
    pub async fn run(&self, cancel: &CancellationToken) -> Result<RunSummary, RunError> {
        let mut summary = RunSummary::default();

        for seed in &self.seeds {
            if cancel.is_cancelled() {
                warn!(next = %seed.name(), applied = summary.applied_count(), "Seeding cancelled");
                return Err(RunError::Cancelled {
                    next: seed.name().to_string(),
                    applied: summary.applied_count(),
                });
            }

            let start_time = Utc::now();
            info!(seed = %seed.name(), "Applying seed");

            self.executor
                .execute(self.pool, seed)
                .await
                .map_err(|source| RunError::Failed {
                    seed: seed.name().to_string(),
                    applied: summary.applied_count(),
                    source,
                })?;

            let end_time = Utc::now();
            let duration = end_time.signed_duration_since(start_time);

            self.progress.seed_applied(seed, duration);
            summary.push(AppliedSeed::new(seed.name().to_string(), end_time, duration));
        }

        Ok(summary)
    }

    /// 読み込み済みのシード（実行順）
    pub fn seeds(&self) -> &[Seed] {
        &self.seeds
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }
}
