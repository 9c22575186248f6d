// シード進捗通知
//
// コミット済みシードごとの通知を受け取る観測用のシーム。

use crate::core::seed::Seed;
use chrono::Duration;
use tracing::info;

/// シード進捗の通知先
pub trait SeedProgress {
    /// シードのトランザクションがコミットされた直後に呼ばれる
    fn seed_applied(&self, seed: &Seed, duration: Duration);
}

/// tracingへ進捗を出力する既定の通知先
#[derive(Debug, Clone, Default)]
pub struct TracingProgress;

impl SeedProgress for TracingProgress {
    fn seed_applied(&self, seed: &Seed, duration: Duration) {
        info!(
            seed = %seed.name(),
            duration_ms = duration.num_milliseconds(),
            "Executed seed: {}",
            seed.name()
        );
    }
}

/// 通知を破棄する通知先
#[derive(Debug, Clone, Default)]
pub struct SilentProgress;

impl SeedProgress for SilentProgress {
    fn seed_applied(&self, _seed: &Seed, _duration: Duration) {}
}
