// シーディング結果モデル
//
// 1回のシーディング実行でコミットされたシードの記録。

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// 適用済みシード
///
/// コミットされたシードの名前、コミット日時、実行時間を保持します。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppliedSeed {
    /// シード名
    pub name: String,

    /// コミットされた日時
    pub applied_at: DateTime<Utc>,

    /// 実行時間（ミリ秒）
    pub duration_ms: i64,
}

impl AppliedSeed {
    /// 新しい適用済みシードを作成
    pub fn new(name: String, applied_at: DateTime<Utc>, duration: Duration) -> Self {
        Self {
            name,
            applied_at,
            duration_ms: duration.num_milliseconds(),
        }
    }
}

/// シーディング実行結果
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    /// コミット順の適用済みシード
    pub applied: Vec<AppliedSeed>,
}

impl RunSummary {
    pub fn push(&mut self, applied: AppliedSeed) {
        self.applied.push(applied);
    }

    /// 適用されたシード数
    pub fn applied_count(&self) -> usize {
        self.applied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }

    /// 合計実行時間（ミリ秒）
    pub fn total_duration_ms(&self) -> i64 {
        self.applied.iter().map(|s| s.duration_ms).sum()
    }

    /// 適用済みシード名の一覧
    pub fn names(&self) -> Vec<&str> {
        self.applied.iter().map(|s| s.name.as_str()).collect()
    }
}
