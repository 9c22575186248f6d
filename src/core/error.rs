// エラー型定義
//
// シーディング処理全体で使用されるカスタムエラー型を提供します。
// thiserrorを使用して、LoadError, SeedError, RunError, DatabaseError を定義します。

use std::path::PathBuf;
use thiserror::Error;

/// シード読み込みエラー
///
/// シードディレクトリのスキャンとファイル読み込み時に発生するエラーを表現します。
#[derive(Debug, Error)]
pub enum LoadError {
    /// Seeds directory is missing, unreadable, or not a directory
    #[error("Failed to read seeds directory: {}", .path.display())]
    DirectoryRead {
        /// ディレクトリパス
        path: PathBuf,
        /// エラー原因
        #[source]
        source: std::io::Error,
    },

    /// A selected seed file could not be read in full
    #[error("Failed to read seed file {name}")]
    FileRead {
        /// シード名（ファイルのベース名）
        name: String,
        /// ファイルパス
        path: PathBuf,
        /// エラー原因
        #[source]
        source: std::io::Error,
    },

    /// Load was cancelled before all files were read
    #[error("Seed loading cancelled")]
    Cancelled,
}

impl LoadError {
    /// ディレクトリ読み込みエラーかどうか
    pub fn is_directory_read(&self) -> bool {
        matches!(self, LoadError::DirectoryRead { .. })
    }

    /// ファイル読み込みエラーかどうか
    pub fn is_file_read(&self) -> bool {
        matches!(self, LoadError::FileRead { .. })
    }

    /// キャンセルされたかどうか
    pub fn is_cancelled(&self) -> bool {
        matches!(self, LoadError::Cancelled)
    }
}

/// シード実行エラー
///
/// 1つのシードをトランザクション内で適用する際に発生するエラーを表現します。
/// どのバリアントも失敗したシード名を保持します。
#[derive(Debug, Error)]
pub enum SeedError {
    /// The database refused to start a transaction
    #[error("Failed to begin transaction for seed {seed}")]
    TransactionBegin {
        /// シード名
        seed: String,
        /// エラー原因
        #[source]
        source: sqlx::Error,
    },

    /// The seed SQL failed; the transaction was rolled back
    #[error("Failed to execute seed {seed}{}", format_rollback_opt(.rollback))]
    Execution {
        /// シード名
        seed: String,
        /// 実行エラー
        #[source]
        source: sqlx::Error,
        /// ロールバック自体の失敗（接続状態が不整合の可能性あり）
        rollback: Option<sqlx::Error>,
    },

    /// The transaction could not be committed
    #[error("Failed to commit seed {seed}")]
    Commit {
        /// シード名
        seed: String,
        /// エラー原因
        #[source]
        source: sqlx::Error,
    },
}

impl SeedError {
    /// 失敗したシード名を取得
    pub fn seed(&self) -> &str {
        match self {
            SeedError::TransactionBegin { seed, .. }
            | SeedError::Execution { seed, .. }
            | SeedError::Commit { seed, .. } => seed,
        }
    }

    /// トランザクション開始エラーかどうか
    pub fn is_transaction_begin(&self) -> bool {
        matches!(self, SeedError::TransactionBegin { .. })
    }

    /// SQL実行エラーかどうか
    pub fn is_execution(&self) -> bool {
        matches!(self, SeedError::Execution { .. })
    }

    /// コミットエラーかどうか
    pub fn is_commit(&self) -> bool {
        matches!(self, SeedError::Commit { .. })
    }

    /// ロールバックの失敗を取得
    pub fn rollback_error(&self) -> Option<&sqlx::Error> {
        match self {
            SeedError::Execution { rollback, .. } => rollback.as_ref(),
            _ => None,
        }
    }
}

/// ロールバック失敗をフォーマットするヘルパー関数
fn format_rollback_opt(rollback: &Option<sqlx::Error>) -> String {
    rollback.as_ref().map_or(String::new(), |e| {
        format!(" (rollback also failed, connection state may be inconsistent: {})", e)
    })
}

/// シーディング実行エラー
///
/// `Seeder::run` の失敗を表現します。最初に失敗したシードで実行全体が中断され、
/// それ以前にコミット済みのシードは元に戻されません。
#[derive(Debug, Error)]
pub enum RunError {
    /// A seed failed; later seeds were not executed
    #[error("Seeding aborted at {seed} ({applied} seed(s) already committed)")]
    Failed {
        /// 失敗したシード名
        seed: String,
        /// 失敗前にコミットされたシード数
        applied: usize,
        /// シード実行エラー
        #[source]
        source: SeedError,
    },

    /// The run was cancelled between two seeds
    #[error("Seeding cancelled before {next} ({applied} seed(s) already committed)")]
    Cancelled {
        /// 未実行の次のシード名
        next: String,
        /// キャンセル前にコミットされたシード数
        applied: usize,
    },
}

impl RunError {
    /// コミット済みのシード数
    pub fn applied(&self) -> usize {
        match self {
            RunError::Failed { applied, .. } | RunError::Cancelled { applied, .. } => *applied,
        }
    }

    /// 失敗したシードのエラーを取得
    pub fn seed_error(&self) -> Option<&SeedError> {
        match self {
            RunError::Failed { source, .. } => Some(source),
            RunError::Cancelled { .. } => None,
        }
    }

    /// キャンセルされたかどうか
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RunError::Cancelled { .. })
    }
}

/// データベースエラー
///
/// データベース接続時に発生するエラーを表現します。
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Connection error
    #[error("Database connection error: {message} (cause: {cause})")]
    Connection {
        /// エラーメッセージ
        message: String,
        /// エラー原因
        cause: String,
    },
}

impl DatabaseError {
    /// 接続エラーかどうか
    pub fn is_connection(&self) -> bool {
        matches!(self, DatabaseError::Connection { .. })
    }
}
