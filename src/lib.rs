// Seedbedライブラリのエントリーポイント
//
// モジュール構造:
// - cli: CLIレイヤー（ユーザー入力の受付とコマンドルーティング）
// - core: コアドメイン（シード、実行結果、エラー型、設定モデル）
// - adapters: データベース接続を抽象化
// - services: シード読み込み、トランザクション実行、シーダー、設定読み込み

pub mod adapters;
pub mod cli;
pub mod core;
pub mod services;

pub use crate::core::error::{LoadError, RunError, SeedError};
pub use crate::core::seed::Seed;
pub use crate::core::summary::{AppliedSeed, RunSummary};
pub use crate::services::progress::SeedProgress;
pub use crate::services::seeder::Seeder;
