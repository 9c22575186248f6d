// Core Domain
// シードモデル、実行結果、エラー型、設定モデルの純粋な定義

pub mod config;
pub mod error;
pub mod naming;
pub mod seed;
pub mod summary;
