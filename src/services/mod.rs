// Services
// シード読み込み、トランザクション実行、シーディングの統括、設定読み込み

pub mod config_loader;
pub mod progress;
pub mod seed_loader;
pub mod seeder;
pub mod transaction_executor;
