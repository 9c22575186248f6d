// Adapters
// データベースへのアクセスを抽象化

pub mod connection_string;
pub mod database;
