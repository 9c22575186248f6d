// 接続文字列ビルダー
//
// DatabaseConfig と Dialect から接続文字列を生成する。

use crate::core::config::{DatabaseConfig, Dialect};
use urlencoding::encode;

/// 接続文字列を生成
///
/// ユーザー名とパスワードはパーセントエンコードされます。
pub fn build_connection_string(dialect: Dialect, config: &DatabaseConfig) -> String {
    let port = config.port_for(dialect);
    match dialect {
        Dialect::PostgreSQL => {
            let user = config.user.as_deref().unwrap_or("postgres");
            format!(
                "postgresql://{}@{}:{}/{}?sslmode={}",
                credentials(user, config.password.as_deref()),
                config.host,
                port,
                config.database,
                config.ssl_mode
            )
        }
        Dialect::MySQL => {
            let user = config.user.as_deref().unwrap_or("root");
            format!(
                "mysql://{}@{}:{}/{}",
                credentials(user, config.password.as_deref()),
                config.host,
                port,
                config.database
            )
        }
        // 存在しない場合はファイルを作成する
        Dialect::SQLite => format!("sqlite://{}?mode=rwc", config.database),
    }
}

fn credentials(user: &str, password: Option<&str>) -> String {
    match password {
        Some(password) if !password.is_empty() => format!("{}:{}", encode(user), encode(password)),
        _ => encode(user).into_owned(),
    }
}
