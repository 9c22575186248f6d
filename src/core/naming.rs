// 命名ポリシー
//
// アプリケーション名と関連パスの単一ソースを提供します。

/// 現行アプリケーション名
pub const APP_NAME: &str = "seedbed";

/// 既定の設定ファイル名
pub const CONFIG_FILE: &str = ".seedbed.yaml";

/// 設定ファイルパスを上書きする環境変数
pub const CONFIG_PATH_ENV: &str = "SEEDBED_CONFIG_PATH";

/// 既定のシードディレクトリ
pub const SEEDS_DIR: &str = "seeds";

/// シードファイルの拡張子（大文字小文字を区別）
pub const SEED_EXTENSION: &str = "sql";
