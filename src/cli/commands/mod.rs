// コマンドハンドラー層
// 各CLIコマンドの実装

pub mod init;
pub mod list;
pub mod seed;

use crate::cli::OutputFormat;
use anyhow::Result;
use serde::Serialize;

/// コマンド出力の共通インターフェース
pub trait CommandOutput: Serialize {
    /// テキスト形式の出力
    fn to_text(&self) -> String;
}

/// 出力フォーマットに応じて出力を文字列化する
pub fn render_output<T: CommandOutput>(output: &T, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(output.to_text()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(output)?),
    }
}
