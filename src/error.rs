use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // 未定義(None)や非有限値など、引数そのものが不正
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // IPv4用の計算にIPv6を渡した場合など、アドレスファミリーの不一致
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    // 序数文字列などのパース失敗
    #[error("Parse error: {0}")]
    ParseError(String),

    // CIDR文字列のパース失敗 (ipnet)
    #[error("Address parse error: {0}")]
    AddrParseError(#[from] ipnet::AddrParseError),

    // JSON出力時のエラー
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // 標準出力への書き込みなど
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
