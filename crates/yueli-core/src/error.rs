//! 核心错误类型。
//!
//! 外层 crate 在自己的错误里以 `#[from] CoreError` 包装。

use thiserror::Error;

/// 核心层错误。
/// 配置、序列化等领域公共错误在此定义。
#[derive(Debug, Error)]
pub enum CoreError {
    /// JSON 序列化/反序列化失败
    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// I/O 错误
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),
}
