//! AI 引擎错误类型

use thiserror::Error;

/// AI 引擎错误
#[derive(Error, Debug)]
pub enum AiError {
    /// 配置解析失败
    #[error("Invalid AI config: {0}")]
    Config(#[from] serde_json::Error),
}
