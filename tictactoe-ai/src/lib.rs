//! 井字棋 AI 引擎
//!
//! 包含:
//! - 终局估值
//! - 完整 Minimax 搜索
//! - 引擎配置（开局策略、随机数种子）

mod error;
mod evaluate;
mod search;

pub use error::AiError;
pub use evaluate::Evaluator;
pub use search::{minimax, AiConfig, AiEngine, OpeningPolicy};
