//! 错误类型定义

use thiserror::Error;

/// 井字棋规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 目标格子已有标记
    #[error("Invalid move: cell ({row}, {col}) is not empty")]
    InvalidMove { row: u8, col: u8 },

    /// 无效的棋盘记号
    #[error("Invalid board notation: {reason}")]
    InvalidNotation { reason: String },

    /// 双方标记数量不符合轮流落子规则
    #[error("Invalid piece counts: X={x}, O={o} (X must equal O or lead by one)")]
    InvalidPieceCounts { x: usize, o: usize },
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
