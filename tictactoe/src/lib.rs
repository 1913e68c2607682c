//! 井字棋共享棋盘模型
//!
//! 包含:
//! - 格子、玩家、走法等核心数据结构
//! - 不可变棋盘：走子方推导、合法走法、落子
//! - 胜负与终局判定
//! - 棋盘记号（解析与生成）

mod board;
mod constants;
mod error;
mod moves;
mod notation;
mod outcome;
mod piece;

pub use board::Board;
pub use constants::*;
pub use error::{GameError, Result};
pub use moves::Move;
pub use notation::{Notation, INITIAL_NOTATION};
pub use outcome::GameResult;
pub use piece::{Cell, Player};
