//! 井字棋终端驱动
//!
//! 包含:
//! - 对局循环
//! - 引擎与人类两种走法来源

pub mod runner;

pub use runner::{parse_move, play_game, EngineSource, GameRecord, HumanSource, MoveSource};
