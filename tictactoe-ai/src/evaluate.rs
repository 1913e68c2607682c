//! 终局估值

use tictactoe::{Board, GameResult, Player};

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 终局效用（X 视角）：X 胜 1，O 胜 -1，其余 0
    ///
    /// 只对终局棋盘有意义；未结束的棋盘同样返回 0。
    pub fn utility(board: &Board) -> i32 {
        match board.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// 对局结果对应的效用
    pub fn result_value(result: GameResult) -> i32 {
        match result {
            GameResult::XWin => 1,
            GameResult::OWin => -1,
            GameResult::Draw => 0,
        }
    }
}
