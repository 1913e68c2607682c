//! 胜负与终局判定

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::constants::WIN_LINES;
use crate::moves::Move;
use crate::piece::{Cell, Player};

/// 对局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// X 胜
    XWin,
    /// O 胜
    OWin,
    /// 和棋
    Draw,
}

impl GameResult {
    /// 获胜方，和棋返回 None
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::XWin => Some(Player::X),
            GameResult::OWin => Some(Player::O),
            GameResult::Draw => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::XWin => write!(f, "X wins"),
            GameResult::OWin => write!(f, "O wins"),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}

impl Board {
    /// 获胜方
    ///
    /// 按对角线、行、列的固定顺序扫描，返回第一条三格同色的连线的所有者。
    pub fn winner(&self) -> Option<Player> {
        WIN_LINES.into_iter().find_map(|line| {
            let [a, b, c] = line.map(|(row, col)| self.get(Move::new_unchecked(row as u8, col as u8)));
            if a != Cell::Empty && a == b && b == c {
                a.owner()
            } else {
                None
            }
        })
    }

    /// 对局是否结束（有人获胜或没有空格）
    pub fn is_terminal(&self) -> bool {
        self.is_full() || self.winner().is_some()
    }

    /// 对局结果，未结束时返回 None
    pub fn outcome(&self) -> Option<GameResult> {
        match self.winner() {
            Some(Player::X) => Some(GameResult::XWin),
            Some(Player::O) => Some(GameResult::OWin),
            None if self.is_full() => Some(GameResult::Draw),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Cell = Cell::X;
    const O: Cell = Cell::O;
    const E: Cell = Cell::Empty;

    #[test]
    fn test_no_winner_initial() {
        let board = Board::initial();
        assert_eq!(board.winner(), None);
        assert!(!board.is_terminal());
        assert_eq!(board.outcome(), None);
    }

    #[test]
    fn test_row_winner() {
        let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        assert_eq!(board.winner(), Some(Player::X));
        assert!(board.is_terminal());
        assert_eq!(board.outcome(), Some(GameResult::XWin));
    }

    #[test]
    fn test_column_winner() {
        let board = Board::from_rows([[X, O, X], [E, O, E], [X, O, E]]);
        assert_eq!(board.winner(), Some(Player::O));
        assert_eq!(board.outcome().and_then(|r| r.winner()), Some(Player::O));
    }

    #[test]
    fn test_diagonal_winner() {
        let board = Board::from_rows([[O, X, X], [E, X, O], [X, O, E]]);
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_full_board_draw() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert_eq!(board.winner(), None);
        assert!(board.is_terminal());
        assert_eq!(board.outcome(), Some(GameResult::Draw));
    }

    #[test]
    fn test_scan_order_first_line_wins() {
        // 非法局面：双方同时成线，先扫描到的第一行胜出
        let board = Board::from_rows([[X, X, X], [E, E, E], [O, O, O]]);
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_in_progress() {
        let board = Board::from_rows([[X, O, E], [E, X, E], [E, E, O]]);
        assert_eq!(board.winner(), None);
        assert!(!board.is_terminal());
    }
}
