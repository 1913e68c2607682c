//! 棋盘记号解析和生成
//!
//! 记号格式：三行以 `/` 分隔，每行三个字符，`X`/`O` 表示标记，`.` 表示空格
//! （解析时也接受 `-` 和 `_`）。走子方由双方标记数推导，不单独记录。
//!
//! 示例：
//! `XX./OO./...`

use crate::board::Board;
use crate::constants::BOARD_SIZE;
use crate::error::{GameError, Result};
use crate::piece::Cell;

/// 初始局面记号
pub const INITIAL_NOTATION: &str = ".../.../...";

/// 棋盘记号处理
pub struct Notation;

impl Notation {
    /// 解析记号为棋盘，并检查双方标记数量
    pub fn parse(notation: &str) -> Result<Board> {
        let rows: Vec<&str> = notation.trim().split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(GameError::InvalidNotation {
                reason: format!("Expected {} rows, got {}", BOARD_SIZE, rows.len()),
            });
        }

        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row_idx, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.trim().chars().collect();
            if chars.len() != BOARD_SIZE {
                return Err(GameError::InvalidNotation {
                    reason: format!(
                        "Row {} has {} columns, expected {}",
                        row_idx,
                        chars.len(),
                        BOARD_SIZE
                    ),
                });
            }

            for (col_idx, c) in chars.into_iter().enumerate() {
                cells[row_idx][col_idx] =
                    Cell::from_char(c).ok_or_else(|| GameError::InvalidNotation {
                        reason: format!("Invalid cell character: {}", c),
                    })?;
            }
        }

        let board = Board::from_rows(cells);
        board.validate()?;
        Ok(board)
    }

    /// 将棋盘转换为记号
    pub fn to_string(board: &Board) -> String {
        board
            .rows()
            .iter()
            .map(|row| row.iter().map(Cell::to_char).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}
