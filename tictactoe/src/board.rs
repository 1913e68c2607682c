//! 棋盘状态
//!
//! 棋盘是不可变的值类型：落子不会修改原棋盘，而是返回一个新棋盘。

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::BOARD_SIZE;
use crate::error::{GameError, Result};
use crate::moves::Move;
use crate::piece::{Cell, Player};

/// 3x3 棋盘
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// 按 [行][列] 存储
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// 创建初始（全空）棋盘
    pub const fn initial() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// 从逐行数据创建棋盘（不检查双方标记数量）
    pub const fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// 获取指定坐标的格子
    ///
    /// 坐标越界时 panic。
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.row as usize][mv.col as usize]
    }

    /// 逐行访问
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// 行优先遍历所有格子
    pub fn iter(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        Move::all().map(move |mv| (mv, self.get(mv)))
    }

    /// 统计某种格子的数量
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// 已落子数量
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| !c.is_empty()).count()
    }

    /// 是否没有空格
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }

    /// 是否为初始空棋盘
    pub fn is_empty(&self) -> bool {
        *self == Self::initial()
    }

    /// 双方标记数量是否满足 X - O ∈ {0, 1}
    pub fn is_valid(&self) -> bool {
        let x = self.count(Cell::X);
        let o = self.count(Cell::O);
        x == o || x == o + 1
    }

    /// 检查双方标记数量，失败时返回具体的数量
    pub fn validate(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(GameError::InvalidPieceCounts {
                x: self.count(Cell::X),
                o: self.count(Cell::O),
            })
        }
    }

    /// 当前走子方
    ///
    /// 已落子数为偶数时轮到 X（包括空棋盘），奇数时轮到 O。
    /// 棋盘已满时没有下一手，这里按奇偶返回 O；搜索在调用前总会先判断终局。
    pub fn player(&self) -> Player {
        if self.is_full() {
            debug!("Game over, board full; no player to move");
        }
        if self.occupied_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// 所有空格坐标
    pub fn actions(&self) -> BTreeSet<Move> {
        self.iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(mv, _)| mv)
            .collect()
    }

    /// 在指定坐标落下当前走子方的标记，返回新棋盘
    ///
    /// 原棋盘不变。目标格子非空时返回 `GameError::InvalidMove`。
    pub fn result(&self, mv: Move) -> Result<Board> {
        if !self.get(mv).is_empty() {
            return Err(GameError::InvalidMove {
                row: mv.row,
                col: mv.col,
            });
        }

        let mut next = *self;
        next.cells[mv.row as usize][mv.col as usize] = self.player().mark();
        Ok(next)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f, "---+---+---")?;
            }
            let line: Vec<String> = row.iter().map(|c| format!(" {} ", c.to_char())).collect();
            writeln!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}
