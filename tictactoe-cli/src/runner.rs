//! 对局控制
//!
//! 按 走子方 → 选择走法 → 落子 的循环推进棋盘，直到终局。

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use tictactoe::{Board, GameResult, Move, Player};
use tictactoe_ai::AiEngine;
use tracing::debug;

/// 走法来源（引擎或人类）
pub trait MoveSource {
    /// 显示名称
    fn name(&self) -> &str;

    /// 在非终局棋盘上选择一个合法走法
    fn choose(&mut self, board: &Board) -> Result<Move>;
}

/// 引擎执子
pub struct EngineSource {
    engine: AiEngine,
}

impl EngineSource {
    pub fn new(engine: AiEngine) -> Self {
        Self { engine }
    }
}

impl MoveSource for EngineSource {
    fn name(&self) -> &str {
        "engine"
    }

    fn choose(&mut self, board: &Board) -> Result<Move> {
        let mv = self
            .engine
            .search(board)
            .context("engine returned no move on a non-terminal board")?;
        debug!("Engine searched {} nodes", self.engine.nodes_searched());
        Ok(mv)
    }
}

/// 人类执子：从输入读取 `行 列`
pub struct HumanSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> MoveSource for HumanSource<R, W> {
    fn name(&self) -> &str {
        "human"
    }

    fn choose(&mut self, board: &Board) -> Result<Move> {
        let actions = board.actions();
        loop {
            write!(self.output, "{} to move (row col): ", board.player())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input closed before a move was entered");
            }

            match parse_move(&line) {
                Ok(mv) if actions.contains(&mv) => return Ok(mv),
                Ok(mv) => writeln!(self.output, "Cell {} is not empty", mv)?,
                Err(e) => writeln!(self.output, "{:#}", e)?,
            }
        }
    }
}

/// 解析 `行 列`（空格或逗号分隔，0-2）
pub fn parse_move(text: &str) -> Result<Move> {
    let parts: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    if parts.len() != 2 {
        bail!("expected two numbers, e.g. `1 2`");
    }

    let row: u8 = parts[0]
        .parse()
        .with_context(|| format!("invalid row `{}`", parts[0]))?;
    let col: u8 = parts[1]
        .parse()
        .with_context(|| format!("invalid column `{}`", parts[1]))?;

    Move::new(row, col).with_context(|| format!("({}, {}) is off the board", row, col))
}

/// 一局棋的记录
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub board: Board,
    pub result: GameResult,
}

/// 从给定局面下到终局
///
/// 每落一子调用一次 `on_move`，参数为落子后的棋盘、落子方与该走法。
pub fn play_game(
    start: Board,
    x: &mut dyn MoveSource,
    o: &mut dyn MoveSource,
    mut on_move: impl FnMut(&Board, Player, Move),
) -> Result<GameRecord> {
    let mut board = start;
    let mut moves = Vec::new();

    loop {
        if let Some(result) = board.outcome() {
            return Ok(GameRecord {
                moves,
                board,
                result,
            });
        }

        let player = board.player();
        let source: &mut dyn MoveSource = match player {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let mv = source.choose(&board)?;
        debug!("{} ({}) plays {}", player, source.name(), mv);

        board = board.result(mv)?;
        moves.push(mv);
        on_move(&board, player, mv);
    }
}
