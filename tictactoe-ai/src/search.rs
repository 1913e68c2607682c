//! 搜索引擎
//!
//! 实现完整的 Minimax 搜索（无剪枝、无置换表）

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use tictactoe::{Board, Move, Player};

use crate::error::AiError;
use crate::evaluate::Evaluator;

/// 开局策略（X 在空棋盘上的第一手）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningPolicy {
    /// 随机选择一个空格，不搜索
    #[default]
    Random,
    /// 与其他局面一样完整搜索
    Search,
}

/// AI 配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub opening: OpeningPolicy,
    /// 随机数种子，None 时从系统熵源获取
    pub seed: Option<u64>,
}

impl AiConfig {
    /// 使用固定种子的默认配置
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// 从 JSON 解析配置，缺省字段取默认值
    pub fn from_json(json: &str) -> Result<Self, AiError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// AI 引擎
pub struct AiEngine {
    config: AiConfig,
    rng: ChaCha8Rng,
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            config,
            rng,
            nodes_searched: 0,
        }
    }

    /// 当前配置
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 搜索当前走子方的最佳走法
    ///
    /// 终局返回 None。X 在空棋盘上按开局策略处理；其余局面 X 取子局面
    /// 极小值最大的走法，O 取子局面极大值最小的走法，分值相同时取先枚举到的。
    pub fn search(&mut self, board: &Board) -> Option<Move> {
        self.nodes_searched = 0;

        if board.is_terminal() {
            return None;
        }

        let player = board.player();
        if player == Player::X && board.is_empty() && self.config.opening == OpeningPolicy::Random {
            let moves: Vec<Move> = board.actions().into_iter().collect();
            let mv = moves.choose(&mut self.rng).copied();
            if let Some(mv) = mv {
                info!("Random opening move: {}", mv);
            }
            return mv;
        }

        let scored = self.evaluate_moves(board);
        let best = Self::select(player, &scored);

        if let Some((mv, value)) = best {
            debug!(
                "{} to move: {} candidates, best {} (value {}), {} nodes",
                player,
                scored.len(),
                mv,
                value,
                self.nodes_searched
            );
        }

        best.map(|(mv, _)| mv)
    }

    /// 计算每个合法走法的 Minimax 值（X 视角）
    ///
    /// 返回顺序与 `Board::actions` 的枚举顺序一致。终局返回空列表。
    pub fn evaluate_moves(&mut self, board: &Board) -> Vec<(Move, i32)> {
        self.nodes_searched = 0;

        if board.is_terminal() {
            return Vec::new();
        }

        let player = board.player();
        let mut scored = Vec::new();

        for mv in board.actions() {
            let child = Self::child(board, mv);
            let value = match player {
                Player::X => self.min_value(&child),
                Player::O => self.max_value(&child),
            };
            trace!("{} plays {}: value {}", player, mv, value);
            scored.push((mv, value));
        }

        scored
    }

    /// 按走子方挑选最佳走法，严格更优才替换
    fn select(player: Player, scored: &[(Move, i32)]) -> Option<(Move, i32)> {
        let mut best: Option<(Move, i32)> = None;

        for &(mv, value) in scored {
            let better = match best {
                None => true,
                Some((_, best_value)) => match player {
                    Player::X => value > best_value,
                    Player::O => value < best_value,
                },
            };
            if better {
                best = Some((mv, value));
            }
        }

        best
    }

    /// X 走子时的局面值
    fn max_value(&mut self, board: &Board) -> i32 {
        self.nodes_searched += 1;

        if board.is_terminal() {
            return Evaluator::utility(board);
        }

        let mut value = i32::MIN;
        for mv in board.actions() {
            let child = Self::child(board, mv);
            value = value.max(self.min_value(&child));
        }
        value
    }

    /// O 走子时的局面值
    fn min_value(&mut self, board: &Board) -> i32 {
        self.nodes_searched += 1;

        if board.is_terminal() {
            return Evaluator::utility(board);
        }

        let mut value = i32::MAX;
        for mv in board.actions() {
            let child = Self::child(board, mv);
            value = value.min(self.max_value(&child));
        }
        value
    }

    /// 模拟走法
    fn child(board: &Board, mv: Move) -> Board {
        board
            .result(mv)
            .expect("moves from actions() target empty cells")
    }

    /// 获取上一次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::new(AiConfig::default())
    }
}

/// 使用默认配置搜索最佳走法
pub fn minimax(board: &Board) -> Option<Move> {
    AiEngine::default().search(board)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use tictactoe::{GameResult, Notation};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    }

    /// 双方都由引擎执子，下到终局
    fn self_play(engine: &mut AiEngine, mut board: Board) -> Board {
        while let Some(mv) = engine.search(&board) {
            board = board.result(mv).unwrap();
        }
        board
    }

    #[test]
    fn test_terminal_returns_none() {
        let mut engine = AiEngine::new(AiConfig::with_seed(1));
        let won = Notation::parse("XXX/OO./...").unwrap();
        assert_eq!(engine.search(&won), None);

        let drawn = Notation::parse("XOX/XOO/OXX").unwrap();
        assert_eq!(engine.search(&drawn), None);
        assert!(engine.evaluate_moves(&drawn).is_empty());
    }

    #[test]
    fn test_random_opening_covers_all_cells() {
        let mut engine = AiEngine::new(AiConfig::with_seed(42));
        let board = Board::initial();

        let mut seen = HashSet::new();
        for _ in 0..200 {
            let mv = engine.search(&board).unwrap();
            assert!(mv.row < 3 && mv.col < 3);
            seen.insert(mv);
        }

        assert_eq!(seen.len(), 9, "random opening should reach every cell");
    }

    #[test]
    fn test_seeded_opening_is_deterministic() {
        let board = Board::initial();
        let first = AiEngine::new(AiConfig::with_seed(7)).search(&board);
        let second = AiEngine::new(AiConfig::with_seed(7)).search(&board);
        assert_eq!(first, second);
    }

    #[test]
    fn test_x_completes_row() {
        init_tracing();
        let board = Notation::parse("XX./OO./...").unwrap();
        assert_eq!(board.player(), Player::X);

        let mut engine = AiEngine::new(AiConfig::with_seed(1));
        let mv = engine.search(&board);

        assert_eq!(mv, Some(Move::new_unchecked(0, 2)));
        assert!(engine.nodes_searched() > 0);
    }

    #[test]
    fn test_o_completes_row_before_blocking() {
        // O 可以直接获胜，不应去堵 X
        let board = Notation::parse("XX./OO./X..").unwrap();
        assert_eq!(board.player(), Player::O);

        let mv = AiEngine::new(AiConfig::with_seed(1)).search(&board);
        assert_eq!(mv, Some(Move::new_unchecked(1, 2)));
    }

    #[test]
    fn test_o_blocks_threat() {
        let board = Notation::parse("XX./.O./...").unwrap();
        assert_eq!(board.player(), Player::O);

        let mut engine = AiEngine::new(AiConfig::with_seed(1));
        assert_eq!(engine.search(&board), Some(Move::new_unchecked(0, 2)));
    }

    #[test]
    fn test_evaluate_moves_values() {
        let board = Notation::parse("XX./OO./...").unwrap();
        let mut engine = AiEngine::new(AiConfig::with_seed(1));
        let scored = engine.evaluate_moves(&board);

        assert_eq!(scored.len(), board.actions().len());
        assert!(scored.iter().all(|(_, value)| (-1..=1).contains(value)));
        assert!(scored.contains(&(Move::new_unchecked(0, 2), 1)));
    }

    #[test]
    fn test_optimal_play_always_draws() {
        init_tracing();
        // 覆盖所有开局第一手
        for opening in Move::all() {
            let board = Board::initial().result(opening).unwrap();
            let mut engine = AiEngine::new(AiConfig::with_seed(3));
            let end = self_play(&mut engine, board);

            assert!(end.is_terminal());
            assert_eq!(end.outcome(), Some(GameResult::Draw), "opening {} should draw", opening);
            assert_eq!(Evaluator::utility(&end), 0);
        }
    }

    #[test]
    fn test_self_play_from_initial_draws() {
        let mut engine = AiEngine::new(AiConfig::with_seed(11));
        for _ in 0..3 {
            let end = self_play(&mut engine, Board::initial());
            assert_eq!(end.outcome(), Some(GameResult::Draw));
        }
    }

    #[test]
    fn test_search_opening_values_are_zero() {
        let config = AiConfig {
            opening: OpeningPolicy::Search,
            seed: Some(5),
        };
        let mut engine = AiEngine::new(config);
        let scored = engine.evaluate_moves(&Board::initial());

        assert_eq!(scored.len(), 9);
        assert!(scored.iter().all(|&(_, value)| value == 0));
        // 全部同分时取第一个枚举到的走法
        assert_eq!(
            AiEngine::select(Player::X, &scored),
            Some((Move::new_unchecked(0, 0), 0))
        );
    }

    #[test]
    fn test_config_from_json() {
        let config = AiConfig::from_json(r#"{"opening": "search", "seed": 9}"#).unwrap();
        assert_eq!(config.opening, OpeningPolicy::Search);
        assert_eq!(config.seed, Some(9));

        let defaults = AiConfig::from_json("{}").unwrap();
        assert_eq!(defaults, AiConfig::default());

        assert!(AiConfig::from_json(r#"{"opening": "clever"}"#).is_err());
    }

    #[test]
    fn test_engine_keeps_config() {
        let config = AiConfig {
            opening: OpeningPolicy::Search,
            seed: Some(4),
        };
        let engine = AiEngine::new(config.clone());
        assert_eq!(engine.config(), &config);
        assert_eq!(AiEngine::default().config(), &AiConfig::default());
    }

    #[test]
    fn test_minimax_free_function() {
        let board = Notation::parse("XX./OO./...").unwrap();
        assert_eq!(minimax(&board), Some(Move::new_unchecked(0, 2)));
        assert_eq!(minimax(&Notation::parse("XXX/OO./...").unwrap()), None);
    }
}
