//! AI engine driving the two searches
//!
//! The engine picks a move for whichever player asks, always searching with
//! that player as the maximizer. It skips the search on an empty board
//! (the center is taken directly) and refuses to move once the game is over.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Algorithm, Board, EngineConfig, Pos, Stone};
//!
//! let engine = AIEngine::with_config(EngineConfig::new(Algorithm::AlphaBeta, 2));
//! let mut board = Board::new(15);
//! board.place(Pos::new(7, 7), Stone::Black).unwrap();
//!
//! let result = engine.get_move_with_stats(&mut board, Stone::White);
//! println!("Best move: {:?}", result.best_move);
//! println!("Nodes: {}, time: {}ms", result.nodes, result.time_ms);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use tracing::{debug, warn};

use crate::board::{Board, Pos, Stone};
use crate::config::{ConfigError, EngineConfig};
use crate::eval::{Evaluator, WindowEvaluator};
use crate::rules::{game_state, get_candidates};
use crate::search::{order_moves, AlphaBeta, Minimax, SearchResult, SearchStats, INF};

/// Search algorithm used by an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Exhaustive minimax over a capped, proximity-ordered move list
    Minimax,
    /// Minimax with alpha-beta pruning and pattern-based move ordering
    AlphaBeta,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Minimax, Algorithm::AlphaBeta];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Minimax => "Minimax",
            Algorithm::AlphaBeta => "Alpha-Beta",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" | "mm" => Ok(Algorithm::Minimax),
            "alphabeta" | "alpha-beta" | "ab" => Ok(Algorithm::AlphaBeta),
            _ => Err(ConfigError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Result of a move search with statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Search score from the requesting player's side
    pub score: i32,
    pub algorithm: Algorithm,
    pub time_ms: u64,
    /// Search calls, leaves included
    pub nodes: u64,
    /// Alpha-beta cutoffs; always 0 for minimax
    pub cutoffs: u64,
}

impl MoveResult {
    fn no_move(algorithm: Algorithm) -> Self {
        Self {
            best_move: None,
            score: 0,
            algorithm,
            time_ms: 0,
            nodes: 0,
            cutoffs: 0,
        }
    }

    #[inline]
    fn opening(pos: Pos, algorithm: Algorithm, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            time_ms,
            ..Self::no_move(algorithm)
        }
    }

    #[inline]
    fn from_search(result: SearchResult, stats: SearchStats, algorithm: Algorithm, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            algorithm,
            time_ms,
            nodes: stats.nodes,
            cutoffs: stats.cutoffs,
        }
    }
}

/// Gomoku AI engine
///
/// Holds an evaluator and an [`EngineConfig`]; the board is passed in per
/// call and is returned unchanged.
pub struct AIEngine<E: Evaluator = WindowEvaluator> {
    evaluator: E,
    config: EngineConfig,
}

impl AIEngine {
    /// Engine with the default configuration (alpha-beta, depth 3).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_evaluator(WindowEvaluator, config)
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Evaluator> AIEngine<E> {
    /// Engine scoring leaves with a custom evaluator.
    #[must_use]
    pub fn with_evaluator(evaluator: E, config: EngineConfig) -> Self {
        Self { evaluator, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_depth(&mut self, depth: i8) {
        self.config.depth = depth;
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.config.algorithm = algorithm;
    }

    /// Best move for `player`, or `None` when the game is over or no cell is free.
    pub fn get_move(&self, board: &mut Board, player: Stone) -> Option<Pos> {
        self.get_move_with_stats(board, player).best_move
    }

    /// Best move for `player` along with search statistics.
    ///
    /// The board is used as scratch space during the search and is left as
    /// it was found.
    pub fn get_move_with_stats(&self, board: &mut Board, player: Stone) -> MoveResult {
        let algorithm = self.config.algorithm;
        let start = Instant::now();

        if !player.is_player() {
            warn!("move requested for an empty stone");
            return MoveResult::no_move(algorithm);
        }
        if game_state(board).is_over() {
            return MoveResult::no_move(algorithm);
        }
        if board.is_board_empty() {
            return MoveResult::opening(board.center(), algorithm, start.elapsed().as_millis() as u64);
        }

        let depth = self.config.depth;
        let (result, stats) = match algorithm {
            Algorithm::Minimax => {
                let mut search = Minimax::new(&self.evaluator, player).with_move_cap(self.config.minimax_move_cap);
                let result = search.search(board, depth, true);
                (result, search.stats())
            }
            Algorithm::AlphaBeta => {
                let mut search = AlphaBeta::new(&self.evaluator, player);
                let result = search.search(board, depth, -INF, INF, true);
                (result, search.stats())
            }
        };

        let mut result = MoveResult::from_search(result, stats, algorithm, start.elapsed().as_millis() as u64);
        if result.best_move.is_none() {
            // Depth cutoff at the root or every line already decided
            result.best_move = order_moves(board, get_candidates(board), player).first().copied();
        }

        debug!(
            %algorithm,
            ?player,
            depth,
            score = result.score,
            nodes = result.nodes,
            cutoffs = result.cutoffs,
            time_ms = result.time_ms,
            best_move = ?result.best_move,
            "search finished"
        );
        if result.best_move.is_none() {
            warn!(%algorithm, ?player, "no move found");
        }
        result
    }
}

/// One-shot convenience: best move for `player` using `algorithm` at `depth`.
pub fn best_move(board: &mut Board, depth: i8, algorithm: Algorithm, player: Stone) -> Option<Pos> {
    AIEngine::with_config(EngineConfig::new(algorithm, depth)).get_move(board, player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::alphabeta;

    fn board_with(size: usize, stones: &[(u8, u8, Stone)]) -> Board {
        let mut board = Board::new(size);
        for &(r, c, s) in stones {
            board.place(Pos::new(r, c), s).unwrap();
        }
        board
    }

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.config(), &EngineConfig::default());
    }

    #[test]
    fn test_engine_empty_board_takes_center() {
        for algorithm in Algorithm::ALL {
            let engine = AIEngine::with_config(EngineConfig::new(algorithm, 3));
            let mut board = Board::new(15);
            let result = engine.get_move_with_stats(&mut board, Stone::Black);
            assert_eq!(result.best_move, Some(Pos::new(7, 7)));
            assert_eq!(result.nodes, 0);
        }
        let mut board = Board::new(10);
        assert_eq!(best_move(&mut board, 2, Algorithm::Minimax, Stone::Black), Some(Pos::new(5, 5)));
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = board_with(
            15,
            &[
                (7, 3, Stone::White),
                (0, 0, Stone::Black),
                (7, 4, Stone::White),
                (0, 2, Stone::Black),
                (7, 5, Stone::White),
                (14, 14, Stone::Black),
                (7, 6, Stone::White),
                (7, 8, Stone::Black),
            ],
        );
        for algorithm in Algorithm::ALL {
            let pos = best_move(&mut board, 1, algorithm, Stone::White);
            assert!(
                pos == Some(Pos::new(7, 7)) || pos == Some(Pos::new(7, 2)),
                "{algorithm} missed the win: {pos:?}"
            );
        }
    }

    #[test]
    fn test_engine_blocks_opponent_four() {
        let mut board = board_with(
            15,
            &[
                (7, 3, Stone::White),
                (7, 2, Stone::Black),
                (7, 4, Stone::White),
                (10, 10, Stone::Black),
                (7, 5, Stone::White),
                (11, 3, Stone::Black),
                (7, 6, Stone::White),
            ],
        );
        let engine = AIEngine::with_config(EngineConfig::new(Algorithm::AlphaBeta, 2));
        assert_eq!(engine.get_move(&mut board, Stone::Black), Some(Pos::new(7, 7)));
    }

    #[test]
    fn test_engine_no_move_after_game_over() {
        let stones: Vec<(u8, u8, Stone)> = (0..5).map(|c| (4, c, Stone::Black)).collect();
        let mut board = board_with(9, &stones);
        let engine = AIEngine::new();
        assert_eq!(engine.get_move(&mut board, Stone::White), None);
        assert_eq!(engine.get_move(&mut board, Stone::Black), None);
    }

    #[test]
    fn test_engine_rejects_empty_player() {
        let mut board = board_with(9, &[(4, 4, Stone::Black)]);
        let result = AIEngine::new().get_move_with_stats(&mut board, Stone::Empty);
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_engine_leaves_board_unchanged() {
        let mut board = board_with(
            15,
            &[(7, 7, Stone::Black), (7, 8, Stone::White), (8, 8, Stone::Black)],
        );
        let before = board.clone();
        for algorithm in Algorithm::ALL {
            let engine = AIEngine::with_config(EngineConfig::new(algorithm, 2));
            let pos = engine.get_move(&mut board, Stone::White);
            assert!(pos.is_some());
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_move_result_reports_stats() {
        let mut board = board_with(15, &[(7, 7, Stone::Black), (7, 8, Stone::White)]);
        let engine = AIEngine::with_config(EngineConfig::new(Algorithm::AlphaBeta, 2));
        let result = engine.get_move_with_stats(&mut board, Stone::Black);
        assert_eq!(result.algorithm, Algorithm::AlphaBeta);
        assert!(result.nodes > 1);
        assert!(result.score.abs() < alphabeta::WIN_SCORE);

        let engine = AIEngine::with_config(EngineConfig::new(Algorithm::Minimax, 2));
        let result = engine.get_move_with_stats(&mut board, Stone::Black);
        assert_eq!(result.algorithm, Algorithm::Minimax);
        assert_eq!(result.cutoffs, 0);
    }

    #[test]
    fn test_engine_setters() {
        let mut engine = AIEngine::new();
        engine.set_depth(5);
        engine.set_algorithm(Algorithm::Minimax);
        assert_eq!(engine.config().depth, 5);
        assert_eq!(engine.config().algorithm, Algorithm::Minimax);
    }

    #[test]
    fn test_zero_depth_falls_back_to_ordering() {
        let mut board = board_with(15, &[(7, 7, Stone::Black)]);
        let engine = AIEngine::with_config(EngineConfig::new(Algorithm::AlphaBeta, 0));
        let expected = order_moves(&board, get_candidates(&board), Stone::White)[0];
        assert_eq!(engine.get_move(&mut board, Stone::White), Some(expected));
    }

    #[test]
    fn test_custom_evaluator_engine() {
        let mut board = board_with(9, &[(4, 4, Stone::Black), (4, 5, Stone::White)]);
        let corner_bias = |b: &Board, _p: Stone| {
            b.last_move()
                .map_or(0, |m| -(i32::from(m.pos.row) + i32::from(m.pos.col)))
        };
        let engine = AIEngine::with_evaluator(corner_bias, EngineConfig::new(Algorithm::Minimax, 1).with_move_cap(None));
        assert_eq!(engine.get_move(&mut board, Stone::Black), Some(Pos::new(2, 2)));
    }

    #[test]
    fn test_algorithm_parse_and_display() {
        assert_eq!("minimax".parse::<Algorithm>(), Ok(Algorithm::Minimax));
        assert_eq!("Alpha-Beta".parse::<Algorithm>(), Ok(Algorithm::AlphaBeta));
        assert_eq!("alphabeta".parse::<Algorithm>(), Ok(Algorithm::AlphaBeta));
        assert_eq!(
            "negamax".parse::<Algorithm>(),
            Err(ConfigError::UnknownAlgorithm("negamax".to_string()))
        );
        assert_eq!(Algorithm::AlphaBeta.to_string(), "Alpha-Beta");
    }
}
