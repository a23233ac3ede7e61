//! Depth-limited minimax with alpha-beta pruning
//!
//! The searching player is always the maximizer. Candidates come from the
//! proximity move generator and are ranked by [`order_moves`] for the side
//! to move, so strong moves are tried first and siblings are skipped as
//! soon as `beta <= alpha`.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::eval::WindowEvaluator;
//! use gomoku::search::{AlphaBeta, INF};
//!
//! let mut board = Board::new(15);
//! board.place(Pos::new(7, 7), Stone::Black).unwrap();
//!
//! let mut search = AlphaBeta::new(&WindowEvaluator, Stone::White);
//! let result = search.search(&mut board, 2, -INF, INF, true);
//! assert!(result.best_move.is_some());
//! assert_eq!(board.stone_count(), 1);
//! ```

use crate::board::{Board, Stone};
use crate::eval::Evaluator;
use crate::rules::get_candidates;

use super::ordering::order_moves;
use super::{terminal_score, SearchResult, SearchStats};

/// Score of a completed five; dominates any evaluation
pub const WIN_SCORE: i32 = 100_000;

/// Alpha-beta searcher for one player
pub struct AlphaBeta<'e, E: Evaluator + ?Sized> {
    evaluator: &'e E,
    player: Stone,
    stats: SearchStats,
}

impl<'e, E: Evaluator + ?Sized> AlphaBeta<'e, E> {
    pub fn new(evaluator: &'e E, player: Stone) -> Self {
        Self {
            evaluator,
            player,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search `depth` plies below the current position.
    ///
    /// `maximizing` is true when `player` is to move. Depths of zero or
    /// less evaluate immediately.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: i8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.stats.nodes += 1;

        if let Some(score) = terminal_score(board, self.player, WIN_SCORE) {
            return SearchResult::leaf(score);
        }

        if depth <= 0 || board.is_full() {
            self.stats.evaluations += 1;
            return SearchResult::leaf(self.evaluator.evaluate(board, self.player));
        }

        let mover = if maximizing {
            self.player
        } else {
            self.player.opponent()
        };
        let moves = order_moves(board, get_candidates(board), mover);

        let mut best = SearchResult::seed(maximizing);
        for pos in moves {
            let score = match board.with_stone(pos, mover) {
                Ok(mut child) => self.search(&mut child, depth - 1, alpha, beta, !maximizing).score,
                Err(_) => continue,
            };

            if maximizing {
                if score > best.score {
                    best = SearchResult { score, best_move: Some(pos) };
                }
                alpha = alpha.max(best.score);
            } else {
                if score < best.score {
                    best = SearchResult { score, best_move: Some(pos) };
                }
                beta = beta.min(best.score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}
