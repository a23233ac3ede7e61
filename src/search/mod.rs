//! Search module for Gomoku AI
//!
//! Contains:
//! - Move ordering by local shape patterns
//! - Plain minimax with proximity ordering and a move cap
//! - Alpha-beta pruning with pattern-based ordering
//!
//! Both searches mutate the board in place and leave it exactly as they
//! found it: every stone placed during lookahead is held by a
//! [`Placed`](crate::board::Placed) guard and taken back when the guard drops.

pub mod alphabeta;
pub mod minimax;
pub mod ordering;

use crate::board::{Board, Pos, Stone};
use crate::rules::check_win;

pub use alphabeta::AlphaBeta;
pub use minimax::Minimax;
pub use ordering::{order_moves, pattern_score, score_move};

/// Accumulator seed for best-score tracking; never a real evaluation
pub const INF: i32 = i32::MAX;

/// Outcome of a search call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    /// `None` at leaves, or when no candidate beat the seed
    pub best_move: Option<Pos>,
}

impl SearchResult {
    #[inline]
    fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }

    #[inline]
    fn seed(maximizing: bool) -> Self {
        Self::leaf(if maximizing { -INF } else { INF })
    }
}

/// Work counters for comparing the two searches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search calls, including leaves
    pub nodes: u64,
    /// Static evaluations performed
    pub evaluations: u64,
    /// Sibling lists abandoned by a cutoff (alpha-beta only)
    pub cutoffs: u64,
}

/// Win/loss score if the last move completed five, from `player`'s side.
fn terminal_score(board: &Board, player: Stone, win_score: i32) -> Option<i32> {
    let last = board.last_move()?;
    if !check_win(board, last.pos) {
        return None;
    }
    Some(if last.stone == player { win_score } else { -win_score })
}
