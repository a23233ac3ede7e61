//! Plain depth-limited minimax
//!
//! Explores every candidate it keeps, with no pruning. Candidates are only
//! sorted by distance to the last move and cut to a fixed count, a much
//! cheaper (and weaker) scheme than the alpha-beta ordering. It is kept as
//! the baseline the alpha-beta search is measured against.

use crate::board::{Board, Pos, Stone};
use crate::eval::Evaluator;
use crate::rules::get_candidates;

use super::{terminal_score, SearchResult, SearchStats};

/// Score of a completed five; dominates any evaluation
pub const WIN_SCORE: i32 = 1_000_000;

/// Candidates kept per node unless configured otherwise
pub const DEFAULT_MOVE_CAP: usize = 10;

/// Minimax searcher for one player
pub struct Minimax<'e, E: Evaluator + ?Sized> {
    evaluator: &'e E,
    player: Stone,
    move_cap: Option<usize>,
    stats: SearchStats,
}

impl<'e, E: Evaluator + ?Sized> Minimax<'e, E> {
    pub fn new(evaluator: &'e E, player: Stone) -> Self {
        Self {
            evaluator,
            player,
            move_cap: Some(DEFAULT_MOVE_CAP),
            stats: SearchStats::default(),
        }
    }

    /// Limit candidates per node; `None` searches them all.
    #[must_use]
    pub fn with_move_cap(mut self, move_cap: Option<usize>) -> Self {
        self.move_cap = move_cap;
        self
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search `depth` plies below the current position.
    ///
    /// `maximizing` is true when `player` is to move.
    pub fn search(&mut self, board: &mut Board, depth: i8, maximizing: bool) -> SearchResult {
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
        let moves = self.nearest_moves(board);

        let mut best = SearchResult::seed(maximizing);
        for pos in moves {
            let score = match board.with_stone(pos, mover) {
                Ok(mut child) => self.search(&mut child, depth - 1, !maximizing).score,
                Err(_) => continue,
            };

            let improves = if maximizing {
                score > best.score
            } else {
                score < best.score
            };
            if improves {
                best = SearchResult { score, best_move: Some(pos) };
            }
        }

        best
    }

    /// Candidates sorted by Manhattan distance to the last move, truncated to the cap
    fn nearest_moves(&self, board: &Board) -> Vec<Pos> {
        let mut moves = get_candidates(board);
        if let Some(last) = board.last_move() {
            moves.sort_by_key(|pos| pos.manhattan(last.pos));
        }
        if let Some(cap) = self.move_cap {
            moves.truncate(cap);
        }
        moves
    }
}
