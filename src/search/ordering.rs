//! Move ordering for the alpha-beta search
//!
//! Each candidate is scored by the shapes it would create for the side to
//! move, plus (slightly discounted) the shapes it would take away from the
//! opponent, plus a small bonus for being near the center. Good moves first
//! means earlier cutoffs.

use crate::board::{Board, Pos, Stone};
use crate::eval::patterns::{contains_pattern, Cell, SHAPES};

/// All eight compass directions
const DIRECTIONS: [(i32, i32); 8] = [
    (0, 1),   // Right
    (1, 1),   // Down-Right
    (1, 0),   // Down
    (1, -1),  // Down-Left
    (0, -1),  // Left
    (-1, -1), // Up-Left
    (-1, 0),  // Up
    (-1, 1),  // Up-Right
];

/// Cells on each side of the candidate in a line
const REACH: i32 = 4;
const LINE: usize = 2 * REACH as usize + 1;

/// Manhattan radius that earns a center bonus
const CENTER_RADIUS: i32 = 5;
const CENTER_WEIGHT: i32 = 2;

/// The 9-cell line through `pos` along `(dr, dc)`, with `pos` itself
/// counted as `player`'s stone.
fn line_through(board: &Board, pos: Pos, dr: i32, dc: i32, player: Stone) -> [Cell; LINE] {
    let mut line = [Cell::OffBoard; LINE];
    for (i, k) in (-REACH..=REACH).enumerate() {
        line[i] = if k == 0 {
            Cell::Own
        } else {
            let (r, c) = pos.offset(dr, dc, k);
            Cell::classify(board.get(r, c), player)
        };
    }
    line
}

/// Shape score of the line through `pos` along `(dr, dc)` if `player` stood at `pos`.
///
/// Each shape (open four, four, open three, three, open two, two) counts
/// at most once per line.
pub fn pattern_score(board: &Board, pos: Pos, dr: i32, dc: i32, player: Stone) -> i32 {
    let line = line_through(board, pos, dr, dc, player);
    SHAPES
        .iter()
        .filter(|(alternatives, _)| alternatives.iter().any(|p| contains_pattern(&line, p)))
        .map(|&(_, weight)| weight)
        .sum()
}

/// Ranking key for playing `player` at `pos`, in tenths of a point.
///
/// `10 * create + 9 * block + 10 * center`, i.e. blocking is worth 0.9 of creating.
pub fn score_move(board: &Board, pos: Pos, player: Stone) -> i32 {
    let opponent = player.opponent();

    let create: i32 = DIRECTIONS
        .iter()
        .map(|&(dr, dc)| pattern_score(board, pos, dr, dc, player))
        .sum();
    let block: i32 = DIRECTIONS
        .iter()
        .map(|&(dr, dc)| pattern_score(board, pos, dr, dc, opponent))
        .sum();
    let center = (CENTER_RADIUS - pos.manhattan(board.center())).max(0) * CENTER_WEIGHT;

    create * 10 + block * 9 + center * 10
}

/// Sort candidates best-first for `player`.
///
/// The sort is stable, so equal keys keep the candidates' incoming
/// (row-major) order and results are reproducible.
pub fn order_moves(board: &Board, moves: Vec<Pos>, player: Stone) -> Vec<Pos> {
    let mut scored: Vec<(i32, Pos)> = moves
        .into_iter()
        .map(|pos| (score_move(board, pos, player), pos))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, pos)| pos).collect()
}
