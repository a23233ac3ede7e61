//! Pattern weights and cell classification for Gomoku evaluation
//!
//! Two scoring tables live here: the 5-cell window weights used at search
//! leaves, and the shape weights the move orderer uses on 9-cell lines.

use crate::board::Stone;

/// A cell as seen by one player while matching patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Own,
    Opponent,
    /// Past the board edge; matches no pattern cell
    OffBoard,
}

impl Cell {
    /// Classify a board lookup (`None` = off board) relative to `player`
    #[inline]
    pub fn classify(stone: Option<Stone>, player: Stone) -> Cell {
        match stone {
            None => Cell::OffBoard,
            Some(Stone::Empty) => Cell::Empty,
            Some(s) if s == player => Cell::Own,
            Some(_) => Cell::Opponent,
        }
    }
}

/// Leaf evaluation weights for a 5-cell window, indexed by stone count
pub struct WindowScore;

impl WindowScore {
    /// Window holding only the scoring player's stones (and empties)
    pub const OWN: [i32; 5] = [0, 1, 10, 100, 1_000];
    /// Window holding only the opponent's stones, discounted
    pub const OPPONENT: [i32; 5] = [0, 0, 9, 90, 900];
}

/// Shape weights used for move ordering
pub struct ShapeScore;

impl ShapeScore {
    /// `_XXXX_`
    pub const OPEN_FOUR: i32 = 1_000;
    /// `XXXX_` or `_XXXX`
    pub const FOUR: i32 = 100;
    /// `_XXX_`
    pub const OPEN_THREE: i32 = 50;
    /// `XXX_` or `_XXX`
    pub const THREE: i32 = 10;
    /// `_XX_`
    pub const OPEN_TWO: i32 = 5;
    /// `XX_` or `_XX`
    pub const TWO: i32 = 1;
}

use self::Cell::{Empty as E, Own as O};

/// Shapes checked by the orderer with their weights. Each entry lists the
/// alternatives that count as the same shape.
pub const SHAPES: [(&[&[Cell]], i32); 6] = [
    (&[&[E, O, O, O, O, E]], ShapeScore::OPEN_FOUR),
    (&[&[O, O, O, O, E], &[E, O, O, O, O]], ShapeScore::FOUR),
    (&[&[E, O, O, O, E]], ShapeScore::OPEN_THREE),
    (&[&[O, O, O, E], &[E, O, O, O]], ShapeScore::THREE),
    (&[&[E, O, O, E]], ShapeScore::OPEN_TWO),
    (&[&[O, O, E], &[E, O, O]], ShapeScore::TWO),
];

/// Does `pattern` occur anywhere in `line`?
#[inline]
pub fn contains_pattern(line: &[Cell], pattern: &[Cell]) -> bool {
    line.windows(pattern.len()).any(|w| w == pattern)
}
