//! Board representation for Gomoku

pub mod bitboard;
pub mod board;


use thiserror::Error;

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, Placed};

/// Largest supported board (19x19)
pub const MAX_BOARD_SIZE: usize = 19;
pub const MAX_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE; // 361

/// Board size used when the driver does not pick one
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Stone colors
///
/// Black is the first player (+1), White the second (-1). The sign
/// convention is what makes the evaluator antisymmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Signed tri-state value: 0 empty, +1 black, -1 white
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Stone::Empty => 0,
            Stone::Black => 1,
            Stone::White => -1,
        }
    }

    #[inline]
    pub fn from_sign(sign: i8) -> Option<Stone> {
        match sign {
            0 => Some(Stone::Empty),
            1 => Some(Stone::Black),
            -1 => Some(Stone::White),
            _ => None,
        }
    }

    #[inline]
    pub fn is_player(self) -> bool {
        self != Stone::Empty
    }

    /// Console symbol
    pub fn symbol(self) -> char {
        match self {
            Stone::Empty => '.',
            Stone::Black => 'X',
            Stone::White => 'O',
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_BOARD_SIZE && (col as usize) < MAX_BOARD_SIZE);
        Self { row, col }
    }

    /// Row-major index on a board of the given size
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    /// Manhattan distance between two cells
    #[inline]
    pub fn manhattan(self, other: Pos) -> i32 {
        (i32::from(self.row) - i32::from(other.row)).abs()
            + (i32::from(self.col) - i32::from(other.col)).abs()
    }

    /// Step `k` cells along `(dr, dc)`, returning signed coordinates
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, k: i32) -> (i32, i32) {
        (i32::from(self.row) + dr * k, i32::from(self.col) + dc * k)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

/// A stone placed on the board, as recorded in the move history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub pos: Pos,
    pub stone: Stone,
}

/// Reasons a placement or undo is rejected. No mutation happens on error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: i32, col: i32, size: usize },
    #[error("({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },
    #[error("cannot place an empty stone")]
    EmptyStone,
}
