//! Board structure with move history for O(1) undo

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::bitboard::Bitboard;
use super::{Move, MoveError, Pos, Stone, MAX_BOARD_SIZE};

/// Square Gomoku board with an ordered move history
///
/// Every stone on the board has exactly one history entry, so the history
/// length is the stone count and its tail is the last move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major cells
    cells: Vec<Stone>,
    history: Vec<Move>,
}

impl Board {
    /// Create an empty `size` x `size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or larger than [`MAX_BOARD_SIZE`].
    pub fn new(size: usize) -> Self {
        assert!(
            (1..=MAX_BOARD_SIZE).contains(&size),
            "board size must be within 1..={MAX_BOARD_SIZE}, got {size}"
        );
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
            history: Vec::with_capacity(size * size),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Center cell (used for openings and the ordering bonus)
    #[inline]
    pub fn center(&self) -> Pos {
        let c = (self.size / 2) as u8;
        Pos::new(c, c)
    }

    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        let size = self.size as i32;
        row >= 0 && row < size && col >= 0 && col < size
    }

    /// Convert signed coordinates into a position on this board
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pos(&self, row: i32, col: i32) -> Option<Pos> {
        self.in_bounds(row, col).then(|| Pos::new(row as u8, col as u8))
    }

    /// Stone at signed coordinates; `None` means off the board.
    #[inline]
    pub fn get(&self, row: i32, col: i32) -> Option<Stone> {
        self.pos(row, col).map(|pos| self.stone_at(pos))
    }

    /// Stone at a position known to be on the board
    #[inline]
    pub fn stone_at(&self, pos: Pos) -> Stone {
        debug_assert!(
            self.in_bounds(i32::from(pos.row), i32::from(pos.col)),
            "{pos:?} is off a {0}x{0} board",
            self.size
        );
        self.cells[pos.to_index(self.size)]
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.stone_at(pos) == Stone::Empty
    }

    /// True iff `(row, col)` is on the board and empty
    pub fn is_valid_move(&self, row: i32, col: i32) -> bool {
        self.get(row, col) == Some(Stone::Empty)
    }

    /// Place a stone and record it in the history.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> Result<(), MoveError> {
        if !stone.is_player() {
            return Err(MoveError::EmptyStone);
        }
        if !self.in_bounds(i32::from(pos.row), i32::from(pos.col)) {
            return Err(MoveError::OutOfBounds {
                row: i32::from(pos.row),
                col: i32::from(pos.col),
                size: self.size,
            });
        }
        let idx = pos.to_index(self.size);
        if self.cells[idx] != Stone::Empty {
            return Err(MoveError::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }
        self.cells[idx] = stone;
        self.history.push(Move { pos, stone });
        Ok(())
    }

    /// Place at signed coordinates (driver input may be negative)
    pub fn place_at(&mut self, row: i32, col: i32, stone: Stone) -> Result<(), MoveError> {
        let pos = self.pos(row, col).ok_or(MoveError::OutOfBounds {
            row,
            col,
            size: self.size,
        })?;
        self.place(pos, stone)
    }

    /// Remove the most recent stone. Returns `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<Move> {
        let last = self.history.pop()?;
        self.cells[last.pos.to_index(self.size)] = Stone::Empty;
        Some(last)
    }

    /// Place a stone for the lifetime of the returned guard.
    ///
    /// The stone is taken back when the guard drops, including during unwinding.
    pub fn with_stone(&mut self, pos: Pos, stone: Stone) -> Result<Placed<'_>, MoveError> {
        self.place(pos, stone)?;
        Ok(Placed { board: self })
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.history.len() == self.cells.len()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Every empty cell in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &stone)| stone == Stone::Empty)
            .map(move |(idx, _)| Pos::from_index(idx, size))
    }

    /// Empty cells within a square window of half-width `radius` around any stone.
    ///
    /// Returned in row-major order; empty when the board has no stones.
    pub fn candidate_moves(&self, radius: i32) -> Vec<Pos> {
        let mut seen = Bitboard::new();

        for mv in &self.history {
            for dr in -radius..=radius {
                for dc in -radius..=radius {
                    let (r, c) = mv.pos.offset(dr, dc, 1);
                    if let Some(pos) = self.pos(r, c) {
                        if self.is_empty(pos) {
                            seen.insert(pos.to_index(self.size));
                        }
                    }
                }
            }
        }

        seen.iter_ones()
            .map(|idx| Pos::from_index(idx, self.size))
            .collect()
    }

    /// Reset to an empty board of the same size
    pub fn clear(&mut self) {
        self.cells.fill(Stone::Empty);
        self.history.clear();
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 1..=self.size {
            write!(f, "{col:>3}")?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{:>3}", row + 1)?;
            for col in 0..self.size {
                let stone = self.cells[row * self.size + col];
                write!(f, "{:>3}", stone.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Guard returned by [`Board::with_stone`]; undoes its placement on drop.
pub struct Placed<'a> {
    board: &'a mut Board,
}

impl Deref for Placed<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placed<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placed<'_> {
    fn drop(&mut self) {
        self.board.undo();
    }
}
