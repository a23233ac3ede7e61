//! Bitboard cell set used for candidate collection

use super::MAX_CELLS;

/// Set of board cells keyed by row-major index.
/// Uses 6 x u64 to cover up to 361 cells (6 * 64 = 384 >= 361).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: [u64; 6],
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: [0; 6] }
    }

    /// Insert an index, returning true if it was not already present
    #[inline]
    pub fn insert(&mut self, idx: usize) -> bool {
        debug_assert!(idx < MAX_CELLS);
        let (word, bit) = (idx / 64, idx % 64);
        let was_set = (self.bits[word] >> bit) & 1 == 1;
        self.bits[word] |= 1u64 << bit;
        !was_set
    }

    /// Iterate over set indices in ascending (row-major) order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter {
            bits: self.bits,
            word_idx: 0,
            current_word: self.bits[0],
        }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: [u64; 6],
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitboardIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_word == 0 {
            self.word_idx += 1;
            if self.word_idx >= self.bits.len() {
                return None;
            }
            self.current_word = self.bits[self.word_idx];
        }

        let bit_pos = self.current_word.trailing_zeros() as usize;
        // Clear the bit we just found
        self.current_word &= self.current_word - 1;

        Some(self.word_idx * 64 + bit_pos)
    }
}
