//! Engine and game configuration
//!
//! The core board accepts any size up to [`MAX_BOARD_SIZE`]; the narrower
//! ranges here apply to the front ends (CLI and GUI).

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::board::MAX_BOARD_SIZE;
use crate::engine::Algorithm;
use crate::search::minimax::DEFAULT_MOVE_CAP;

/// Board sizes offered to players
pub const BOARD_SIZE_RANGE: RangeInclusive<usize> = 9..=MAX_BOARD_SIZE;

/// Search depths offered to players
pub const DEPTH_RANGE: RangeInclusive<i8> = 1..=5;

pub const DEFAULT_DEPTH: i8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {0} is outside {min}..={max}", min = BOARD_SIZE_RANGE.start(), max = BOARD_SIZE_RANGE.end())]
    BoardSize(usize),

    #[error("search depth {0} is outside {min}..={max}", min = DEPTH_RANGE.start(), max = DEPTH_RANGE.end())]
    Depth(i8),

    #[error("unknown algorithm '{0}' (expected 'minimax' or 'alphabeta')")]
    UnknownAlgorithm(String),
}

/// Settings for one [`AIEngine`](crate::AIEngine)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub depth: i8,
    pub algorithm: Algorithm,
    /// Candidates kept per minimax node; `None` keeps all of them
    pub minimax_move_cap: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            algorithm: Algorithm::AlphaBeta,
            minimax_move_cap: Some(DEFAULT_MOVE_CAP),
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn new(algorithm: Algorithm, depth: i8) -> Self {
        Self {
            depth,
            algorithm,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_move_cap(mut self, cap: Option<usize>) -> Self {
        self.minimax_move_cap = cap;
        self
    }

    /// Reject depths the front ends do not offer.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if DEPTH_RANGE.contains(&self.depth) {
            Ok(())
        } else {
            Err(ConfigError::Depth(self.depth))
        }
    }
}

pub fn validate_board_size(size: usize) -> Result<usize, ConfigError> {
    if BOARD_SIZE_RANGE.contains(&size) {
        Ok(size)
    } else {
        Err(ConfigError::BoardSize(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.depth, 3);
        assert_eq!(config.algorithm, Algorithm::AlphaBeta);
        assert_eq!(config.minimax_move_cap, Some(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_depth_validation() {
        assert!(EngineConfig::new(Algorithm::Minimax, 1).validate().is_ok());
        assert!(EngineConfig::new(Algorithm::Minimax, 5).validate().is_ok());
        assert_eq!(
            EngineConfig::new(Algorithm::AlphaBeta, 0).validate(),
            Err(ConfigError::Depth(0))
        );
        assert_eq!(
            EngineConfig::new(Algorithm::AlphaBeta, 6).validate(),
            Err(ConfigError::Depth(6))
        );
    }

    #[test]
    fn test_board_size_validation() {
        assert_eq!(validate_board_size(9), Ok(9));
        assert_eq!(validate_board_size(19), Ok(19));
        assert_eq!(validate_board_size(8), Err(ConfigError::BoardSize(8)));
        assert_eq!(validate_board_size(20), Err(ConfigError::BoardSize(20)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::BoardSize(4).to_string(),
            "board size 4 is outside 9..=19"
        );
        assert_eq!(
            ConfigError::Depth(9).to_string(),
            "search depth 9 is outside 1..=5"
        );
    }
}
