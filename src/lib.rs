//! Gomoku engine with Minimax and Alpha-Beta search
//!
//! Standard free-style Gomoku on a square board of up to 19x19:
//! - Black (`X`) moves first, White (`O`) second
//! - Five or more in a row wins (overlines count)
//! - A full board with no five is a draw
//!
//! # Architecture
//!
//! - [`board`]: Board cells, move history and O(1) undo
//! - [`rules`]: Win detection and candidate move generation
//! - [`eval`]: Static window evaluation and shape patterns
//! - [`search`]: Plain minimax and alpha-beta with move ordering
//! - [`engine`]: Driver choosing a move for either player
//! - [`duel`], [`console`], [`ui`]: Front ends
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Algorithm, Board, EngineConfig, Pos, Stone};
//!
//! let mut board = Board::new(15);
//! let engine = AIEngine::with_config(EngineConfig::new(Algorithm::AlphaBeta, 2));
//!
//! board.place(Pos::new(7, 7), Stone::Black).unwrap();
//!
//! // AI responds as White
//! if let Some(pos) = engine.get_move(&mut board, Stone::White) {
//!     board.place(pos, Stone::White).unwrap();
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! assert_eq!(board.stone_count(), 2);
//! ```

pub mod board;
pub mod config;
pub mod console;
pub mod duel;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Move, MoveError, Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
pub use config::{ConfigError, EngineConfig};
pub use engine::{best_move, AIEngine, Algorithm, MoveResult};
pub use eval::{evaluate, Evaluator};
pub use rules::{check_win, game_state, get_candidates, GameState};
