//! Game rules for standard Gomoku
//!
//! - Win conditions (five or more in a row, judged at the last move)
//! - Candidate move generation for the search

pub mod movegen;
pub mod win;

// Re-exports for convenient access
pub use movegen::{get_candidates, CANDIDATE_RADIUS, OPENING_WINDOW};
pub use win::{check_win, game_state, winning_line, GameState, WIN_LENGTH};
