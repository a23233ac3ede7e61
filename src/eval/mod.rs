//! Evaluation module for Gomoku positions
//!
//! This module provides pattern recognition and scoring for board positions:
//! - Leaf evaluation over 5-cell windows (`heuristic`)
//! - Window and shape weights shared with move ordering (`patterns`)

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, score_patterns, score_window, Evaluator, WindowEvaluator};
pub use patterns::{Cell, ShapeScore, WindowScore};
