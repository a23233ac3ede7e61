//! Static evaluation of Gomoku positions
//!
//! Every 5-cell window that fits on the board, in the four line directions,
//! is scored by how many stones of one color it holds. A window with both
//! colors can never become five and scores nothing.
//!
//! The evaluation is antisymmetric by construction:
//! `evaluate(board, p) == -evaluate(board, p.opponent())`.

use crate::board::{Board, Pos, Stone};

use super::patterns::WindowScore;

/// Line directions for window scans: right, down, down-right, down-left
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Cells per evaluation window
pub const WINDOW: usize = 5;

/// Scores a position for a player; higher is better for that player.
///
/// The search takes its evaluator as a parameter, so alternative scoring
/// functions (including plain closures) can be plugged in.
pub trait Evaluator {
    fn evaluate(&self, board: &Board, player: Stone) -> i32;
}

impl<F> Evaluator for F
where
    F: Fn(&Board, Stone) -> i32,
{
    fn evaluate(&self, board: &Board, player: Stone) -> i32 {
        self(board, player)
    }
}

/// The default evaluator: 5-cell window pattern counting
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowEvaluator;

impl Evaluator for WindowEvaluator {
    fn evaluate(&self, board: &Board, player: Stone) -> i32 {
        evaluate(board, player)
    }
}

/// Evaluate the board from the perspective of `player`.
///
/// Returns 0 for [`Stone::Empty`].
#[must_use]
pub fn evaluate(board: &Board, player: Stone) -> i32 {
    if !player.is_player() {
        return 0;
    }
    score_patterns(board, player) - score_patterns(board, player.opponent())
}

/// Sum of [`score_window`] over every window that fits on the board.
pub fn score_patterns(board: &Board, player: Stone) -> i32 {
    let size = board.size();
    let reach = (WINDOW - 1) as i32;
    let mut score = 0;

    for row in 0..size {
        for col in 0..size {
            #[allow(clippy::cast_possible_truncation)]
            let start = Pos::new(row as u8, col as u8);
            for &(dr, dc) in &DIRECTIONS {
                let (end_r, end_c) = start.offset(dr, dc, reach);
                if !board.in_bounds(end_r, end_c) {
                    continue;
                }

                let mut window = [Stone::Empty; WINDOW];
                for (k, cell) in window.iter_mut().enumerate() {
                    let (r, c) = start.offset(dr, dc, k as i32);
                    *cell = board.get(r, c).unwrap_or_default();
                }
                score += score_window(&window, player);
            }
        }
    }

    score
}

/// Score one 5-cell window for `player`.
///
/// - both colors present: 0 (dead window)
/// - only `player` stones: 1 / 10 / 100 / 1000 for 1-4 stones
/// - only opponent stones: 0 / 9 / 90 / 900 for 1-4 stones
/// - empty or completely filled: 0
pub fn score_window(window: &[Stone; WINDOW], player: Stone) -> i32 {
    let opponent = player.opponent();
    let own = window.iter().filter(|&&s| s == player).count();
    let theirs = window.iter().filter(|&&s| s == opponent).count();

    match (own, theirs) {
        (0, 0) => 0,
        (n, 0) if n < WINDOW => WindowScore::OWN[n],
        (0, n) if n < WINDOW => WindowScore::OPPONENT[n],
        _ => 0,
    }
}
