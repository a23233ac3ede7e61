//! AI vs AI duel: Minimax against Alpha-Beta
//!
//! Minimax plays Black and moves first, Alpha-Beta plays White. Each side
//! has its own depth, and the game stops on a five, a full board or an
//! optional move limit. Think times are collected per side so the two
//! searches can be compared.

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::board::{Board, Stone, DEFAULT_BOARD_SIZE};
use crate::config::{EngineConfig, DEFAULT_DEPTH};
use crate::engine::{AIEngine, Algorithm, MoveResult};
use crate::rules::{game_state, GameState};

/// How a duel ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuelOutcome {
    Won { algorithm: Algorithm, stone: Stone },
    /// Board filled with no five
    Draw,
    /// Move limit reached first
    MoveLimit,
    /// An engine produced no move on a live board
    Stalled,
}

impl DuelOutcome {
    pub fn winner(self) -> Option<Algorithm> {
        match self {
            DuelOutcome::Won { algorithm, .. } => Some(algorithm),
            _ => None,
        }
    }
}

/// Summary of a finished duel
#[derive(Debug, Clone)]
pub struct DuelReport {
    pub outcome: DuelOutcome,
    /// Stones placed during the duel
    pub moves: usize,
    pub board: Board,
    pub minimax_times: Vec<Duration>,
    pub alphabeta_times: Vec<Duration>,
}

fn average(times: &[Duration]) -> Option<Duration> {
    let n = u32::try_from(times.len()).ok().filter(|&n| n > 0)?;
    Some(times.iter().sum::<Duration>() / n)
}

impl DuelReport {
    pub fn minimax_average(&self) -> Option<Duration> {
        average(&self.minimax_times)
    }

    pub fn alphabeta_average(&self) -> Option<Duration> {
        average(&self.alphabeta_times)
    }

    /// Total minimax time over total alpha-beta time.
    ///
    /// `None` when either side never moved or alpha-beta took no measurable time.
    pub fn speedup(&self) -> Option<f64> {
        if self.minimax_times.is_empty() || self.alphabeta_times.is_empty() {
            return None;
        }
        let minimax: Duration = self.minimax_times.iter().sum();
        let alphabeta: Duration = self.alphabeta_times.iter().sum();
        if alphabeta.is_zero() {
            return None;
        }
        Some(minimax.as_nanos() as f64 / alphabeta.as_nanos() as f64)
    }
}

/// Duel settings
#[derive(Debug, Clone, Copy)]
pub struct Duel {
    pub size: usize,
    pub minimax_depth: i8,
    pub alphabeta_depth: i8,
    pub max_moves: Option<usize>,
    pub minimax_move_cap: Option<usize>,
}

impl Default for Duel {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            minimax_depth: DEFAULT_DEPTH,
            alphabeta_depth: DEFAULT_DEPTH,
            max_moves: None,
            minimax_move_cap: EngineConfig::default().minimax_move_cap,
        }
    }
}

impl Duel {
    pub fn run(&self) -> DuelReport {
        self.run_with(|_, _| {})
    }

    /// Play the duel, calling `on_move` after every placed stone.
    pub fn run_with(&self, mut on_move: impl FnMut(&Board, &MoveResult)) -> DuelReport {
        let minimax = AIEngine::with_config(
            EngineConfig::new(Algorithm::Minimax, self.minimax_depth).with_move_cap(self.minimax_move_cap),
        );
        let alphabeta = AIEngine::with_config(EngineConfig::new(Algorithm::AlphaBeta, self.alphabeta_depth));

        let mut board = Board::new(self.size);
        let mut minimax_times = Vec::new();
        let mut alphabeta_times = Vec::new();
        let mut turn = Stone::Black;

        let outcome = loop {
            match game_state(&board) {
                GameState::BlackWins => {
                    break DuelOutcome::Won { algorithm: Algorithm::Minimax, stone: Stone::Black }
                }
                GameState::WhiteWins => {
                    break DuelOutcome::Won { algorithm: Algorithm::AlphaBeta, stone: Stone::White }
                }
                GameState::Draw => break DuelOutcome::Draw,
                GameState::InProgress => {}
            }
            if self.max_moves.is_some_and(|limit| board.stone_count() >= limit) {
                break DuelOutcome::MoveLimit;
            }

            let (engine, times) = if turn == Stone::Black {
                (&minimax, &mut minimax_times)
            } else {
                (&alphabeta, &mut alphabeta_times)
            };

            let start = Instant::now();
            let result = engine.get_move_with_stats(&mut board, turn);
            times.push(start.elapsed());

            let Some(pos) = result.best_move else {
                warn!(algorithm = %result.algorithm, "engine returned no move");
                break DuelOutcome::Stalled;
            };
            if let Err(err) = board.place(pos, turn) {
                warn!(algorithm = %result.algorithm, %err, "engine returned an illegal move");
                break DuelOutcome::Stalled;
            }
            on_move(&board, &result);
            turn = turn.opponent();
        };

        let report = DuelReport {
            outcome,
            moves: board.stone_count(),
            board,
            minimax_times,
            alphabeta_times,
        };
        info!(
            outcome = ?report.outcome,
            moves = report.moves,
            minimax_avg = ?report.minimax_average(),
            alphabeta_avg = ?report.alphabeta_average(),
            speedup = ?report.speedup(),
            "duel finished"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    fn quick_duel(max_moves: Option<usize>) -> Duel {
        Duel {
            size: 9,
            minimax_depth: 1,
            alphabeta_depth: 1,
            max_moves,
            ..Duel::default()
        }
    }

    #[test]
    fn test_duel_move_limit() {
        let mut seen = Vec::new();
        let report = quick_duel(Some(6)).run_with(|board, result| {
            seen.push((board.stone_count(), result.algorithm));
        });

        assert_eq!(report.outcome, DuelOutcome::MoveLimit);
        assert_eq!(report.moves, 6);
        assert_eq!(report.minimax_times.len(), 3);
        assert_eq!(report.alphabeta_times.len(), 3);
        assert_eq!(seen.len(), 6);
        assert_eq!(seen[0], (1, Algorithm::Minimax));
        assert_eq!(seen[1], (2, Algorithm::AlphaBeta));
    }

    #[test]
    fn test_minimax_opens_at_center() {
        let report = quick_duel(Some(1)).run();
        assert_eq!(report.board.history()[0].pos, Pos::new(4, 4));
        assert_eq!(report.board.history()[0].stone, Stone::Black);
    }

    #[test]
    fn test_duel_plays_to_the_end() {
        let report = quick_duel(None).run();
        assert_ne!(report.outcome, DuelOutcome::MoveLimit);
        assert_ne!(report.outcome, DuelOutcome::Stalled);
        match report.outcome {
            DuelOutcome::Won { stone, .. } => {
                assert_eq!(game_state(&report.board).winner(), Some(stone));
            }
            DuelOutcome::Draw => assert!(report.board.is_full()),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_duel_is_deterministic() {
        let a = quick_duel(Some(10)).run();
        let b = quick_duel(Some(10)).run();
        assert_eq!(a.board, b.board);
    }

    #[test]
    fn test_report_averages() {
        let report = DuelReport {
            outcome: DuelOutcome::Draw,
            moves: 3,
            board: Board::new(9),
            minimax_times: vec![Duration::from_millis(30), Duration::from_millis(10)],
            alphabeta_times: vec![Duration::from_millis(10)],
        };
        assert_eq!(report.minimax_average(), Some(Duration::from_millis(20)));
        assert_eq!(report.alphabeta_average(), Some(Duration::from_millis(10)));
        assert_eq!(report.speedup(), Some(4.0));
    }

    #[test]
    fn test_report_without_times() {
        let report = DuelReport {
            outcome: DuelOutcome::MoveLimit,
            moves: 0,
            board: Board::new(9),
            minimax_times: Vec::new(),
            alphabeta_times: vec![Duration::ZERO],
        };
        assert_eq!(report.minimax_average(), None);
        assert_eq!(report.speedup(), None);
        assert_eq!(DuelOutcome::Draw.winner(), None);
    }
}
