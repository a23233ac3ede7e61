//! Game session state for the GUI
//!
//! Owns the board, whose turn it is, and the background AI worker. The
//! worker gets a copy of the board and sends its [`MoveResult`] back over a
//! channel that the app polls once per frame.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::config::DEFAULT_DEPTH;
use crate::rules::{game_state, winning_line, GameState};
use crate::{AIEngine, Algorithm, Board, EngineConfig, MoveResult, Pos, Stone, DEFAULT_BOARD_SIZE};

/// Who plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Human against the selected algorithm
    HumanVsAi { human: Stone },
    /// Minimax as Black against the selected algorithm as White
    AiVsAi,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::HumanVsAi { human: Stone::Black }
    }
}

/// Options chosen in the setup panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub size: usize,
    pub algorithm: Algorithm,
    pub depth: i8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            algorithm: Algorithm::AlphaBeta,
            depth: DEFAULT_DEPTH,
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Think times per algorithm, as measured by the GUI
#[derive(Debug, Clone, Default)]
pub struct ThinkTimes {
    minimax: Vec<Duration>,
    alphabeta: Vec<Duration>,
}

impl ThinkTimes {
    fn times(&self, algorithm: Algorithm) -> &[Duration] {
        match algorithm {
            Algorithm::Minimax => &self.minimax,
            Algorithm::AlphaBeta => &self.alphabeta,
        }
    }

    pub fn record(&mut self, algorithm: Algorithm, elapsed: Duration) {
        match algorithm {
            Algorithm::Minimax => self.minimax.push(elapsed),
            Algorithm::AlphaBeta => self.alphabeta.push(elapsed),
        }
    }

    pub fn count(&self, algorithm: Algorithm) -> usize {
        self.times(algorithm).len()
    }

    pub fn average(&self, algorithm: Algorithm) -> Option<Duration> {
        let times = self.times(algorithm);
        let n = u32::try_from(times.len()).ok().filter(|&n| n > 0)?;
        Some(times.iter().sum::<Duration>() / n)
    }
}

/// One game in the window
pub struct GameSession {
    pub board: Board,
    pub mode: GameMode,
    pub settings: Settings,
    pub state: GameState,
    pub winning_line: Option<Vec<Pos>>,
    pub last_ai_result: Option<MoveResult>,
    pub think_times: ThinkTimes,
    pub message: Option<String>,
    ai_state: AiState,
}

impl GameSession {
    pub fn new(mode: GameMode, settings: Settings) -> Self {
        Self {
            board: Board::new(settings.size),
            mode,
            settings,
            state: GameState::InProgress,
            winning_line: None,
            last_ai_result: None,
            think_times: ThinkTimes::default(),
            message: None,
            ai_state: AiState::Idle,
        }
    }

    /// Start over with the same mode and settings
    pub fn reset(&mut self) {
        *self = Self::new(self.mode, self.settings);
    }

    /// Black moves first, then the colors alternate.
    pub fn current_turn(&self) -> Stone {
        self.board.last_move().map_or(Stone::Black, |m| m.stone.opponent())
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Engine settings for the AI playing `stone`, or `None` for a human.
    pub fn engine_config(&self, stone: Stone) -> Option<EngineConfig> {
        let algorithm = match self.mode {
            GameMode::HumanVsAi { human } if stone == human => return None,
            GameMode::HumanVsAi { .. } => self.settings.algorithm,
            GameMode::AiVsAi if stone == Stone::Black => Algorithm::Minimax,
            GameMode::AiVsAi => self.settings.algorithm,
        };
        Some(EngineConfig::new(algorithm, self.settings.depth))
    }

    pub fn is_human_turn(&self) -> bool {
        self.engine_config(self.current_turn()).is_none()
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Place a human stone at `pos`
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_over() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() || !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }
        self.execute_move(pos).map_err(|err| err.to_string())
    }

    fn execute_move(&mut self, pos: Pos) -> Result<(), crate::MoveError> {
        let color = self.current_turn();
        self.board.place(pos, color)?;
        self.message = None;
        self.refresh_state();
        Ok(())
    }

    fn refresh_state(&mut self) {
        self.state = game_state(&self.board);
        self.winning_line = match self.state.winner() {
            Some(_) => self.board.last_move().and_then(|m| winning_line(&self.board, m.pos)),
            None => None,
        };
    }

    /// Hand the position to a worker thread if the AI is to move
    pub fn start_ai_thinking(&mut self) {
        if self.is_over() || self.is_ai_thinking() {
            return;
        }
        let color = self.current_turn();
        let Some(config) = self.engine_config(color) else {
            return;
        };

        let mut board = self.board.clone();
        let (tx, rx) = channel();

        thread::spawn(move || {
            let engine = AIEngine::with_config(config);
            let result = engine.get_move_with_stats(&mut board, color);
            // The session may have been reset in the meantime
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the worker's move once it is ready
    pub fn check_ai_result(&mut self) {
        let received = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI worker stopped unexpectedly".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        let Some((result, elapsed)) = received else {
            return;
        };
        self.ai_state = AiState::Idle;
        self.think_times.record(result.algorithm, elapsed);
        debug!(algorithm = %result.algorithm, ?elapsed, best_move = ?result.best_move, "AI move received");

        match result.best_move {
            Some(pos) => {
                if let Err(err) = self.execute_move(pos) {
                    warn!(%err, "AI move rejected");
                    self.message = Some(format!("AI move rejected: {err}"));
                }
            }
            None => self.message = Some("AI could not find a move".to_string()),
        }
        self.last_ai_result = Some(result);
    }

    /// Take back the last move; against the AI, the last human move and the reply.
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }
        match self.mode {
            GameMode::HumanVsAi { human } => {
                while let Some(undone) = self.board.undo() {
                    if undone.stone == human {
                        break;
                    }
                }
            }
            GameMode::AiVsAi => {
                self.board.undo();
            }
        }
        self.message = None;
        self.refresh_state();
    }
}
