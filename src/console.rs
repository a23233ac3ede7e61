//! Text-mode game: a human against the AI on stdin/stdout
//!
//! Moves are typed as `row col`, both 1-based. Bad input is reported and
//! asked for again; `undo` takes back the last human move together with the
//! AI reply, and `quit` ends the game.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::warn;

use crate::board::{Board, Pos, Stone};
use crate::engine::AIEngine;
use crate::rules::{game_state, GameState};

/// Rejected console input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("please enter a move as 'row col'")]
    Empty,
    #[error("could not read '{0}', expected two numbers like '8 8'")]
    Malformed(String),
    #[error("{row} {col} is off the board, rows and columns run from 1 to {size}")]
    OutOfRange { row: i64, col: i64, size: usize },
    #[error("{row} {col} is already taken")]
    Occupied { row: i64, col: i64 },
}

/// One line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Pos),
    Undo,
    Quit,
}

/// Parse a line against the current board.
///
/// Accepts `row col` or `row,col` with 1-based coordinates, plus the words
/// `undo` and `quit`.
pub fn parse_command(line: &str, board: &Board) -> Result<Command, InputError> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" => return Err(InputError::Empty),
        "undo" | "u" => return Ok(Command::Undo),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let malformed = || InputError::Malformed(line.to_string());
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };
    let row: i64 = row.parse().map_err(|_| malformed())?;
    let col: i64 = col.parse().map_err(|_| malformed())?;

    let size = board.size();
    let in_range = |v: i64| (1..=size as i64).contains(&v);
    if !in_range(row) || !in_range(col) {
        return Err(InputError::OutOfRange { row, col, size });
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pos = Pos::new((row - 1) as u8, (col - 1) as u8);
    if !board.is_empty(pos) {
        return Err(InputError::Occupied { row, col });
    }
    Ok(Command::Move(pos))
}

/// Human vs AI game state for the console
pub struct ConsoleGame {
    board: Board,
    engine: AIEngine,
    human: Stone,
}

impl ConsoleGame {
    pub fn new(size: usize, engine: AIEngine, human: Stone) -> Self {
        Self {
            board: Board::new(size),
            engine,
            human,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Black moves first, then the colors alternate.
    fn to_move(&self) -> Stone {
        self.board.last_move().map_or(Stone::Black, |m| m.stone.opponent())
    }

    /// Take back moves up to and including the human's last one.
    ///
    /// Returns the number of stones removed.
    fn undo_turn(&mut self) -> usize {
        let mut removed = 0;
        while let Some(undone) = self.board.undo() {
            removed += 1;
            if undone.stone == self.human {
                break;
            }
        }
        removed
    }

    /// Play until the game ends, the player quits or input runs out.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> io::Result<GameState> {
        writeln!(
            out,
            "You play {} ({}). Enter moves as 'row col', or 'undo' / 'quit'.",
            if self.human == Stone::Black { "Black" } else { "White" },
            self.human.symbol()
        )?;
        write!(out, "{}", self.board)?;

        let mut line = String::new();
        loop {
            let state = game_state(&self.board);
            if state.is_over() {
                let verdict = match state.winner() {
                    Some(stone) if stone == self.human => "You win!",
                    Some(_) => "The AI wins.",
                    None => "Draw, the board is full.",
                };
                writeln!(out, "{verdict}")?;
                return Ok(state);
            }

            let turn = self.to_move();
            if turn == self.human {
                write!(out, "Your move: ")?;
                out.flush()?;
                line.clear();
                if input.read_line(&mut line)? == 0 {
                    return Ok(state);
                }

                match parse_command(&line, &self.board) {
                    Ok(Command::Quit) => return Ok(state),
                    Ok(Command::Undo) => {
                        if self.undo_turn() == 0 {
                            writeln!(out, "Nothing to undo.")?;
                            continue;
                        }
                    }
                    Ok(Command::Move(pos)) => {
                        if let Err(err) = self.board.place(pos, turn) {
                            writeln!(out, "{err}")?;
                            continue;
                        }
                    }
                    Err(err) => {
                        writeln!(out, "{err}")?;
                        continue;
                    }
                }
            } else {
                let result = self.engine.get_move_with_stats(&mut self.board, turn);
                let Some(pos) = result.best_move else {
                    warn!("AI has no move on a live board");
                    return Ok(state);
                };
                if let Err(err) = self.board.place(pos, turn) {
                    warn!(%err, "AI chose an illegal move");
                    return Ok(state);
                }
                writeln!(
                    out,
                    "AI ({}) plays {} {} in {} ms",
                    result.algorithm,
                    pos.row + 1,
                    pos.col + 1,
                    result.time_ms
                )?;
            }
            write!(out, "{}", self.board)?;
        }
    }
}
