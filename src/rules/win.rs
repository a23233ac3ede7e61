//! Win condition checking for standard Gomoku
//!
//! A player wins by placing a stone that completes five or more of their
//! stones in a row (overlines count). Only the most recent move can create
//! a new line, so detection always starts from that stone.

use crate::board::{Board, Pos, Stone};

/// Axis directions (each axis is scanned both ways)
const AXES: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Anti-diagonal SW
];

/// Stones needed in a row to win
pub const WIN_LENGTH: i32 = 5;

/// Outcome of a game as seen from the last move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    /// First player (Black) completed five
    BlackWins,
    /// Second player (White) completed five
    WhiteWins,
    Draw,
}

impl GameState {
    pub fn winner(self) -> Option<Stone> {
        match self {
            GameState::BlackWins => Some(Stone::Black),
            GameState::WhiteWins => Some(Stone::White),
            GameState::InProgress | GameState::Draw => None,
        }
    }

    #[inline]
    pub fn is_over(self) -> bool {
        self != GameState::InProgress
    }

    fn won_by(stone: Stone) -> Self {
        match stone {
            Stone::Black => GameState::BlackWins,
            Stone::White => GameState::WhiteWins,
            Stone::Empty => GameState::InProgress,
        }
    }
}

/// Count same-colored stones from `pos` (exclusive) along `(dr, dc)`, at most `limit`.
#[inline]
fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone, limit: i32) -> i32 {
    let mut count = 0;
    for step in 1..=limit {
        let (r, c) = pos.offset(dr, dc, step);
        if board.get(r, c) != Some(color) {
            break;
        }
        count += 1;
    }
    count
}

/// Player stone at `pos`, checked against this board's size
fn player_at(board: &Board, pos: Pos) -> Option<Stone> {
    board
        .get(i32::from(pos.row), i32::from(pos.col))
        .filter(|stone| stone.is_player())
}

/// Does the stone at `pos` complete five in a row?
///
/// Scans up to four cells each way along the four axes. An empty cell at
/// `pos`, or a `pos` outside this board, never wins.
pub fn check_win(board: &Board, pos: Pos) -> bool {
    let Some(color) = player_at(board, pos) else {
        return false;
    };

    AXES.iter().any(|&(dr, dc)| {
        let forward = run_length(board, pos, dr, dc, color, WIN_LENGTH - 1);
        let backward = run_length(board, pos, -dr, -dc, color, WIN_LENGTH - 1);
        1 + forward + backward >= WIN_LENGTH
    })
}

/// Cells of the winning line through `pos`, ordered from one end to the other.
///
/// Unlike [`check_win`] this follows the whole run, so overlines are returned in full.
pub fn winning_line(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    let color = player_at(board, pos)?;

    let limit = board.size() as i32;
    for &(dr, dc) in &AXES {
        let backward = run_length(board, pos, -dr, -dc, color, limit);
        let forward = run_length(board, pos, dr, dc, color, limit);
        if 1 + forward + backward < WIN_LENGTH {
            continue;
        }

        let line = (-backward..=forward)
            .filter_map(|k| {
                let (r, c) = pos.offset(dr, dc, k);
                board.pos(r, c)
            })
            .collect();
        return Some(line);
    }
    None
}

/// Current game state, judged from the last move.
pub fn game_state(board: &Board) -> GameState {
    if let Some(last) = board.last_move() {
        if check_win(board, last.pos) {
            return GameState::won_by(last.stone);
        }
    }

    if board.is_full() {
        GameState::Draw
    } else {
        GameState::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, stones: &[(u8, u8, Stone)]) -> Board {
        let mut board = Board::new(size);
        for &(r, c, s) in stones {
            board.place(Pos::new(r, c), s).unwrap();
        }
        board
    }

    #[test]
    fn test_horizontal_win() {
        let stones: Vec<_> = (0..5).map(|c| (3, c, Stone::Black)).collect();
        let board = board_with(15, &stones);
        assert!(check_win(&board, Pos::new(3, 4)));
        assert_eq!(game_state(&board), GameState::BlackWins);
    }

    #[test]
    fn test_vertical_win_for_second_player() {
        let stones: Vec<_> = (0..5).map(|r| (r, 3, Stone::White)).collect();
        let board = board_with(15, &stones);
        assert!(check_win(&board, Pos::new(4, 3)));
        assert_eq!(game_state(&board), GameState::WhiteWins);
        assert_eq!(game_state(&board).winner(), Some(Stone::White));
    }

    #[test]
    fn test_diagonal_win() {
        let stones: Vec<_> = (0..5).map(|i| (i, i, Stone::Black)).collect();
        let board = board_with(15, &stones);
        assert!(check_win(&board, Pos::new(4, 4)));
        assert_eq!(game_state(&board), GameState::BlackWins);
    }

    #[test]
    fn test_anti_diagonal_win() {
        let stones: Vec<_> = (0..5).map(|i| (i, 4 - i, Stone::White)).collect();
        let board = board_with(15, &stones);
        assert!(check_win(&board, Pos::new(4, 0)));
        assert_eq!(game_state(&board), GameState::WhiteWins);
    }

    #[test]
    fn test_win_detected_from_middle_stone() {
        // Last stone fills the gap: X X _ X X
        let board = board_with(
            15,
            &[
                (7, 5, Stone::Black),
                (7, 6, Stone::Black),
                (7, 8, Stone::Black),
                (7, 9, Stone::Black),
                (7, 7, Stone::Black),
            ],
        );
        assert!(check_win(&board, Pos::new(7, 7)));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let stones: Vec<_> = (0..4).map(|c| (3, c, Stone::Black)).collect();
        let board = board_with(15, &stones);
        for c in 0..4 {
            assert!(!check_win(&board, Pos::new(3, c)));
        }
        assert_eq!(game_state(&board), GameState::InProgress);
    }

    #[test]
    fn test_four_not_win_on_every_axis() {
        let fours: [Vec<(u8, u8)>; 3] = [
            (0..4).map(|i| (i + 5, 2)).collect(),
            (0..4).map(|i| (i + 3, i + 3)).collect(),
            (0..4).map(|i| (i + 6, 12 - i)).collect(),
        ];
        for cells in fours {
            let stones: Vec<(u8, u8, Stone)> = cells.iter().map(|&(r, c)| (r, c, Stone::White)).collect();
            let board = board_with(15, &stones);
            for &(r, c) in &cells {
                assert!(!check_win(&board, Pos::new(r, c)), "four through ({r}, {c})");
                assert!(winning_line(&board, Pos::new(r, c)).is_none());
            }
            assert_eq!(game_state(&board), GameState::InProgress);
        }
    }

    #[test]
    fn test_off_board_pos_never_wins() {
        // On 9x9, (0, 10) would alias (1, 1) in row-major order
        let stones: Vec<(u8, u8, Stone)> = (0..5).map(|c| (1, c, Stone::Black)).collect();
        let board = board_with(9, &stones);
        assert!(check_win(&board, Pos::new(1, 1)));
        assert!(!check_win(&board, Pos::new(0, 10)));
        assert!(winning_line(&board, Pos::new(0, 10)).is_none());

        let board = board_with(15, &[(14, 0, Stone::Black)]);
        assert!(!check_win(&board, Pos::new(16, 0)));
        assert!(winning_line(&board, Pos::new(16, 0)).is_none());
    }

    #[test]
    fn test_blocked_line_not_win() {
        let board = board_with(
            15,
            &[
                (0, 0, Stone::Black),
                (0, 1, Stone::Black),
                (0, 2, Stone::White),
                (0, 3, Stone::Black),
                (0, 4, Stone::Black),
            ],
        );
        assert!(!check_win(&board, Pos::new(0, 4)));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let stones: Vec<_> = (0..6).map(|c| (9, c, Stone::Black)).collect();
        let board = board_with(15, &stones);
        assert!(check_win(&board, Pos::new(9, 5)));
        assert_eq!(winning_line(&board, Pos::new(9, 5)).map(|l| l.len()), Some(6));
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = Board::new(9);
        assert!(!check_win(&board, Pos::new(4, 4)));
        assert!(winning_line(&board, Pos::new(4, 4)).is_none());
    }

    #[test]
    fn test_winning_line_endpoints() {
        let stones: Vec<_> = (0..5).map(|i| (i + 2, 6 - i, Stone::Black)).collect();
        let board = board_with(15, &stones);
        let line = winning_line(&board, Pos::new(4, 4)).unwrap();
        assert_eq!(line.first(), Some(&Pos::new(2, 6)));
        assert_eq!(line.last(), Some(&Pos::new(6, 2)));
    }

    #[test]
    fn test_draw_on_full_three_by_three() {
        // X O X / X O O / O X X: no run longer than three
        let pattern = [
            [Stone::Black, Stone::White, Stone::Black],
            [Stone::Black, Stone::White, Stone::White],
            [Stone::White, Stone::Black, Stone::Black],
        ];
        let mut board = Board::new(3);
        for (r, row) in pattern.iter().enumerate() {
            for (c, &stone) in row.iter().enumerate() {
                assert_eq!(game_state(&board), GameState::InProgress);
                board.place(Pos::new(r as u8, c as u8), stone).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(game_state(&board), GameState::Draw);
        assert!(game_state(&board).is_over());
    }
}
