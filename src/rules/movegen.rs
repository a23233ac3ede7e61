//! Candidate move generation
//!
//! Searching every empty cell is hopeless on a 15x15 board, so the search
//! only looks near existing stones (or near the center in the opening).

use crate::board::{Board, Pos};

/// Half-width of the square searched around each stone
pub const CANDIDATE_RADIUS: i32 = 2;

/// Half-width of the opening window around the center (7x7 area)
pub const OPENING_WINDOW: i32 = 3;

/// Below this many stones the opening window is used
const OPENING_STONES: usize = 2;

/// Cells worth searching in the current position, in row-major order.
pub fn get_candidates(board: &Board) -> Vec<Pos> {
    if board.stone_count() < OPENING_STONES {
        return opening_window(board);
    }

    let moves = board.candidate_moves(CANDIDATE_RADIUS);
    if !moves.is_empty() {
        return moves;
    }

    let center = board.center();
    if board.is_empty(center) {
        vec![center]
    } else {
        Vec::new()
    }
}

/// Empty cells in the square of half-width [`OPENING_WINDOW`] around the center
fn opening_window(board: &Board) -> Vec<Pos> {
    let center = board.center();
    let mut moves = Vec::with_capacity(49);
    for dr in -OPENING_WINDOW..=OPENING_WINDOW {
        for dc in -OPENING_WINDOW..=OPENING_WINDOW {
            let (r, c) = center.offset(dr, dc, 1);
            if board.is_valid_move(r, c) {
                if let Some(pos) = board.pos(r, c) {
                    moves.push(pos);
                }
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    #[test]
    fn test_empty_board_uses_opening_window() {
        let board = Board::new(15);
        let moves = get_candidates(&board);
        assert_eq!(moves.len(), 49);
        assert!(moves.contains(&Pos::new(7, 7)));
        assert!(moves.contains(&Pos::new(4, 4)));
        assert!(moves.contains(&Pos::new(10, 10)));
        assert!(!moves.contains(&Pos::new(3, 7)));
    }

    #[test]
    fn test_opening_window_skips_occupied_and_clips() {
        let mut board = Board::new(5);
        board.place(Pos::new(2, 2), Stone::Black).unwrap();
        let moves = get_candidates(&board);
        // 5x5 board is entirely inside the window, minus the one stone
        assert_eq!(moves.len(), 24);
        assert!(!moves.contains(&Pos::new(2, 2)));
    }

    #[test]
    fn test_single_off_center_stone_still_uses_window() {
        let mut board = Board::new(15);
        board.place(Pos::new(0, 0), Stone::Black).unwrap();
        let moves = get_candidates(&board);
        assert_eq!(moves.len(), 49);
        assert!(!moves.contains(&Pos::new(0, 1)));
    }

    #[test]
    fn test_candidates_extend_open_four() {
        let mut board = Board::new(15);
        for c in 7..=10 {
            board.place(Pos::new(7, c), Stone::Black).unwrap();
        }
        let moves = get_candidates(&board);
        assert!(moves.contains(&Pos::new(7, 6)));
        assert!(moves.contains(&Pos::new(7, 11)));
        assert!(moves.contains(&Pos::new(5, 5)));
        assert!(!moves.contains(&Pos::new(7, 4)));
    }

    #[test]
    fn test_full_board_has_no_candidates() {
        let mut board = Board::new(2);
        for (i, pos) in [(0, 0), (0, 1), (1, 0), (1, 1)].into_iter().enumerate() {
            let stone = if i % 2 == 0 { Stone::Black } else { Stone::White };
            board.place(Pos::new(pos.0, pos.1), stone).unwrap();
        }
        assert!(get_candidates(&board).is_empty());
    }
}
