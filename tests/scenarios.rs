//! End-to-end scenarios through the public API

use gomoku::eval::score_window;
use gomoku::search::{alphabeta, AlphaBeta, INF};
use gomoku::{
    best_move, check_win, game_state, get_candidates, AIEngine, Algorithm, Board, EngineConfig, GameState, Pos,
    Stone,
};

fn place_all(board: &mut Board, stones: &[(u8, u8, Stone)]) {
    for &(r, c, s) in stones {
        board.place(Pos::new(r, c), s).unwrap();
    }
}

#[test]
fn test_open_four_candidates_and_window() {
    let mut board = Board::new(15);
    for col in 7..=10 {
        board.place(Pos::new(7, col), Stone::Black).unwrap();
    }
    let candidates = get_candidates(&board);
    assert!(candidates.contains(&Pos::new(7, 6)));
    assert!(candidates.contains(&Pos::new(7, 11)));

    let window = [Stone::Black, Stone::Black, Stone::Black, Stone::Black, Stone::Empty];
    assert_eq!(score_window(&window, Stone::Black), 1000);
}

#[test]
fn test_vertical_five_for_second_player() {
    let mut board = Board::new(15);
    place_all(
        &mut board,
        &[
            (0, 3, Stone::White),
            (10, 10, Stone::Black),
            (1, 3, Stone::White),
            (10, 12, Stone::Black),
            (2, 3, Stone::White),
            (12, 10, Stone::Black),
            (3, 3, Stone::White),
            (14, 14, Stone::Black),
            (4, 3, Stone::White),
        ],
    );
    assert!(check_win(&board, Pos::new(4, 3)));
    assert_eq!(game_state(&board), GameState::WhiteWins);
}

#[test]
fn test_three_by_three_draw() {
    // X O X / X O O / O X X: longest run is three
    let mut board = Board::new(3);
    let order = [
        (0, 0, Stone::Black),
        (0, 1, Stone::White),
        (0, 2, Stone::Black),
        (1, 1, Stone::White),
        (1, 0, Stone::Black),
        (1, 2, Stone::White),
        (2, 1, Stone::Black),
        (2, 0, Stone::White),
        (2, 2, Stone::Black),
    ];
    for (i, &(r, c, s)) in order.iter().enumerate() {
        assert_eq!(game_state(&board), GameState::InProgress, "over early at move {i}");
        board.place(Pos::new(r, c), s).unwrap();
    }
    assert!(board.is_full());
    assert_eq!(game_state(&board), GameState::Draw);
}

#[test]
fn test_depth_one_alphabeta_completes_five() {
    let mut board = Board::new(15);
    place_all(
        &mut board,
        &[
            (5, 5, Stone::Black),
            (0, 14, Stone::White),
            (6, 6, Stone::Black),
            (14, 0, Stone::White),
            (7, 7, Stone::Black),
            (14, 14, Stone::White),
            (8, 8, Stone::Black),
            (4, 4, Stone::White),
        ],
    );
    let mut search = AlphaBeta::new(&gomoku::eval::WindowEvaluator, Stone::Black);
    let result = search.search(&mut board, 1, -INF, INF, true);
    assert_eq!(result.best_move, Some(Pos::new(9, 9)));
    assert_eq!(result.score, alphabeta::WIN_SCORE);
}

#[test]
fn test_engines_agree_on_forced_block() {
    let mut board = Board::new(11);
    place_all(
        &mut board,
        &[
            (5, 1, Stone::Black),
            (0, 0, Stone::White),
            (5, 2, Stone::Black),
            (10, 10, Stone::White),
            (5, 3, Stone::Black),
            (5, 0, Stone::White),
            (5, 4, Stone::Black),
        ],
    );
    // Black threatens (5, 5); White must take it
    for algorithm in Algorithm::ALL {
        let engine = AIEngine::with_config(EngineConfig::new(algorithm, 2).with_move_cap(None));
        assert_eq!(
            engine.get_move(&mut board, Stone::White),
            Some(Pos::new(5, 5)),
            "{algorithm} failed to block"
        );
    }
    assert_eq!(best_move(&mut board, 2, Algorithm::AlphaBeta, Stone::White), Some(Pos::new(5, 5)));
}

#[test]
fn test_engine_plays_a_short_game() {
    let black = AIEngine::with_config(EngineConfig::new(Algorithm::AlphaBeta, 2));
    let white = AIEngine::with_config(EngineConfig::new(Algorithm::Minimax, 1));
    let mut board = Board::new(9);
    let mut turn = Stone::Black;

    for _ in 0..12 {
        if game_state(&board).is_over() {
            break;
        }
        let engine = if turn == Stone::Black { &black } else { &white };
        let pos = engine.get_move(&mut board, turn).expect("live board has a move");
        board.place(pos, turn).unwrap();
        turn = turn.opponent();
    }
    assert_eq!(board.history()[0].pos, Pos::new(4, 4));
    assert!(board.stone_count() >= 5);
}
