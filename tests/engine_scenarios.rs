//! Whole-engine scenarios through the public API

use dots::eval::evaluate;
use dots::rules::generate_moves;
use dots::{AIEngine, Board, EngineConfig, Move, Player, SearchType};

/// 3x3 boxes with every vertical line drawn: each box has two sides, so
/// every open line hands the opponent a third side
fn no_safe_board() -> Board {
    let mut board = Board::with_boxes(3).unwrap();
    for r in 0..3 {
        for c in 0..4 {
            board.draw_line(Move::vertical(r, c));
        }
    }
    board
}

#[test]
fn empty_board_plays_first_horizontal_line() {
    let mut board = Board::with_boxes(2).unwrap();
    let mut engine = AIEngine::new();

    let result = engine.get_move_with_stats(&mut board);
    assert_eq!(result.best_move, Some(Move::horizontal(0, 0)));
    assert_eq!(result.search_type, SearchType::SafeMove);
    assert_eq!(board.remaining_lines(), 12);
}

#[test]
fn three_sided_box_is_taken() {
    let mut board = Board::with_boxes(3).unwrap();
    board.draw_line(Move::horizontal(1, 1));
    board.draw_line(Move::horizontal(2, 1));
    board.draw_line(Move::vertical(1, 2));
    let mut engine = AIEngine::new();

    let result = engine.get_move_with_stats(&mut board);
    assert_eq!(result.search_type, SearchType::ImmediateCompletion);
    let mv = result.best_move.unwrap();
    assert_eq!(mv, Move::vertical(1, 1));
    assert_eq!(board.apply(mv, Player::Engine), 1);
    assert_eq!(board.engine_score(), 1);
}

#[test]
fn shared_side_takes_two_boxes() {
    let mut board = Board::with_boxes(2).unwrap();
    for mv in [
        Move::horizontal(0, 0),
        Move::horizontal(1, 0),
        Move::vertical(0, 0),
        Move::horizontal(0, 1),
        Move::horizontal(1, 1),
        Move::vertical(0, 2),
    ] {
        board.draw_line(mv);
    }
    let mut engine = AIEngine::new();

    let mv = engine.get_move(&mut board).unwrap();
    assert_eq!(mv, Move::vertical(0, 1));
    assert_eq!(board.apply(mv, Player::Engine), 2);
    assert_eq!(board.engine_score(), 2);
}

#[test]
fn few_lines_without_tactics_uses_endgame_scan() {
    let mut board = no_safe_board();
    assert!(board.remaining_lines() < 30);
    let config = EngineConfig::default();
    let mut engine = AIEngine::with_config(config);

    let result = engine.get_move_with_stats(&mut board);
    assert_eq!(result.search_type, SearchType::Endgame);
    let chosen = result.best_move.unwrap();

    // Chosen move is the first one reaching the best one-ply score
    let mut best: Option<(Move, i32)> = None;
    for mv in generate_moves(&board) {
        board.apply(mv, Player::Engine);
        let score = evaluate(&board, &config.weights);
        board.undo(mv);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((mv, score));
        }
    }
    assert_eq!(Some((chosen, result.score)), best);
    assert_eq!(board, no_safe_board());
}

#[test]
fn threshold_zero_forces_alpha_beta() {
    let mut board = no_safe_board();
    let mut engine = AIEngine::with_config(EngineConfig {
        depth: 2,
        endgame_threshold: 0,
        ..EngineConfig::default()
    });

    let result = engine.get_move_with_stats(&mut board);
    assert_eq!(result.search_type, SearchType::AlphaBeta);
    assert!(result.nodes > 0);
    assert!(!board.is_drawn(result.best_move.unwrap()));
}

#[test]
fn engine_against_itself_finishes_the_game() {
    let mut board = Board::with_boxes(3).unwrap();
    let mut engine = AIEngine::with_config(EngineConfig {
        depth: 2,
        ..EngineConfig::default()
    });
    let mut player = Player::Engine;

    while !board.is_terminal() {
        // Both sides use the engine by swapping perspective
        if player == Player::Human {
            board.swap_sides();
        }
        let mv = engine.get_move(&mut board).unwrap();
        let completed = board.apply(mv, Player::Engine);
        if player == Player::Human {
            board.swap_sides();
        }
        if completed == 0 {
            player = player.opponent();
        }
    }

    assert_eq!(board.remaining_lines(), 0);
    assert_eq!(board.engine_score() + board.human_score(), 9);
}
