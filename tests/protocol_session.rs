//! Bot protocol end to end over in-memory streams

use dots::protocol::{format_move, parse_move, Session};
use dots::{AIEngine, Board, EngineConfig, Error, Move};

fn run_session(input: &str) -> (Result<(), Error>, Vec<String>) {
    let engine = AIEngine::with_config(EngineConfig::default());
    let mut session = Session::new(input.as_bytes(), Vec::new(), engine);
    let result = session.run();
    let output = String::from_utf8(session.into_output()).unwrap();
    (result, output.lines().map(str::to_owned).collect())
}

/// Every box listed with all four sides open
fn fresh_turn(boxes: usize) -> String {
    let mut turn = format!("0 0\n{}\n", boxes * boxes);
    for row in (1..=boxes).rev() {
        for col in 0..boxes {
            let letter = (b'A' + col as u8) as char;
            turn.push_str(&format!("{letter}{row} TBLR\n"));
        }
    }
    turn
}

#[test]
fn answers_every_turn_until_eof() {
    let mut input = String::from("2\nbot\n");
    input.push_str(&fresh_turn(2));
    // Opponent answered: A2 T is drawn now, B2 still open on all sides
    input.push_str("0 0\n4\nA2 BLR\nB2 TBLR\nA1 TBLR\nB1 TBLR\n");

    let (result, lines) = run_session(&input);
    assert!(result.is_ok());
    assert_eq!(lines, ["A2 T", "B2 T"]);
}

#[test]
fn closes_box_reported_with_one_open_side() {
    // 2x2: A1 has only its right side open, shared with B1
    let input = "2\nbot\n0 0\n4\nA2 TLR\nB2 TBLR\nA1 R\nB1 TBL\n";
    let (result, lines) = run_session(input);
    assert!(result.is_ok());
    let board = Board::with_boxes(2).unwrap();
    assert_eq!(parse_move(&board, &lines[0]).unwrap(), Move::vertical(1, 1));
}

#[test]
fn malformed_turn_stops_the_session() {
    let mut input = String::from("2\nbot\n");
    input.push_str(&fresh_turn(2));
    input.push_str("0 0\n1\nQ7 T\n");

    let (result, lines) = run_session(&input);
    assert!(matches!(result, Err(Error::InvalidInput(_))));
    // The good turn was still answered
    assert_eq!(lines.len(), 1);
}

#[test]
fn empty_input_is_eof() {
    let (result, lines) = run_session("");
    assert!(matches!(result, Err(Error::UnexpectedEof)));
    assert!(lines.is_empty());
}

#[test]
fn notation_on_a_large_board() {
    let board = Board::with_boxes(26).unwrap();
    assert_eq!(format_move(&board, Move::horizontal(0, 25)), "Z26 T");
    assert_eq!(format_move(&board, Move::vertical(25, 26)), "Z1 R");
    assert_eq!(parse_move(&board, "A1 B").unwrap(), Move::horizontal(26, 0));
}
