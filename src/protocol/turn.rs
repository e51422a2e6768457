//! Handshake and per-turn board reconstruction
//!
//! Handshake: `<board_size>` then `<player_id>`.
//!
//! Turn: `<engine_score> <opponent_score>`, `<k>`, then `k` records of
//! `<box_label> <open_sides>`. Every line starts drawn and each listed open
//! side is erased again.

use std::io::BufRead;

use tracing::trace;

use super::notation::{parse_box_label, side_to_move, Side};
use super::reader::TokenReader;
use crate::board::{Board, MAX_BOXES};
use crate::error::{Error, Result};

/// Process bootstrap: board size and our player id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handshake {
    /// Boxes per side
    pub board_size: usize,
    pub player_id: String,
}

impl Handshake {
    pub fn parse<R: BufRead>(tokens: &mut TokenReader<R>) -> Result<Self> {
        let board_size: usize = tokens.parse_next("board size")?;
        if board_size == 0 || board_size > MAX_BOXES {
            return Err(Error::invalid(format!(
                "board size {board_size} not in 1..={MAX_BOXES}"
            )));
        }
        let player_id = tokens.expect_token()?;
        Ok(Self {
            board_size,
            player_id,
        })
    }

    /// Empty board of the negotiated size
    pub fn board(&self) -> Result<Board> {
        Board::with_boxes(self.board_size)
    }
}

/// Read one turn into `board`.
///
/// Returns `Ok(false)` when input ends cleanly before the turn starts.
/// On error the board content is unspecified; the caller should stop.
pub fn parse_turn<R: BufRead>(tokens: &mut TokenReader<R>, board: &mut Board) -> Result<bool> {
    let Some(first) = tokens.next_token()? else {
        return Ok(false);
    };
    let engine_score: u32 = first
        .parse()
        .map_err(|_| Error::invalid(format!("expected engine score, got {first:?}")))?;
    let human_score: u32 = tokens.parse_next("opponent score")?;
    let records: usize = tokens.parse_next("box count")?;
    if records > board.total_boxes() {
        return Err(Error::invalid(format!(
            "{records} box records for {} boxes",
            board.total_boxes()
        )));
    }

    board.fill_lines();
    for _ in 0..records {
        let label = tokens.expect_token()?;
        let sides = tokens.expect_token()?;
        let pos = parse_box_label(board, &label)?;
        for ch in sides.chars() {
            board.erase_line(side_to_move(pos, Side::from_char(ch)?));
        }
        trace!(%label, %sides, "open sides");
    }

    board.set_scores(engine_score, human_score)?;
    let closed = board.closed_boxes();
    if (engine_score + human_score) as usize != closed {
        return Err(Error::invalid(format!(
            "scores {engine_score}+{human_score} disagree with {closed} closed boxes"
        )));
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    fn reader(input: &str) -> TokenReader<&[u8]> {
        TokenReader::new(input.as_bytes())
    }

    #[test]
    fn test_handshake() {
        let mut tokens = reader("5\nplayer2\n");
        let hs = Handshake::parse(&mut tokens).unwrap();
        assert_eq!(hs.board_size, 5);
        assert_eq!(hs.player_id, "player2");
        let board = hs.board().unwrap();
        assert_eq!(board.rows(), 6);
        assert_eq!(board.columns(), 6);
    }

    #[test]
    fn test_handshake_rejects_size() {
        assert!(Handshake::parse(&mut reader("0\np\n")).is_err());
        assert!(Handshake::parse(&mut reader("27\np\n")).is_err());
        assert!(matches!(
            Handshake::parse(&mut reader("3\n")),
            Err(Error::UnexpectedEof)
        ));
    }

    #[test]
    fn test_parse_turn_fresh_board() {
        let mut board = Board::with_boxes(2).unwrap();
        let mut tokens = reader("0 0\n4\nA2 TBLR\nB2 TBLR\nA1 TBLR\nB1 TBLR\n");
        assert!(parse_turn(&mut tokens, &mut board).unwrap());
        assert_eq!(board.remaining_lines(), 12);
        assert_eq!(board.engine_score(), 0);
    }

    #[test]
    fn test_parse_turn_partial_board() {
        let mut board = Board::with_boxes(2).unwrap();
        // Top-left box (A2) is closed and scored for us
        let input = "1 0\n3\nB2 TR\nA1 BL\nB1 TBR\n";
        assert!(parse_turn(&mut reader(input), &mut board).unwrap());
        assert_eq!(board.engine_score(), 1);
        assert_eq!(board.closed_boxes(), 1);
        assert!(!board.is_drawn(Move::horizontal(0, 1)));
        assert!(board.is_drawn(Move::vertical(0, 1)));
        assert!(board.is_drawn(Move::horizontal(1, 0)));
        assert!(!board.is_drawn(Move::horizontal(1, 1)));
        assert!(board.is_drawn(Move::vertical(1, 1)));
        assert_eq!(board.remaining_lines(), 7);
    }

    #[test]
    fn test_parse_turn_overwrites_previous_state() {
        let mut board = Board::with_boxes(1).unwrap();
        let mut tokens = reader("0 0\n1\nA1 TBLR\n0 0\n1\nA1 T\n");
        assert!(parse_turn(&mut tokens, &mut board).unwrap());
        assert_eq!(board.remaining_lines(), 4);
        assert!(parse_turn(&mut tokens, &mut board).unwrap());
        assert_eq!(board.remaining_lines(), 1);
        assert!(!parse_turn(&mut tokens, &mut board).unwrap());
    }

    #[test]
    fn test_parse_turn_errors() {
        let mut board = Board::with_boxes(2).unwrap();
        assert!(matches!(
            parse_turn(&mut reader("0 0\n1\nA1 TX\n"), &mut board),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            parse_turn(&mut reader("0 0\n1\nZ9 T\n"), &mut board),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            parse_turn(&mut reader("0 0\n2\nA1 T\n"), &mut board),
            Err(Error::UnexpectedEof)
        ));
        // Scores claim a box that is still open
        assert!(matches!(
            parse_turn(&mut reader("1 0\n4\nA2 T\nB2 T\nA1 T\nB1 T\n"), &mut board),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            parse_turn(&mut reader("zero 0\n0\n"), &mut board),
            Err(Error::InvalidInput(_))
        ));
    }
}
