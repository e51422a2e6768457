//! Box/side notation
//!
//! A line is named by one of the boxes it borders plus the side of that box:
//! `B2 L` is the left side of the box in column `B`, second row from the
//! bottom. Columns are letters from `A`, rows are 1-based from the bottom.

use crate::board::{Board, Move};
use crate::error::{Error, Result};

/// Side of a box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub fn from_char(ch: char) -> Result<Self> {
        match ch {
            'T' => Ok(Side::Top),
            'B' => Ok(Side::Bottom),
            'L' => Ok(Side::Left),
            'R' => Ok(Side::Right),
            other => Err(Error::invalid(format!("unknown side marker {other:?}"))),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Side::Top => 'T',
            Side::Bottom => 'B',
            Side::Left => 'L',
            Side::Right => 'R',
        }
    }
}

/// A box in grid coordinates (row 0 at the top)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxPos {
    pub row: usize,
    pub col: usize,
}

/// Parse a box label such as `C4`.
pub fn parse_box_label(board: &Board, label: &str) -> Result<BoxPos> {
    let mut chars = label.chars();
    let letter = chars
        .next()
        .filter(char::is_ascii_uppercase)
        .ok_or_else(|| Error::invalid(format!("box label {label:?} must start with A-Z")))?;
    let col = (letter as u8 - b'A') as usize;
    let number: usize = chars
        .as_str()
        .parse()
        .map_err(|_| Error::invalid(format!("box label {label:?} has no row number")))?;

    if col >= board.box_cols() || number == 0 || number > board.box_rows() {
        return Err(Error::invalid(format!(
            "box {label} outside {}x{} grid",
            board.box_rows(),
            board.box_cols()
        )));
    }
    Ok(BoxPos {
        row: board.box_rows() - number,
        col,
    })
}

/// Format a box label
pub fn format_box_label(board: &Board, pos: BoxPos) -> String {
    let letter = (b'A' + pos.col as u8) as char;
    format!("{letter}{}", board.box_rows() - pos.row)
}

/// The line on a given side of a box
pub fn side_to_move(pos: BoxPos, side: Side) -> Move {
    let (r, c) = (pos.row as u8, pos.col as u8);
    match side {
        Side::Top => Move::horizontal(r, c),
        Side::Bottom => Move::horizontal(r + 1, c),
        Side::Left => Move::vertical(r, c),
        Side::Right => Move::vertical(r, c + 1),
    }
}

/// Name a line by a box it borders.
///
/// Interior lines use the box below (`T`) or to the right (`L`); only the
/// bottom and right board edges use `B` and `R`.
pub fn move_to_side(board: &Board, mv: Move) -> (BoxPos, Side) {
    let (r, c) = (mv.row as usize, mv.col as usize);
    if mv.is_horizontal() {
        if r < board.box_rows() {
            (BoxPos { row: r, col: c }, Side::Top)
        } else {
            (BoxPos { row: r - 1, col: c }, Side::Bottom)
        }
    } else if c < board.box_cols() {
        (BoxPos { row: r, col: c }, Side::Left)
    } else {
        (BoxPos { row: r, col: c - 1 }, Side::Right)
    }
}

/// Format a move for the wire, e.g. `A3 T`
pub fn format_move(board: &Board, mv: Move) -> String {
    let (pos, side) = move_to_side(board, mv);
    format!("{} {}", format_box_label(board, pos), side.as_char())
}

/// Parse a move written as `<label> <side>`
pub fn parse_move(board: &Board, text: &str) -> Result<Move> {
    let mut parts = text.split_whitespace();
    let (Some(label), Some(side), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(Error::invalid(format!("move {text:?} must be '<box> <side>'")));
    };
    let pos = parse_box_label(board, label)?;
    let mut side_chars = side.chars();
    let (Some(ch), None) = (side_chars.next(), side_chars.next()) else {
        return Err(Error::invalid(format!("side {side:?} must be one character")));
    };
    Ok(side_to_move(pos, Side::from_char(ch)?))
}
