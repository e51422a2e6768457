//! Move generation
//!
//! Order is part of the contract: horizontal lines row-major, then vertical
//! lines row-major. Every "first found wins" tie-break in the engine relies
//! on it.

use crate::board::{Board, Move};

/// Enumerate every undrawn line.
///
/// Empty only when the board is fully drawn.
pub fn generate_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(board.remaining_lines());
    moves.extend(
        board
            .horizontal_lines()
            .iter_open()
            .map(|(r, c)| Move::horizontal(r as u8, c as u8)),
    );
    moves.extend(
        board
            .vertical_lines()
            .iter_open()
            .map(|(r, c)| Move::vertical(r as u8, c as u8)),
    );
    moves
}

/// Check that a move is on the board and its line is still open
#[inline]
pub fn is_valid_move(board: &Board, mv: Move) -> bool {
    board.contains(mv) && !board.is_drawn(mv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_moves_empty_board_order() {
        let board = Board::with_boxes(2).unwrap();
        let moves = generate_moves(&board);
        assert_eq!(moves.len(), 12);
        assert_eq!(moves[0], Move::horizontal(0, 0));
        assert_eq!(moves[1], Move::horizontal(0, 1));
        assert_eq!(moves[2], Move::horizontal(1, 0));
        assert_eq!(moves[5], Move::horizontal(2, 1));
        assert_eq!(moves[6], Move::vertical(0, 0));
        assert_eq!(moves[11], Move::vertical(1, 2));
    }

    #[test]
    fn test_generate_moves_skips_drawn_lines() {
        let mut board = Board::with_boxes(2).unwrap();
        board.draw_line(Move::horizontal(0, 0));
        board.draw_line(Move::vertical(1, 2));
        let moves = generate_moves(&board);
        assert_eq!(moves.len(), 10);
        assert!(!moves.contains(&Move::horizontal(0, 0)));
        assert!(!moves.contains(&Move::vertical(1, 2)));
        assert_eq!(moves[0], Move::horizontal(0, 1));
    }

    #[test]
    fn test_generate_moves_full_board_is_empty() {
        let mut board = Board::with_boxes(3).unwrap();
        board.fill_lines();
        assert!(generate_moves(&board).is_empty());
    }

    #[test]
    fn test_generate_moves_rectangular_board() {
        let board = Board::new(2, 4).unwrap();
        let moves = generate_moves(&board);
        // 2 rows x 3 horizontal + 1 row x 4 vertical
        assert_eq!(moves.len(), 10);
        assert_eq!(moves[6], Move::vertical(0, 0));
    }

    #[test]
    fn test_is_valid_move() {
        let mut board = Board::with_boxes(2).unwrap();
        assert!(is_valid_move(&board, Move::vertical(1, 2)));
        assert!(!is_valid_move(&board, Move::vertical(2, 2)));
        board.draw_line(Move::vertical(1, 2));
        assert!(!is_valid_move(&board, Move::vertical(1, 2)));
    }
}
