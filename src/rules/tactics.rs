//! One-ply tactical predicates
//!
//! Each check applies the move, inspects the boxes it borders and undoes it,
//! so the board is unchanged on return.

use crate::board::{Board, Move, Player};

/// Would this move close at least one box?
pub fn completes_box(board: &mut Board, mv: Move) -> bool {
    let completed = board.apply(mv, Player::Engine);
    board.undo(mv);
    completed > 0
}

/// Would this move leave a bordering box with exactly three sides,
/// handing the opponent a free box?
pub fn creates_third_side(board: &mut Board, mv: Move) -> bool {
    board.apply(mv, Player::Engine);
    let danger = board
        .adjacent_boxes(mv)
        .into_iter()
        .flatten()
        .any(|(r, c)| board.count_sides(r as i32, c as i32) == 3);
    board.undo(mv);
    danger
}

/// A move that gives nothing away
#[inline]
pub fn is_safe_move(board: &mut Board, mv: Move) -> bool {
    !creates_third_side(board, mv)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x2 boxes with box (0,0) missing only its right side
    fn three_sided_corner() -> Board {
        let mut board = Board::with_boxes(2).unwrap();
        board.draw_line(Move::horizontal(0, 0));
        board.draw_line(Move::horizontal(1, 0));
        board.draw_line(Move::vertical(0, 0));
        board
    }

    #[test]
    fn test_completes_box() {
        let mut board = three_sided_corner();
        let before = board.clone();
        assert!(completes_box(&mut board, Move::vertical(0, 1)));
        assert!(!completes_box(&mut board, Move::horizontal(0, 1)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_creates_third_side() {
        let mut board = Board::with_boxes(2).unwrap();
        board.draw_line(Move::horizontal(0, 0));
        board.draw_line(Move::vertical(0, 0));
        let before = board.clone();

        // Box (0,0) has two sides; either remaining side makes three
        assert!(creates_third_side(&mut board, Move::horizontal(1, 0)));
        assert!(creates_third_side(&mut board, Move::vertical(0, 1)));
        assert!(!is_safe_move(&mut board, Move::vertical(0, 1)));
        // Far corner is untouched
        assert!(is_safe_move(&mut board, Move::horizontal(2, 1)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_completing_move_is_not_a_third_side() {
        let mut board = three_sided_corner();
        // Closing (0,0) gives (0,1) only one side
        assert!(!creates_third_side(&mut board, Move::vertical(0, 1)));
    }

    #[test]
    fn test_third_side_on_far_neighbour() {
        let mut board = Board::with_boxes(2).unwrap();
        // Box (0,1) has top and right
        board.draw_line(Move::horizontal(0, 1));
        board.draw_line(Move::vertical(0, 2));
        // Shared vertical (0,1) gives (0,1) its third side, (0,0) only one
        assert!(creates_third_side(&mut board, Move::vertical(0, 1)));
    }
}
