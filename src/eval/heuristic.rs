//! Heuristic evaluation function for dots and boxes positions
//!
//! This is the only leaf scorer of the search. It is a static position
//! score, not a game-theoretic value:
//! - Net score difference, from the engine's perspective
//! - Penalty for boxes with three sides drawn (one line from falling)
//! - Small bonuses for boxes with two or one sides drawn

use crate::board::Board;

use super::weights::EvalWeights;

/// Histogram of boxes by number of drawn sides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideCounts {
    pub one: i32,
    pub two: i32,
    pub three: i32,
}

impl SideCounts {
    /// Scan every box once
    #[must_use]
    pub fn scan(board: &Board) -> Self {
        let mut counts = Self::default();
        for r in 0..board.box_rows() as i32 {
            for c in 0..board.box_cols() as i32 {
                match board.count_sides(r, c) {
                    1 => counts.one += 1,
                    2 => counts.two += 1,
                    3 => counts.three += 1,
                    _ => {}
                }
            }
        }
        counts
    }
}

/// Evaluate the board for the engine.
///
/// Positive values favour the engine. Only the score pair and side counts
/// are read, so boards reconstructed without box ownership evaluate the
/// same as boards played out move by move.
#[must_use]
pub fn evaluate(board: &Board, weights: &EvalWeights) -> i32 {
    let net = board.engine_score() as i32 - board.human_score() as i32;
    let counts = SideCounts::scan(board);

    weights.score * net - weights.three_sides * counts.three
        + weights.two_sides * counts.two
        + weights.one_side_term(counts.one)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Move, Player};

    #[test]
    fn test_evaluate_empty_board() {
        let board = Board::with_boxes(3).unwrap();
        assert_eq!(evaluate(&board, &EvalWeights::default()), 0);
    }

    #[test]
    fn test_side_counts() {
        let mut board = Board::with_boxes(2).unwrap();
        board.draw_line(Move::horizontal(0, 0));
        board.draw_line(Move::vertical(0, 0));
        board.draw_line(Move::horizontal(1, 0));
        // (0,0): 3 sides, (1,0): top only
        let counts = SideCounts::scan(&board);
        assert_eq!(counts, SideCounts { one: 1, two: 0, three: 1 });
    }

    #[test]
    fn test_evaluate_three_sided_penalty() {
        let mut board = Board::with_boxes(2).unwrap();
        board.draw_line(Move::horizontal(0, 0));
        board.draw_line(Move::vertical(0, 0));
        board.draw_line(Move::horizontal(1, 0));
        // -5 for the three-sided box, one-sided box truncates to 0
        assert_eq!(evaluate(&board, &EvalWeights::default()), -5);
    }

    #[test]
    fn test_evaluate_two_sided_bonus() {
        let mut board = Board::with_boxes(2).unwrap();
        board.draw_line(Move::horizontal(0, 0));
        board.draw_line(Move::vertical(0, 0));
        assert_eq!(evaluate(&board, &EvalWeights::default()), 1);
    }

    #[test]
    fn test_evaluate_score_difference() {
        let mut board = Board::with_boxes(1).unwrap();
        board.apply(Move::horizontal(0, 0), Player::Human);
        board.apply(Move::horizontal(1, 0), Player::Human);
        board.apply(Move::vertical(0, 0), Player::Human);
        board.apply(Move::vertical(0, 1), Player::Engine);
        assert_eq!(evaluate(&board, &EvalWeights::default()), 10);

        let mut lost = Board::with_boxes(1).unwrap();
        lost.fill_lines();
        lost.set_scores(0, 1).unwrap();
        assert_eq!(evaluate(&lost, &EvalWeights::default()), -10);
    }

    #[test]
    fn test_evaluate_custom_weights() {
        let mut board = Board::with_boxes(2).unwrap();
        board.draw_line(Move::horizontal(0, 0));
        board.draw_line(Move::vertical(0, 0));
        board.draw_line(Move::horizontal(1, 0));
        let weights = EvalWeights::score_only();
        assert_eq!(evaluate(&board, &weights), -1);
    }
}
