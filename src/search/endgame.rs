//! Single-ply greedy scan used when few lines remain
//!
//! Near the end of a game the remaining turns share what is left of the time
//! budget, so deep search is replaced by one apply/evaluate/undo per line.

use crate::board::{Board, Move, Player};
use crate::eval::{evaluate, EvalWeights};
use crate::rules::generate_moves;

/// Default number of open lines below which the greedy scan replaces search
pub const DEFAULT_ENDGAME_THRESHOLD: usize = 30;

/// Pick the move with the strictly highest one-ply evaluation.
///
/// Ties keep the first move in generation order. Returns `None` on a fully
/// drawn board.
pub fn greedy_scan(board: &mut Board, weights: &EvalWeights) -> Option<(Move, i32)> {
    let mut best: Option<(Move, i32)> = None;
    for mv in generate_moves(board) {
        board.apply(mv, Player::Engine);
        let score = evaluate(board, weights);
        board.undo(mv);

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }
    best
}
