//! One-ply tactical selection, tried before any deep search
//!
//! Two rules, in priority order:
//! 1. Take a box when one is available (first in generation order).
//! 2. Otherwise play the first line that leaves no box with three sides.
//!
//! Safe moves are not ranked against each other and chains are not
//! analysed: the first safe candidate wins.

use crate::board::{Board, Move};
use crate::rules::{completes_box, generate_moves, is_safe_move};

/// Outcome of a tactical scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tactic {
    /// The move closes at least one box
    Completion(Move),
    /// The move gives the opponent nothing
    Safe(Move),
}

impl Tactic {
    #[inline]
    pub fn mv(self) -> Move {
        match self {
            Tactic::Completion(mv) | Tactic::Safe(mv) => mv,
        }
    }
}

/// Find the first move that closes a box
pub fn find_immediate_completion(board: &mut Board) -> Option<Move> {
    generate_moves(board)
        .into_iter()
        .find(|&mv| completes_box(board, mv))
}

/// Find the first move that does not hand over a box
pub fn find_safe_move(board: &mut Board) -> Option<Move> {
    generate_moves(board)
        .into_iter()
        .find(|&mv| is_safe_move(board, mv))
}

/// Run both rules in priority order
pub fn select(board: &mut Board) -> Option<Tactic> {
    find_immediate_completion(board)
        .map(Tactic::Completion)
        .or_else(|| find_safe_move(board).map(Tactic::Safe))
}
