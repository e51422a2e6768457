//! Depth-limited minimax with alpha-beta pruning
//!
//! This module implements the deep search of the engine. The board is
//! mutated in place with `Board::apply` / `Board::undo`; every child call
//! leaves it exactly as it found it.
//!
//! # Features
//!
//! - Explicit maximizing/minimizing layers (engine / opponent)
//! - Turn extension: a move that closes a box keeps the same role for the
//!   next ply, because the mover plays again
//! - Fixed generation order with strict `>` at the root, so the first of
//!   several equally scored moves wins
//!
//! # Example
//!
//! ```
//! use dots::board::Board;
//! use dots::eval::EvalWeights;
//! use dots::search::Searcher;
//!
//! let mut board = Board::with_boxes(2).unwrap();
//! let mut searcher = Searcher::new(EvalWeights::default());
//!
//! let result = searcher.search(&mut board, 3);
//! if let Some(mv) = result.best_move {
//!     println!("Best line: {:?} ({}, {})", mv.orientation, mv.row, mv.col);
//! }
//! ```

use crate::board::{Board, Move, Player};
use crate::eval::{evaluate, EvalWeights};
use crate::rules::generate_moves;

/// Bound for alpha-beta windows; larger than any reachable evaluation
pub const INF: i32 = 100_000;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Interior and leaf nodes visited below the root
    pub nodes: u64,
    /// Candidate loops cut short by `beta <= alpha`
    pub cutoffs: u64,
    /// Plies where the mover kept the turn after closing a box
    pub extensions: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` only on a fully drawn board
    pub best_move: Option<Move>,
    /// Minimax value of the best move
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Total nodes searched
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Alpha-beta searcher.
///
/// Holds the evaluator weights used at the leaves and the statistics of the
/// last search. Stateless between searches otherwise.
#[derive(Debug, Clone)]
pub struct Searcher {
    weights: EvalWeights,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new(weights: EvalWeights) -> Self {
        Self {
            weights,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    pub fn set_weights(&mut self, weights: EvalWeights) {
        self.weights = weights;
    }

    /// Statistics of the most recent search
    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search for the engine's best move to `depth` plies.
    ///
    /// Every root move is played as the engine. A depth of 0 is treated as 1.
    /// The board is identical before and after the call.
    pub fn search(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        self.stats = SearchStats::default();
        let depth = depth.max(1);
        let moves = generate_moves(board);

        let mut best_move = moves.first().copied();
        let mut best_score = -INF;
        let mut alpha = -INF;
        let beta = INF;

        for mv in moves {
            let completed = board.apply(mv, Player::Engine);
            let keep_turn = completed > 0;
            if keep_turn {
                self.stats.extensions += 1;
            }
            let score = self.alpha_beta(board, depth - 1, alpha, beta, keep_turn);
            board.undo(mv);

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        }

        SearchResult {
            best_move,
            score: best_score,
            depth,
            nodes: self.stats.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Recursive minimax with alpha-beta pruning.
    ///
    /// `maximizing` selects the side to move: the engine maximizes, the
    /// opponent minimizes. Leaves (depth exhausted or every box scored) are
    /// scored by the evaluator regardless of the side to move.
    pub fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 || board.is_terminal() {
            return evaluate(board, &self.weights);
        }
        let moves = generate_moves(board);
        if moves.is_empty() {
            return evaluate(board, &self.weights);
        }

        let player = if maximizing { Player::Engine } else { Player::Human };
        let mut best = if maximizing { -INF } else { INF };

        for mv in moves {
            let completed = board.apply(mv, player);
            // Closing a box grants another move to the same side
            let next_maximizing = if completed > 0 {
                self.stats.extensions += 1;
                maximizing
            } else {
                !maximizing
            };
            let score = self.alpha_beta(board, depth - 1, alpha, beta, next_maximizing);
            board.undo(mv);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}
