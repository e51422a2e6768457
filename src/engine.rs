//! Main AI engine integrating all search components
//!
//! This module provides the per-turn decision procedure. The search follows
//! a priority system:
//!
//! 1. **Immediate completion**: take the first line that closes a box
//! 2. **Safe move**: play the first line that leaves no three-sided box
//! 3. **Endgame scan**: with few lines left, greedy one-ply evaluation
//! 4. **Alpha-Beta**: depth-limited minimax for everything else
//!
//! # Example
//!
//! ```
//! use dots::{AIEngine, Board, EngineConfig};
//!
//! let mut engine = AIEngine::with_config(EngineConfig { depth: 3, ..EngineConfig::default() });
//! let mut board = Board::with_boxes(3).unwrap();
//!
//! let result = engine.get_move_with_stats(&mut board);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::{debug, info};

use crate::board::{Board, Move, Player};
use crate::eval::{evaluate, EvalWeights};
use crate::search::{greedy_scan, SearchResult, Searcher, Tactic, DEFAULT_ENDGAME_THRESHOLD};

/// Default alpha-beta depth in plies
pub const DEFAULT_DEPTH: u8 = 4;

/// Type of search that produced the result.
///
/// This indicates which phase of the decision procedure found the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Move closes at least one box
    ImmediateCompletion,
    /// Move leaves no box with three sides
    SafeMove,
    /// Greedy one-ply scan near the end of the game
    Endgame,
    /// Regular alpha-beta search result
    AlphaBeta,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` only on a fully drawn board
    pub best_move: Option<Move>,
    /// Evaluation of the chosen move (static or minimax, depending on phase)
    pub score: i32,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    /// Create a result from the tactical selector
    #[inline]
    fn tactical(tactic: Tactic, score: i32, time_ms: u64, nodes: u64) -> Self {
        let search_type = match tactic {
            Tactic::Completion(_) => SearchType::ImmediateCompletion,
            Tactic::Safe(_) => SearchType::SafeMove,
        };
        Self {
            best_move: Some(tactic.mv()),
            score,
            search_type,
            time_ms,
            nodes,
        }
    }

    /// Create a result from the endgame scan
    #[inline]
    fn endgame(best: Option<(Move, i32)>, time_ms: u64, nodes: u64) -> Self {
        Self {
            best_move: best.map(|(mv, _)| mv),
            score: best.map_or(0, |(_, score)| score),
            search_type: SearchType::Endgame,
            time_ms,
            nodes,
        }
    }

    /// Create a result from alpha-beta search
    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes: result.nodes,
        }
    }

    /// Create a result indicating no move is left
    #[inline]
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes: 0,
        }
    }
}

/// Tunables of the decision procedure.
///
/// Defaults are the tuned values: depth 4, endgame below 30 open lines,
/// default evaluator weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Alpha-beta depth in plies (at least 1)
    pub depth: u8,
    /// Greedy scan replaces alpha-beta when fewer lines than this remain
    pub endgame_threshold: usize,
    /// Evaluator weights used by every phase
    pub weights: EvalWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            endgame_threshold: DEFAULT_ENDGAME_THRESHOLD,
            weights: EvalWeights::default(),
        }
    }
}

/// Main AI engine for dots and boxes.
///
/// The engine always plays as [`crate::board::Player::Engine`]. It borrows the
/// board mutably for in-place search and returns it unchanged.
///
/// # Example
///
/// ```
/// use dots::{AIEngine, Board, Move};
///
/// let mut engine = AIEngine::new();
/// let mut board = Board::with_boxes(2).unwrap();
/// // Box (0,0) is missing only its right side
/// board.draw_line(Move::horizontal(0, 0));
/// board.draw_line(Move::horizontal(1, 0));
/// board.draw_line(Move::vertical(0, 0));
///
/// assert_eq!(engine.get_move(&mut board), Some(Move::vertical(0, 1)));
/// ```
#[derive(Debug, Clone)]
pub struct AIEngine {
    /// Alpha-beta searcher
    searcher: Searcher,
    config: EngineConfig,
}

impl AIEngine {
    /// Create a new AI engine with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an AI engine with custom configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            searcher: Searcher::new(config.weights),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the best move for the given position.
    ///
    /// Convenience wrapper over `get_move_with_stats`.
    #[must_use]
    pub fn get_move(&mut self, board: &mut Board) -> Option<Move> {
        self.get_move_with_stats(board).best_move
    }

    /// Get the best move with detailed search statistics.
    ///
    /// # Search Priority
    ///
    /// 1. First move (generation order) that closes a box
    /// 2. First move that leaves no box with three sides
    /// 3. Greedy one-ply scan when fewer than `endgame_threshold` lines remain
    /// 4. Alpha-beta search to `depth` plies
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &mut Board) -> MoveResult {
        let start = Instant::now();
        let elapsed = || start.elapsed().as_millis() as u64;

        let remaining = board.remaining_lines();
        if remaining == 0 {
            debug!("no open lines left");
            return MoveResult::no_move(elapsed());
        }

        // 1-2. Tactical selector
        if let Some(tactic) = crate::search::tactical::select(board) {
            let score = self.score_after(board, tactic.mv());
            let result = MoveResult::tactical(tactic, score, elapsed(), remaining as u64);
            self.log_result(&result, remaining);
            return result;
        }

        // 3. Endgame fallback
        if remaining < self.config.endgame_threshold {
            let best = greedy_scan(board, &self.config.weights);
            let result = MoveResult::endgame(best, elapsed(), remaining as u64);
            self.log_result(&result, remaining);
            return result;
        }

        // 4. Alpha-beta
        let search = self.searcher.search(board, self.config.depth);
        debug!(
            nodes = search.stats.nodes,
            cutoffs = search.stats.cutoffs,
            extensions = search.stats.extensions,
            "alpha-beta finished"
        );
        let result = MoveResult::from_alphabeta(search, elapsed());
        self.log_result(&result, remaining);
        result
    }

    /// Static score after playing `mv`, for reporting
    fn score_after(&self, board: &mut Board, mv: Move) -> i32 {
        board.apply(mv, Player::Engine);
        let score = evaluate(board, &self.config.weights);
        board.undo(mv);
        score
    }

    fn log_result(&self, result: &MoveResult, remaining: usize) {
        info!(
            search_type = ?result.search_type,
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            time_ms = result.time_ms,
            remaining,
            "move selected"
        );
    }

    /// Set the alpha-beta depth (clamped to at least 1).
    pub fn set_depth(&mut self, depth: u8) {
        self.config.depth = depth.max(1);
    }

    /// Set the open-line count below which the endgame scan takes over.
    pub fn set_endgame_threshold(&mut self, threshold: usize) {
        self.config.endgame_threshold = threshold;
    }

    /// Replace the evaluator weights.
    pub fn set_weights(&mut self, weights: EvalWeights) {
        self.config.weights = weights;
        self.searcher.set_weights(weights);
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every box at two sides: no completion and no safe move anywhere.
    ///
    /// Vertical lines all drawn on a `boxes x boxes` board; the horizontal
    /// lines are open.
    fn no_safe_board(boxes: usize) -> Board {
        let mut board = Board::with_boxes(boxes).unwrap();
        for r in 0..boxes {
            for c in 0..=boxes {
                board.draw_line(Move::vertical(r as u8, c as u8));
            }
        }
        board
    }

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.config().depth, 4);
        assert_eq!(engine.config().endgame_threshold, 30);
    }

    #[test]
    fn test_engine_with_config() {
        let engine = AIEngine::with_config(EngineConfig {
            depth: 3,
            endgame_threshold: 10,
            weights: EvalWeights::score_only(),
        });
        assert_eq!(engine.config().depth, 3);
        assert_eq!(engine.config().weights, EvalWeights::score_only());
    }

    #[test]
    fn test_engine_empty_board_plays_first_horizontal() {
        let mut engine = AIEngine::new();
        let mut board = Board::with_boxes(2).unwrap();
        let result = engine.get_move_with_stats(&mut board);
        assert_eq!(result.best_move, Some(Move::horizontal(0, 0)));
        assert_eq!(result.search_type, SearchType::SafeMove);
    }

    #[test]
    fn test_engine_takes_box() {
        let mut engine = AIEngine::new();
        let mut board = Board::with_boxes(3).unwrap();
        board.draw_line(Move::horizontal(1, 1));
        board.draw_line(Move::horizontal(2, 1));
        board.draw_line(Move::vertical(1, 1));
        let before = board.clone();

        let result = engine.get_move_with_stats(&mut board);
        assert_eq!(result.best_move, Some(Move::vertical(1, 2)));
        assert_eq!(result.search_type, SearchType::ImmediateCompletion);
        assert_eq!(board, before);

        board.apply(Move::vertical(1, 2), Player::Engine);
        assert_eq!(board.engine_score(), 1);
    }

    #[test]
    fn test_engine_endgame_fallback() {
        // 3x3 boxes, verticals drawn: 12 open lines, all dangerous
        let mut engine = AIEngine::new();
        let mut board = no_safe_board(3);
        assert!(board.remaining_lines() < 30);

        let result = engine.get_move_with_stats(&mut board);
        assert_eq!(result.search_type, SearchType::Endgame);
        let (mv, score) = greedy_scan(&mut board, &EvalWeights::default()).unwrap();
        assert_eq!(result.best_move, Some(mv));
        assert_eq!(result.score, score);
    }

    #[test]
    fn test_engine_alphabeta_above_threshold() {
        let mut engine = AIEngine::with_config(EngineConfig {
            depth: 2,
            endgame_threshold: 5,
            ..EngineConfig::default()
        });
        let mut board = no_safe_board(3);
        let before = board.clone();

        let result = engine.get_move_with_stats(&mut board);
        assert_eq!(result.search_type, SearchType::AlphaBeta);
        assert!(result.best_move.is_some());
        assert!(result.nodes > 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_engine_full_board() {
        let mut engine = AIEngine::new();
        let mut board = Board::with_boxes(2).unwrap();
        board.fill_lines();
        assert_eq!(engine.get_move(&mut board), None);
    }

    #[test]
    fn test_engine_set_depth() {
        let mut engine = AIEngine::new();
        engine.set_depth(6);
        assert_eq!(engine.config().depth, 6);
        engine.set_depth(0);
        assert_eq!(engine.config().depth, 1);
    }

    #[test]
    fn test_engine_set_threshold_and_weights() {
        let mut engine = AIEngine::default();
        engine.set_endgame_threshold(12);
        engine.set_weights(EvalWeights::score_only());
        assert_eq!(engine.config().endgame_threshold, 12);
        assert_eq!(engine.config().weights.two_sides, 0);
    }

    #[test]
    fn test_engine_plays_full_game_against_itself() {
        let mut engine = AIEngine::with_config(EngineConfig {
            depth: 2,
            ..EngineConfig::default()
        });
        let mut board = Board::with_boxes(3).unwrap();
        let mut player = Player::Engine;
        while let Some(mv) = engine.get_move(&mut board) {
            if board.apply(mv, player) == 0 {
                player = player.opponent();
            }
        }
        assert!(board.is_terminal());
        assert_eq!(board.remaining_lines(), 0);
    }
}
