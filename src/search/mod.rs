//! Search module for the dots and boxes engine
//!
//! Contains:
//! - Tactical selection (take a box, else play a safe line)
//! - Greedy one-ply scan for the endgame
//! - Alpha-beta search over apply/undo-mutated state

pub mod alphabeta;
pub mod endgame;
pub mod tactical;

pub use alphabeta::{SearchResult, SearchStats, Searcher, INF};
pub use endgame::{greedy_scan, DEFAULT_ENDGAME_THRESHOLD};
pub use tactical::{find_immediate_completion, find_safe_move, Tactic};
