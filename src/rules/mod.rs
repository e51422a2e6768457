//! Game rules for dots and boxes
//!
//! This module implements:
//! - Move generation (every undrawn line, in a fixed order)
//! - One-ply predicates built on `Board::count_sides`: box completion and
//!   third-side creation

pub mod moves;
pub mod tactics;

// Re-exports for convenient access
pub use moves::{generate_moves, is_valid_move};
pub use tactics::{completes_box, creates_third_side, is_safe_move};
