//! Dots and boxes decision engine
//!
//! Picks one line per turn for a dots-and-boxes bot:
//! - Rectangular grid of dots with any number of rows and columns
//! - Closing a box scores it and keeps the turn
//! - Game ends when every box is scored
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Line sets, box owners and incremental apply/undo
//! - [`rules`]: Move generation and box-completion predicates
//! - [`eval`]: Static position evaluation
//! - [`search`]: Tactical selector, endgame scan and alpha-beta
//! - [`engine`]: Per-turn decision procedure tying it together
//! - [`protocol`]: Text protocol for running as a bot process
//! - [`ui`]: Desktop front-end
//!
//! # Quick Start
//!
//! ```
//! use dots::{AIEngine, Board, Player};
//!
//! let mut board = Board::with_boxes(3).unwrap();
//! let mut engine = AIEngine::new();
//!
//! if let Some(mv) = engine.get_move(&mut board) {
//!     let completed = board.apply(mv, Player::Engine);
//!     println!("Engine draws {mv:?}, closing {completed} boxes");
//! }
//! ```
//!
//! # Search Priority
//!
//! The engine follows this priority each turn:
//! 1. First line that closes a box
//! 2. First line that gives no box its third side
//! 3. Greedy one-ply scan when few lines remain
//! 4. Depth-limited alpha-beta with turn extension

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod protocol;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Move, Orientation, Owner, Player};
pub use engine::{AIEngine, EngineConfig, MoveResult, SearchType};
pub use error::{Error, Result};
pub use eval::EvalWeights;
