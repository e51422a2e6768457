//! Evaluation module for dots and boxes positions
//!
//! A static score from the engine's point of view, built from:
//! - Net score (boxes owned by the engine minus boxes owned by the opponent)
//! - Boxes one side from completion (danger for whoever moves next)
//! - Partially enclosed boxes (territory shaping)

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, SideCounts};
pub use weights::EvalWeights;
