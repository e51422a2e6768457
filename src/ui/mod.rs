//! GUI module for dots and boxes
//!
//! Native desktop front-end on egui/eframe. The engine runs on a worker
//! thread so the window stays responsive while it searches.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::DotsApp;
pub use game_state::{GameMode, GameOutcome, GameState};
