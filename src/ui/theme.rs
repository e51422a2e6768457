//! Theme constants for the dots and boxes GUI

use egui::Color32;

use crate::board::{Owner, Player};

// Board
pub const BOARD_BG: Color32 = Color32::from_rgb(236, 232, 220);
pub const DOT: Color32 = Color32::from_rgb(40, 42, 46);
pub const GHOST_LINE: Color32 = Color32::from_rgb(214, 208, 194);
pub const DRAWN_LINE: Color32 = Color32::from_rgb(55, 58, 64);
pub const LAST_LINE: Color32 = Color32::from_rgb(230, 60, 60);
pub const LABEL: Color32 = Color32::from_rgb(120, 110, 95);

// Sides
pub const HUMAN_ACCENT: Color32 = Color32::from_rgb(70, 130, 220);
pub const ENGINE_ACCENT: Color32 = Color32::from_rgb(225, 120, 50);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hint_line() -> Color32 {
    Color32::from_rgba_unmultiplied(50, 200, 90, 200)
}

/// Accent color of a side
pub fn player_color(player: Player) -> Color32 {
    match player {
        Player::Human => HUMAN_ACCENT,
        Player::Engine => ENGINE_ACCENT,
    }
}

/// Fill for a claimed box, `None` while unowned
pub fn box_fill(owner: Owner) -> Option<Color32> {
    match owner {
        Owner::Human => Some(Color32::from_rgba_unmultiplied(70, 130, 220, 90)),
        Owner::Engine => Some(Color32::from_rgba_unmultiplied(225, 120, 50, 90)),
        Owner::Unowned => None,
    }
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 36.0;
pub const DOT_RADIUS: f32 = 5.0;
pub const LINE_WIDTH: f32 = 5.0;
pub const GHOST_LINE_WIDTH: f32 = 1.5;
/// Pointer must be this close (in cells) to a line to pick it
pub const PICK_TOLERANCE: f32 = 0.3;
