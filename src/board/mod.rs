//! Board representation for dots and boxes

pub mod board;
pub mod lineset;


// Re-exports
pub use board::Board;
pub use lineset::LineSet;

/// Largest box grid the board accepts per side (box columns are lettered A-Z)
pub const MAX_BOXES: usize = 26;

/// The two sides of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Engine,
}

impl Player {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Engine,
            Player::Engine => Player::Human,
        }
    }
}

/// Ownership of a single box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Owner {
    #[default]
    Unowned,
    Human,
    Engine,
}

impl From<Player> for Owner {
    #[inline]
    fn from(player: Player) -> Self {
        match player {
            Player::Human => Owner::Human,
            Player::Engine => Owner::Engine,
        }
    }
}

/// Line direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One undrawn line, identified by the intersection it starts from.
///
/// A horizontal line at `(row, col)` joins intersections `(row, col)` and
/// `(row, col + 1)`; a vertical one joins `(row, col)` and `(row + 1, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: u8,
    pub col: u8,
    pub orientation: Orientation,
}

impl Move {
    #[inline]
    pub const fn new(row: u8, col: u8, orientation: Orientation) -> Self {
        Self { row, col, orientation }
    }

    #[inline]
    pub const fn horizontal(row: u8, col: u8) -> Self {
        Self::new(row, col, Orientation::Horizontal)
    }

    #[inline]
    pub const fn vertical(row: u8, col: u8) -> Self {
        Self::new(row, col, Orientation::Vertical)
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        self.orientation == Orientation::Horizontal
    }
}
