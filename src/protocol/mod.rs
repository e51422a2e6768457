//! Line-oriented text protocol spoken on stdin/stdout

pub mod notation;
pub mod reader;
pub mod session;
pub mod turn;

pub use notation::{format_move, parse_move, BoxPos, Side};
pub use reader::TokenReader;
pub use session::Session;
pub use turn::{parse_turn, Handshake};
