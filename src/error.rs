//! Error type shared by board construction and the turn protocol

use std::io;

/// Errors surfaced by the engine.
///
/// The search itself never fails: the generator only offers legal lines.
/// Everything here comes from malformed input at the process boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input that cannot describe a legal board or move
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Input ended in the middle of a handshake or turn
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
