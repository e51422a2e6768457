//! Process loop: handshake once, then one move per turn

use std::io::{BufRead, Write};

use tracing::{debug, info};

use super::notation::format_move;
use super::reader::TokenReader;
use super::turn::{parse_turn, Handshake};
use crate::engine::AIEngine;
use crate::error::{Error, Result};

/// Drives the engine over a reader/writer pair
pub struct Session<R, W> {
    tokens: TokenReader<R>,
    output: W,
    engine: AIEngine,
    turns: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, engine: AIEngine) -> Self {
        Self {
            tokens: TokenReader::new(input),
            output,
            engine,
            turns: 0,
        }
    }

    /// Turns answered so far
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Run until input ends between turns.
    pub fn run(&mut self) -> Result<()> {
        let handshake = Handshake::parse(&mut self.tokens)?;
        info!(
            board_size = handshake.board_size,
            player = %handshake.player_id,
            "session started"
        );
        let mut board = handshake.board()?;

        while parse_turn(&mut self.tokens, &mut board)? {
            let result = self.engine.get_move_with_stats(&mut board);
            let mv = result
                .best_move
                .ok_or_else(|| Error::invalid("turn requested on a fully drawn board"))?;
            let text = format_move(&board, mv);
            debug!(
                turn = self.turns,
                %text,
                search = ?result.search_type,
                score = result.score,
                "answering"
            );
            writeln!(self.output, "{text}")?;
            self.output.flush()?;
            self.turns += 1;
        }

        info!(turns = self.turns, "input closed");
        Ok(())
    }

    /// Give back the writer
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineConfig;

    fn run(input: &str) -> (Result<()>, String) {
        let engine = AIEngine::with_config(EngineConfig::default());
        let mut session = Session::new(input.as_bytes(), Vec::new(), engine);
        let result = session.run();
        let output = String::from_utf8(session.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn test_first_turn_on_empty_board() {
        let (result, output) = run("3\nP1\n0 0\n9\nA3 TBLR\nB3 TBLR\nC3 TBLR\nA2 TBLR\nB2 TBLR\nC2 TBLR\nA1 TBLR\nB1 TBLR\nC1 TBLR\n");
        assert!(result.is_ok());
        assert_eq!(output, "A3 T\n");
    }

    #[test]
    fn test_takes_box_with_one_open_side() {
        // Single box with only the bottom open
        let (result, output) = run("1\nP2\n0 0\n1\nA1 B\n");
        assert!(result.is_ok());
        assert_eq!(output, "A1 B\n");
    }

    #[test]
    fn test_handshake_only() {
        let (result, output) = run("4\nP1\n");
        assert!(result.is_ok());
        assert!(output.is_empty());
    }

    #[test]
    fn test_full_board_is_an_error() {
        let (result, output) = run("1\nP1\n1 0\n0\n");
        assert!(matches!(result, Err(Error::InvalidInput(_))));
        assert!(output.is_empty());
    }

    #[test]
    fn test_truncated_turn() {
        let (result, _) = run("2\nP1\n0 0\n3\nA1 T\n");
        assert!(matches!(result, Err(Error::UnexpectedEof)));
    }
}
