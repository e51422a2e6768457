//! Whitespace token reader over any `BufRead`

use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Splits input into whitespace-separated tokens, a line at a time
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Next token; end of input is an error
    pub fn expect_token(&mut self) -> Result<String> {
        self.next_token()?.ok_or(Error::UnexpectedEof)
    }

    /// Next token parsed as `T`
    pub fn parse_next<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let token = self.expect_token()?;
        token
            .parse()
            .map_err(|_| Error::invalid(format!("expected {what}, got {token:?}")))
    }
}
