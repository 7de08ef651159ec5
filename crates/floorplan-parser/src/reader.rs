//! Lazy token stream over line-oriented input.

use std::io::BufRead;

use floorplan_core::ParseError;
use log::trace;

use crate::grammar::parse_line;
use crate::token::Token;
use crate::DEFAULT_MAX_LINE_LEN;

/// Reads one token per non-empty line.
///
/// The stream ends after the first error; blank lines are skipped but still
/// counted for line numbers.
pub struct TokenReader<R> {
    input: R,
    buf: Vec<u8>,
    line: usize,
    max_line_len: usize,
    done: bool,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        Self::with_max_line_len(input, DEFAULT_MAX_LINE_LEN)
    }

    pub fn with_max_line_len(input: R, max_line_len: usize) -> Self {
        Self {
            input,
            buf: Vec::new(),
            line: 0,
            max_line_len,
            done: false,
        }
    }

    /// Number of lines consumed so far.
    pub fn line_number(&self) -> usize {
        self.line
    }

    fn read_token(&mut self) -> Option<Result<Token, ParseError>> {
        loop {
            self.buf.clear();
            match self.input.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(ParseError::Io(e))),
            }
            self.line += 1;

            let Ok(text) = std::str::from_utf8(&self.buf) else {
                return Some(Err(ParseError::MalformedLeaf {
                    line: self.line,
                    found: String::from_utf8_lossy(&self.buf).trim_end().to_string(),
                }));
            };
            let content = text.trim_end_matches(&['\n', '\r'][..]);
            if content.trim().is_empty() {
                continue;
            }

            if content.len() > self.max_line_len {
                return Some(Err(ParseError::LineTooLong {
                    line: self.line,
                    len: content.len(),
                    max: self.max_line_len,
                }));
            }

            let token = parse_line(content, self.line).map(|kind| Token::new(kind, self.line));
            trace!("line {}: {:?}", self.line, token);
            return Some(token);
        }
    }
}

impl<R: BufRead> Iterator for TokenReader<R> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = self.read_token();
        if !matches!(item, Some(Ok(_))) {
            self.done = true;
        }
        item
    }
}
