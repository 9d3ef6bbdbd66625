//! Whitespace-separated token readers shared by the loaders

use std::collections::VecDeque;
use std::io::BufRead;

use crate::io::error::{Result, stream_error};

/// Tokens of in-memory bitmap text
///
/// Splits on ASCII whitespace; `#` starts a comment that runs to the end
/// of its line and also ends any token it interrupts.
#[derive(Debug, Clone)]
pub struct CommentedTokens<'a> {
    rest: &'a str,
}

impl<'a> CommentedTokens<'a> {
    /// Tokenize `text`
    pub const fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    fn skip_blanks(&mut self) {
        loop {
            let trimmed = self.rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
            match trimmed.strip_prefix('#') {
                Some(comment) => {
                    self.rest = comment
                        .find('\n')
                        .and_then(|end| comment.get(end..))
                        .unwrap_or("");
                }
                None => {
                    self.rest = trimmed;
                    return;
                }
            }
        }
    }
}

impl<'a> Iterator for CommentedTokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_blanks();
        if self.rest.is_empty() {
            return None;
        }
        let end = self
            .rest
            .find(|c: char| c.is_ascii_whitespace() || c == '#')
            .unwrap_or(self.rest.len());
        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(token)
    }
}

/// Tokens read lazily, one line at a time, from a buffered stream
///
/// Lines are only pulled when the queue runs dry, so prompts written
/// between reads appear before the user is expected to answer them.
#[derive(Debug)]
pub struct StreamTokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> StreamTokens<R> {
    /// Wrap a buffered reader
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying stream fails
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .map_err(|e| stream_error("read input", e))?;
            if read == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_ascii_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }
}
