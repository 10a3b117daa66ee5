//! Whitespace tokenizer over a `.tns` stream
//!
//! Header fields are read a line at a time, payload values a token (or, for
//! sparse entries, a line) at a time. Blank lines are skipped everywhere.
//! Only payload reads count toward [`TokenReader::consumed`], which the
//! facade compares with the size of the constructed object.

use crate::error::TnsResult;
use std::collections::VecDeque;
use std::io::BufRead;

pub(crate) struct TokenReader<R> {
    reader: R,
    buf: String,
    pending: VecDeque<String>,
    line: usize,
    consumed: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            pending: VecDeque::new(),
            line: 0,
            consumed: 0,
        }
    }

    /// Line number of the most recently read line (1-based, 0 before any read)
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    /// Payload tokens handed out so far
    pub(crate) fn consumed(&self) -> usize {
        self.consumed
    }

    /// Load the next non-blank line into `pending`; false at end of input
    fn fill(&mut self) -> TnsResult<bool> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Ok(false);
            }
            self.line += 1;
            self.pending
                .extend(self.buf.split_whitespace().map(str::to_string));
            if !self.pending.is_empty() {
                return Ok(true);
            }
        }
    }

    /// Header read: the rest of the current line, or the next non-blank line
    pub(crate) fn next_line(&mut self) -> TnsResult<Option<Vec<String>>> {
        if self.pending.is_empty() && !self.fill()? {
            return Ok(None);
        }
        Ok(Some(self.pending.drain(..).collect()))
    }

    /// Payload read of a single token, crossing line boundaries
    pub(crate) fn next_token(&mut self) -> TnsResult<Option<String>> {
        if self.pending.is_empty() && !self.fill()? {
            return Ok(None);
        }
        let token = self.pending.pop_front();
        if token.is_some() {
            self.consumed += 1;
        }
        Ok(token)
    }

    /// Payload read of one whole line (a sparse entry)
    pub(crate) fn next_entry(&mut self) -> TnsResult<Option<Vec<String>>> {
        let entry = self.next_line()?;
        if let Some(tokens) = &entry {
            self.consumed += tokens.len();
        }
        Ok(entry)
    }

    /// First token left after the record, without counting it
    pub(crate) fn leftover(&mut self) -> TnsResult<Option<String>> {
        if self.pending.is_empty() && !self.fill()? {
            return Ok(None);
        }
        Ok(self.pending.pop_front())
    }
}
