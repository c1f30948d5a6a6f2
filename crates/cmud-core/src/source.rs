//! Line-at-a-time reading with 1-based line numbers.
//!
//! Lines come back as raw bytes. Decoding is left to the caller, which knows
//! whether a line is interpreted or only skipped.

use std::io::{self, BufRead};

/// Reads a source line by line, stripping `\n` / `\r\n` terminators and
/// tracking the number of the line most recently returned.
#[derive(Debug)]
pub(crate) struct LineSource<R> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
}

impl<R: BufRead> LineSource<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: 0,
        }
    }

    /// The next line's number and bytes without its terminator, or `None` at
    /// end of input.
    pub(crate) fn next_line(&mut self) -> io::Result<Option<(usize, &[u8])>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        Ok(Some((self.line, &self.buf)))
    }

    /// Number of the last line returned by [`next_line`](Self::next_line); 0 before the first.
    pub(crate) fn line(&self) -> usize {
        self.line
    }
}
