// SPDX-License-Identifier: MIT
//
// Line source — lazy, one line at a time, into a reused buffer.
//
// The pager never holds more than the line it is currently writing.
// `LineSource` owns a single `Vec<u8>` that is cleared (not shrunk)
// before each read and grown by `read_until` as needed, so a long line
// early in the stream pays for every line after it. The render step
// borrows the bytes through a `Line` view; whether the trailing
// terminator is kept or stripped is the caller's choice, made per
// write site.

use std::io::{self, BufRead};

// ─── Line ───────────────────────────────────────────────────────────────────

/// A borrowed view of the most recently read line.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    raw: &'a [u8],
}

impl Line<'_> {
    /// The full line bytes, terminator included when present.
    #[must_use]
    pub const fn raw(&self) -> &[u8] {
        self.raw
    }

    /// The line bytes without a trailing `\n`.
    ///
    /// The final line of a file may arrive with no terminator at all —
    /// in that case this is the same as [`raw`](Self::raw).
    #[must_use]
    pub fn content(&self) -> &[u8] {
        match self.raw {
            [head @ .., b'\n'] => head,
            _ => self.raw,
        }
    }

    /// Whether the line arrived with its `\n` terminator.
    #[must_use]
    pub fn has_terminator(&self) -> bool {
        self.raw.last() == Some(&b'\n')
    }
}

// ─── LineSource ─────────────────────────────────────────────────────────────

/// Reads one line at a time from a buffered stream.
pub struct LineSource<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LineSource<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Read the next line.
    ///
    /// Returns `Ok(None)` at end of stream. The returned [`Line`]
    /// borrows the internal buffer and is valid until the next call.
    ///
    /// # Errors
    ///
    /// Returns the underlying read error, if any.
    pub fn next_line(&mut self) -> io::Result<Option<Line<'_>>> {
        self.buf.clear();
        let n = self.reader.read_until(b'\n', &mut self.buf)?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(Line { raw: &self.buf }))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
