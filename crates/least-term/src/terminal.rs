// SPDX-License-Identifier: MIT
//
// The terminal capability surface.
//
// The pager loop never talks to a file descriptor directly — it talks
// to the [`Terminal`] trait. The one real implementation is
// [`Tty`](crate::tty::Tty); tests script a fake. This is the seam that
// lets the whole render/input loop run without a controlling terminal.

use std::io;
use std::time::Duration;

// ─── Size ───────────────────────────────────────────────────────────────────

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Number of columns (width in character cells).
    pub cols: u16,
    /// Number of rows (height in character cells).
    pub rows: u16,
}

impl Size {
    /// Rows available for content.
    ///
    /// The last row is reserved for the `:` prompt, so content gets
    /// `rows - 1` lines (zero when the terminal reports 0 or 1 rows).
    #[inline]
    #[must_use]
    pub const fn content_rows(self) -> u16 {
        self.rows.saturating_sub(1)
    }
}

// ─── Terminal ───────────────────────────────────────────────────────────────

/// What the pager needs from its controlling terminal.
///
/// All three operations are fallible: a failed size query, poll, or
/// read is fatal to the session. `poll_key` and `read_byte` return
/// `Ok(None)` for the two non-error "nothing there" cases — timeout
/// and end of input respectively.
pub trait Terminal {
    /// Query the current terminal dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if the size cannot be determined.
    fn size(&mut self) -> io::Result<Size>;

    /// Wait up to `timeout` for a single input byte.
    ///
    /// Returns `Ok(None)` on timeout, `Ok(Some(byte))` when input
    /// arrived within the window.
    ///
    /// # Errors
    ///
    /// Returns an error if the poll itself fails.
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<u8>>;

    /// Read a single byte, blocking until one is available.
    ///
    /// Returns `Ok(None)` if the input stream has ended. Used for the
    /// continuation bytes of an escape sequence, where the first byte
    /// has already been delivered by [`poll_key`](Terminal::poll_key).
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Size ──────────────────────────────────────────────────────────

    #[test]
    fn content_rows_typical() {
        assert_eq!(Size { cols: 80, rows: 24 }.content_rows(), 23);
    }

    #[test]
    fn content_rows_minimum_useful() {
        assert_eq!(Size { cols: 80, rows: 2 }.content_rows(), 1);
    }

    #[test]
    fn content_rows_single_row() {
        assert_eq!(Size { cols: 80, rows: 1 }.content_rows(), 0);
    }

    #[test]
    fn content_rows_zero_rows() {
        assert_eq!(Size { cols: 80, rows: 0 }.content_rows(), 0);
    }

    #[test]
    fn size_equality() {
        assert_eq!(
            Size { cols: 80, rows: 24 },
            Size { cols: 80, rows: 24 }
        );
    }

    #[test]
    fn size_inequality_on_cols_only() {
        assert_ne!(
            Size { cols: 80, rows: 24 },
            Size { cols: 120, rows: 24 }
        );
    }

    #[test]
    fn size_is_copy() {
        let a = Size { cols: 80, rows: 24 };
        let b = a;
        assert_eq!(a, b);
    }
}
