// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation.
//
// Pure functions that write escape sequences to any `impl Write`. No
// state, no decisions about when to emit — that's the pager loop's job.
// This module just knows the byte-level encoding of the four terminal
// commands the pager uses.
//
// All functions return `io::Result` propagated from the underlying
// writer.

use std::io::{self, Write};

/// Clear the entire screen (ED 2).
#[inline]
pub fn clear_screen(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[2J")
}

/// Move the cursor to the top-left corner (CUP with no parameters).
#[inline]
pub fn cursor_home(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[H")
}

/// Clear the line the cursor is on (EL 2). Does not move the cursor.
#[inline]
pub fn clear_line(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[2K")
}

/// Scroll the screen contents up by one line (SU).
#[inline]
pub fn scroll_up(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[1S")
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: run an ANSI function and return its output as a string.
    fn emit<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn clear_screen_sequence() {
        assert_eq!(emit(|w| clear_screen(w)), "\x1b[2J");
    }

    #[test]
    fn cursor_home_sequence() {
        assert_eq!(emit(|w| cursor_home(w)), "\x1b[H");
    }

    #[test]
    fn clear_line_sequence() {
        assert_eq!(emit(|w| clear_line(w)), "\x1b[2K");
    }

    #[test]
    fn scroll_up_sequence() {
        assert_eq!(emit(|w| scroll_up(w)), "\x1b[1S");
    }

    #[test]
    fn sequences_compose() {
        let mut buf = Vec::new();
        clear_screen(&mut buf).unwrap();
        cursor_home(&mut buf).unwrap();
        assert_eq!(buf, b"\x1b[2J\x1b[H");
    }
}
