// SPDX-License-Identifier: MIT
//
// The render/input loop — the heartbeat of the pager.
//
// One initial screen fill, then a poll loop: each iteration either
// decodes a key byte into an advance count, or times out and re-checks
// the terminal size. That bounded 100ms wait is the only suspension
// point in the program — it exists so resizes are noticed without a
// signal handler or a dedicated thread.
//
// Two ways lines reach the screen, and they are not the same:
//
//   - A user-initiated advance replaces a displayed line: erase, write
//     the new line *without* its terminator, scroll the screen up one.
//   - A resize backfill fills blank rows the terminal just exposed:
//     each line is written *with* its terminator and nothing scrolls.
//
// End of input anywhere — mid-fill, mid-advance, mid-backfill — ends
// the session immediately. There is no "end of file" marker; the
// screen simply stops receiving lines.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use least_term::ansi;
use least_term::input::{Escape, read_escape};
use least_term::terminal::{Size, Terminal};

use crate::error::{Error, Outcome};
use crate::source::LineSource;

/// How long each poll waits before re-checking the terminal size.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

// ─── Key dispatch ───────────────────────────────────────────────────────────

/// What a decoded key asks the loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    /// End the session.
    Quit,
    /// Read and display this many new lines. Zero is a no-op.
    Advance(u16),
}

// ─── Pager ──────────────────────────────────────────────────────────────────

/// A single pager session: terminal, screen writer, and line source.
///
/// [`run`](Self::run) drives the session to completion and returns how
/// it ended. Terminal mode restoration is not this type's job — the
/// `Terminal` implementation restores itself on drop.
pub struct Pager<T, W, R> {
    term: T,
    screen: W,
    source: LineSource<R>,
    size: Size,
}

impl<T: Terminal, W: Write, R: BufRead> Pager<T, W, R> {
    /// Create a session over a terminal, a screen writer, and an input
    /// stream.
    pub fn new(term: T, screen: W, input: R) -> Self {
        Self {
            term,
            screen,
            source: LineSource::new(input),
            size: Size { cols: 0, rows: 0 },
        }
    }

    /// Run the session until quit, end of input, or a fatal error.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if any terminal or stream operation fails.
    /// No error is retried.
    pub fn run(&mut self) -> Result<Outcome, Error> {
        self.size = self.query_size()?;

        if let Some(outcome) = self.fill()? {
            return Ok(outcome);
        }

        loop {
            let key = self
                .term
                .poll_key(POLL_INTERVAL)
                .map_err(|e| Error::io("poll", e))?;

            let outcome = match key {
                Some(byte) => match self.decode(byte)? {
                    Action::Quit => {
                        self.screen.write_all(b"\r").map_err(write_err)?;
                        self.screen.flush().map_err(write_err)?;
                        return Ok(Outcome::Quit);
                    }
                    Action::Advance(0) => None,
                    Action::Advance(count) => self.advance(count)?,
                },
                None => self.check_resize()?,
            };

            if let Some(outcome) = outcome {
                return Ok(outcome);
            }
        }
    }

    // ── Initial fill ────────────────────────────────────────────────

    /// Clear the screen and write one screenful of lines, then the
    /// prompt. Lines keep their terminators.
    fn fill(&mut self) -> Result<Option<Outcome>, Error> {
        ansi::clear_screen(&mut self.screen).map_err(write_err)?;
        ansi::cursor_home(&mut self.screen).map_err(write_err)?;

        for _ in 0..self.size.content_rows() {
            let Some(line) = self.source.next_line().map_err(read_err)? else {
                self.screen.flush().map_err(write_err)?;
                return Ok(Some(Outcome::EndOfInput));
            };
            self.screen.write_all(line.raw()).map_err(write_err)?;
        }

        self.prompt()?;
        Ok(None)
    }

    // ── Key decoding ────────────────────────────────────────────────

    /// Map an input byte to an action. Advance counts derive from the
    /// current size, so a recorded resize changes what `d` and `f`
    /// mean.
    fn decode(&mut self, byte: u8) -> Result<Action, Error> {
        Ok(match byte {
            b'q' => Action::Quit,
            b'j' => Action::Advance(1),
            b'd' => Action::Advance(self.size.rows / 2),
            b'f' => Action::Advance(self.size.rows),
            0x1B => match read_escape(&mut self.term).map_err(|e| Error::io("read", e))? {
                Escape::Csi(b'B') => Action::Advance(1),
                _ => Action::Advance(0),
            },
            _ => Action::Advance(0),
        })
    }

    // ── Advancing ───────────────────────────────────────────────────

    /// Replace `count` displayed lines with the next lines from the
    /// source: per line, erase, write without the terminator, scroll
    /// up one.
    fn advance(&mut self, count: u16) -> Result<Option<Outcome>, Error> {
        for _ in 0..count {
            ansi::clear_line(&mut self.screen).map_err(write_err)?;
            self.screen.write_all(b"\r").map_err(write_err)?;

            let Some(line) = self.source.next_line().map_err(read_err)? else {
                self.screen.flush().map_err(write_err)?;
                return Ok(Some(Outcome::EndOfInput));
            };
            self.screen.write_all(line.content()).map_err(write_err)?;

            ansi::scroll_up(&mut self.screen).map_err(write_err)?;
            self.screen.write_all(b"\r").map_err(write_err)?;
        }

        self.prompt()?;
        Ok(None)
    }

    // ── Resize handling ─────────────────────────────────────────────

    /// Re-query the size after a poll timeout. Growth in rows triggers
    /// a backfill of the newly exposed area; any other change is only
    /// recorded.
    fn check_resize(&mut self) -> Result<Option<Outcome>, Error> {
        let new = self.query_size()?;
        if new == self.size {
            return Ok(None);
        }

        let grown = new.rows.saturating_sub(self.size.rows);
        self.size = new;

        if grown == 0 {
            return Ok(None);
        }
        self.backfill(grown)
    }

    /// Fill `rows` newly exposed screen rows. Unlike an advance, each
    /// line keeps its terminator and nothing is scrolled: these lines
    /// land on blank rows instead of replacing displayed ones. Only
    /// the prompt row is erased, once, before the first line.
    fn backfill(&mut self, rows: u16) -> Result<Option<Outcome>, Error> {
        ansi::clear_line(&mut self.screen).map_err(write_err)?;
        self.screen.write_all(b"\r").map_err(write_err)?;

        for _ in 0..rows {
            let Some(line) = self.source.next_line().map_err(read_err)? else {
                self.screen.flush().map_err(write_err)?;
                return Ok(Some(Outcome::EndOfInput));
            };
            self.screen.write_all(line.raw()).map_err(write_err)?;
        }

        self.prompt()?;
        Ok(None)
    }

    // ── Shared plumbing ─────────────────────────────────────────────

    fn query_size(&mut self) -> Result<Size, Error> {
        self.term.size().map_err(|e| Error::io("ioctl", e))
    }

    /// Draw the `:` prompt at the start of the bottom row and flush.
    fn prompt(&mut self) -> Result<(), Error> {
        self.screen.write_all(b"\r:").map_err(write_err)?;
        self.screen.flush().map_err(write_err)
    }
}

fn write_err(e: io::Error) -> Error {
    Error::io("write", e)
}

fn read_err(e: io::Error) -> Error {
    Error::io("read", e)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
