// SPDX-License-Identifier: MIT
//
// The session's error taxonomy and success outcome.
//
// Two rules shape this module. First, end of input is not an error:
// a pager that has shown everything exits successfully, so the loop
// returns an `Outcome`, not an `Err`. Second, no error is retried —
// every failure carries the name of the operation that failed and
// travels straight up to `main`, which prints it and exits 1. Nothing
// terminates the process from inside the loop; that is what keeps
// terminal restoration on every exit path.

use std::fmt;
use std::io;

// ─── Outcome ────────────────────────────────────────────────────────────────

/// How a pager session ended successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user pressed `q`.
    Quit,
    /// The input stream ran out of lines.
    EndOfInput,
}

// ─── Error ──────────────────────────────────────────────────────────────────

/// A fatal session error. Maps to exit code 1.
#[derive(Debug)]
pub enum Error {
    /// The controlling terminal could not be opened or configured.
    Setup {
        /// The operation that failed (e.g. `"open /dev/tty"`).
        op: &'static str,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// A read, write, or poll failed during the session.
    Io {
        /// The operation that failed (e.g. `"poll"`).
        op: &'static str,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl Error {
    /// A terminal-setup failure.
    #[must_use]
    pub const fn setup(op: &'static str, source: io::Error) -> Self {
        Self::Setup { op, source }
    }

    /// An I/O failure inside the session.
    #[must_use]
    pub const fn io(op: &'static str, source: io::Error) -> Self {
        Self::Io { op, source }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Setup { op, source } | Self::Io { op, source } => {
                write!(f, "{op}: {source}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Setup { source, .. } | Self::Io { source, .. } => Some(source),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn display_names_the_operation() {
        let err = Error::io("poll", io::Error::other("boom"));
        assert_eq!(err.to_string(), "poll: boom");
    }

    #[test]
    fn setup_display_names_the_operation() {
        let err = Error::setup(
            "open /dev/tty",
            io::Error::new(io::ErrorKind::NotFound, "no such device"),
        );
        assert_eq!(err.to_string(), "open /dev/tty: no such device");
    }

    #[test]
    fn source_exposes_the_io_error() {
        let err = Error::io("read", io::Error::other("boom"));
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "boom");
    }

    #[test]
    fn outcome_is_copy_and_comparable() {
        let a = Outcome::Quit;
        let b = a;
        assert_eq!(a, b);
        assert_ne!(Outcome::Quit, Outcome::EndOfInput);
    }
}
