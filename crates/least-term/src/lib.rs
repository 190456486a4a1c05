// SPDX-License-Identifier: MIT
//
// least-term — Terminal control layer for least.
//
// Everything the pager needs from the terminal, and nothing more:
// raw mode on the controlling terminal, size queries, a bounded poll
// for single key bytes, and byte-level decoding of the arrow-key
// escape sequences.
//
// This crate intentionally avoids external TUI frameworks (ratatui,
// crossterm) in favor of direct terminal control via ANSI escape
// sequences and raw termios. A pager writes a handful of escape codes
// and reads single bytes — an abstraction layer would cost more than
// it saves. Every escape code is earned.

pub mod ansi;
pub mod input;
pub mod terminal;
#[cfg(unix)]
pub mod tty;
