// SPDX-License-Identifier: MIT
//
// Escape sequence decoding.
//
// The pager only cares about one family of sequences: CSI (`ESC [`)
// followed by optional parameter bytes and a final letter, which is
// how terminals encode the arrow keys (`ESC [ A` through `ESC [ D`).
// Decoding is byte-level and allocation-free — there is nothing to
// buffer, because by the time this runs the ESC byte has already been
// consumed and the rest of the sequence is sitting in the terminal's
// input queue.
//
// Modifier encodings like `ESC [ 1 ; 5 B` (Ctrl+Down) are handled by
// skipping every non-alphabetic byte and reporting only the final
// letter. The pager treats a modified arrow the same as a plain one.

use std::io;

use crate::terminal::Terminal;

// ─── Escape ─────────────────────────────────────────────────────────────────

/// Result of decoding the bytes that follow a consumed ESC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// A CSI sequence, identified by its final letter (`b'B'` for the
    /// down arrow).
    Csi(u8),
    /// ESC followed by something other than `[` — not a sequence the
    /// pager recognizes. The stray byte has been consumed.
    Unrecognized,
}

// ─── Decoding ───────────────────────────────────────────────────────────────

/// Decode an escape sequence whose leading ESC byte was already read.
///
/// Reads the next byte: if it is not `[`, the sequence is
/// [`Unrecognized`](Escape::Unrecognized). Otherwise parameter and
/// modifier bytes are consumed and discarded until the first alphabetic
/// byte, which is the sequence's final letter.
///
/// # Errors
///
/// Returns [`io::ErrorKind::UnexpectedEof`] if the input ends before a
/// final letter is found, or the underlying read error if one occurs.
pub fn read_escape<T: Terminal>(term: &mut T) -> io::Result<Escape> {
    let Some(byte) = term.read_byte()? else {
        return Err(eof());
    };

    if byte != b'[' {
        return Ok(Escape::Unrecognized);
    }

    loop {
        match term.read_byte()? {
            Some(b) if b.is_ascii_alphabetic() => return Ok(Escape::Csi(b)),
            Some(_) => {} // Parameter or modifier byte — skip.
            None => return Err(eof()),
        }
    }
}

fn eof() -> io::Error {
    io::Error::new(
        io::ErrorKind::UnexpectedEof,
        "end of input inside escape sequence",
    )
}

// ─── Tests ───────────────────────────────────────────────────────────────────
