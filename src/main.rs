// SPDX-License-Identifier: MIT
//
// least — a terminal pager that does the least a pager needs to do.
//
// This is the binary glue: resolve the input source and the program
// name, open the controlling terminal, and map the session outcome to
// an exit code. Everything interesting lives in the library crates:
//
//   least-term  → raw mode, size queries, key polling, escape decoding
//   least-pager → line source, render/input loop, error taxonomy
//
// Content flows from stdin or a named file; keys come from /dev/tty.
// The two never mix, which is what lets `command | least` page piped
// output interactively.

use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process;

use least_pager::error::Error;
use least_pager::pager::Pager;
use least_term::tty::{self, Tty};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// License notice printed by `--version`.
const LICENSE_TEXT: &str = "\
Copyright (C) 2026 Rodrigo Luglio
License MIT: <https://opensource.org/license/mit>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

// ─── Invocation ─────────────────────────────────────────────────────────────

/// The program name used in messages: the basename of argv[0], falling
/// back to the crate name when the OS provides nothing useful.
fn program_name(argv0: Option<&str>) -> String {
    argv0
        .map(|s| s.rsplit('/').next().unwrap_or(s))
        .filter(|s| !s.is_empty())
        .unwrap_or(env!("CARGO_PKG_NAME"))
        .to_owned()
}

fn usage(prog: &str) -> String {
    format!(
        "Usage:\n\
         \t{prog} < file\n\
         \tcommand | {prog}\n\
         \t{prog} file\n\
         \n\
         {prog} --help\t\tshow this text\n\
         {prog} --version\t\tshow version and license\n"
    )
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    let args: Vec<String> = env::args().collect();
    let prog = program_name(args.first().map(String::as_str));

    let input: Box<dyn BufRead> = match args.get(1).map(String::as_str) {
        Some("--help") => {
            print!("{}", usage(&prog));
            return;
        }
        Some("--version") => {
            println!("{prog} {VERSION}\n{LICENSE_TEXT}");
            return;
        }
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                eprintln!("{prog}: {path}: {e}");
                process::exit(1);
            }
        },
        None => {
            // Nothing piped in and no file named — there is nothing
            // to page.
            if tty::stdin_is_tty() {
                eprint!("{}", usage(&prog));
                process::exit(1);
            }
            Box::new(io::stdin().lock())
        }
    };

    if let Err(e) = page(input) {
        eprintln!("{prog}: {e}");
        process::exit(1);
    }
}

/// Run one pager session over the resolved input stream.
///
/// Quit and end of input both map to a successful exit. The `Tty`
/// restores the terminal mode when the `Pager` that owns it is
/// dropped — on both outcomes and on every error path alike, before
/// `main` gets to print any message.
fn page(input: Box<dyn BufRead>) -> Result<(), Error> {
    let mut tty = Tty::open().map_err(|e| Error::setup("open /dev/tty", e))?;
    tty.enter_raw().map_err(|e| Error::setup("enter raw mode", e))?;

    let mut pager = Pager::new(tty, io::stdout().lock(), input);
    pager.run()?;
    Ok(())
}

// ─── Tests ──────────────────────────────────────────────────────────────────
