// SPDX-License-Identifier: MIT
//
// Controlling-terminal access — raw mode, size queries, and RAII cleanup.
//
// Safety: This module necessarily uses `unsafe` for termios (tcgetattr,
// tcsetattr), ioctl (TIOCGWINSZ), isatty, poll, and raw fd reads. These
// are the standard POSIX interfaces for terminal control — there is no
// safe alternative. Each unsafe block is minimal and documented.
#![allow(unsafe_code)]
//
// The pager reads keys from `/dev/tty`, not from stdin, so paging works
// even when the content arrives through a pipe. This module owns that
// device: it enters raw mode via termios and guarantees the original
// mode comes back on drop — even if the pager panics mid-write.
//
// Raw mode here is deliberately not `cfmakeraw`. Only `ICANON` and
// `ECHO` are cleared, and `ISIG` is kept on so Ctrl-C still kills the
// process. Output post-processing (`OPOST`) stays enabled: content
// lines are written with their `\n` terminators and the terminal must
// keep translating them.

use std::fs::File;
use std::io;
use std::os::unix::io::{AsRawFd, RawFd};
use std::sync::{Mutex, Once};
use std::time::Duration;

use crate::terminal::{Size, Terminal};

// ─── Terminal Queries ───────────────────────────────────────────────────────

/// Check whether stdin is connected to a terminal (TTY).
#[must_use]
pub fn stdin_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDIN_FILENO) != 0 }
}

// ─── Panic-Safe Terminal Restore ────────────────────────────────────────────

/// Global backup of the tty fd and its original termios for panic
/// recovery.
///
/// The [`Tty`] struct owns its own copy, but the panic hook can't
/// access it. This global backup — behind a [`Mutex`], not
/// `static mut` — lets the hook restore the terminal without the
/// struct.
static TERMIOS_BACKUP: Mutex<Option<(RawFd, libc::termios)>> = Mutex::new(None);

/// Restore termios from the global backup. Best-effort, ignores errors.
fn restore_termios_from_backup() {
    if let Ok(guard) = TERMIOS_BACKUP.lock() {
        if let Some((fd, ref original)) = *guard {
            unsafe {
                let _ = libc::tcsetattr(fd, libc::TCSANOW, original);
            }
        }
    }
}

/// Panic hook guard — ensures the hook is installed at most once per process.
static PANIC_HOOK_INSTALLED: Once = Once::new();

/// Install a panic hook that restores the terminal before printing the error.
///
/// Without this, a panic in raw mode leaves the user's terminal broken:
/// no echo, no line editing. The hook restores termios from the global
/// backup and writes a raw `\r` directly to fd 1 — bypassing Rust's
/// stdout lock to avoid deadlock if the panic happened mid-write — so
/// the panic message starts at column 0 on a working terminal.
fn install_panic_hook() {
    PANIC_HOOK_INSTALLED.call_once(|| {
        let original = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_termios_from_backup();
            unsafe {
                let _ = libc::write(libc::STDOUT_FILENO, b"\r".as_ptr().cast::<libc::c_void>(), 1);
            }
            original(info);
        }));
    });
}

// ─── Raw Mode Flags ─────────────────────────────────────────────────────────

/// Compute the raw-mode variant of a termios configuration.
///
/// Clears canonical line editing and echo, keeps signal generation
/// (`ISIG`) so interrupt keys stay live, and sets `VMIN=1`/`VTIME=0`
/// so reads block for exactly one byte. Everything else — notably
/// output post-processing — is left as found.
fn make_raw(mut tios: libc::termios) -> libc::termios {
    tios.c_lflag &= !(libc::ICANON | libc::ECHO);
    tios.c_lflag |= libc::ISIG;
    tios.c_cc[libc::VMIN] = 1;
    tios.c_cc[libc::VTIME] = 0;
    tios
}

// ─── Tty ────────────────────────────────────────────────────────────────────

/// Handle on the controlling terminal with RAII mode restoration.
///
/// Call [`enter_raw`](Self::enter_raw) to switch the terminal into raw
/// input mode. The original mode is restored when the handle is
/// dropped — on quit, end of input, error return, or panic.
///
/// # Example
///
/// ```no_run
/// use least_term::tty::Tty;
///
/// let mut tty = Tty::open()?;
/// tty.enter_raw()?;
/// // ... poll keys, read escape sequences ...
/// // Original mode is restored automatically on drop.
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct Tty {
    /// The `/dev/tty` device, open for reading.
    file: File,
    /// Original termios saved before entering raw mode.
    original_termios: Option<libc::termios>,
}

impl Tty {
    /// Open the controlling terminal.
    ///
    /// Does **not** change its mode — call
    /// [`enter_raw`](Self::enter_raw) for that.
    ///
    /// # Errors
    ///
    /// Returns an error if `/dev/tty` cannot be opened (no controlling
    /// terminal).
    pub fn open() -> io::Result<Self> {
        let file = File::open("/dev/tty")?;
        Ok(Self {
            file,
            original_termios: None,
        })
    }

    /// Switch the terminal into raw input mode.
    ///
    /// Saves the current configuration (both in the struct and in the
    /// global backup the panic hook reads), then applies
    /// [`make_raw`]'s flag set with `TCSANOW`. Idempotent: entering
    /// raw mode twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal attributes cannot be queried
    /// or applied.
    pub fn enter_raw(&mut self) -> io::Result<()> {
        if self.original_termios.is_some() {
            return Ok(());
        }

        install_panic_hook();

        let fd = self.file.as_raw_fd();

        let original = unsafe {
            let mut tios: libc::termios = std::mem::zeroed();
            if libc::tcgetattr(fd, &raw mut tios) != 0 {
                return Err(io::Error::last_os_error());
            }
            tios
        };

        self.original_termios = Some(original);
        if let Ok(mut guard) = TERMIOS_BACKUP.lock() {
            *guard = Some((fd, original));
        }

        let raw_mode = make_raw(original);
        unsafe {
            if libc::tcsetattr(fd, libc::TCSANOW, &raw const raw_mode) != 0 {
                return Err(io::Error::last_os_error());
            }
        }

        Ok(())
    }

    /// Reinstate the terminal mode saved by [`enter_raw`](Self::enter_raw).
    ///
    /// Idempotent: restoring an already-restored (or never-raw)
    /// terminal is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the saved attributes cannot be applied.
    pub fn restore(&mut self) -> io::Result<()> {
        if let Some(ref original) = self.original_termios {
            let fd = self.file.as_raw_fd();

            unsafe {
                if libc::tcsetattr(fd, libc::TCSANOW, original) != 0 {
                    return Err(io::Error::last_os_error());
                }
            }

            // Clear the global backup — we've restored successfully.
            if let Ok(mut guard) = TERMIOS_BACKUP.lock() {
                *guard = None;
            }

            self.original_termios = None;
        }

        Ok(())
    }
}

impl Terminal for Tty {
    fn size(&mut self) -> io::Result<Size> {
        let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
        let result =
            unsafe { libc::ioctl(self.file.as_raw_fd(), libc::TIOCGWINSZ, &raw mut ws) };

        if result != 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(Size {
            cols: ws.ws_col,
            rows: ws.ws_row,
        })
    }

    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<u8>> {
        let millis = i32::try_from(timeout.as_millis()).unwrap_or(i32::MAX);

        let ready = unsafe {
            let mut pfd = libc::pollfd {
                fd: self.file.as_raw_fd(),
                events: libc::POLLIN,
                revents: 0,
            };
            libc::poll(&raw mut pfd, 1, millis)
        };

        if ready < 0 {
            return Err(io::Error::last_os_error());
        }
        if ready == 0 {
            return Ok(None);
        }

        self.read_byte()
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = 0u8;
        let n = unsafe {
            libc::read(
                self.file.as_raw_fd(),
                (&raw mut byte).cast::<libc::c_void>(),
                1,
            )
        };

        if n < 0 {
            return Err(io::Error::last_os_error());
        }
        if n == 0 {
            return Ok(None);
        }

        Ok(Some(byte))
    }
}

impl Drop for Tty {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
