//! # least-pager — Pager core for least
//!
//! This crate contains the parts of the pager that are independent of a
//! real terminal:
//!
//! - **[`source`]** — `LineSource`, lazy line reads into a reused buffer
//! - **[`pager`]** — the render/input loop: fill, wait, advance, backfill
//! - **[`error`]** — the session's fatal-error taxonomy and success outcome
//!
//! The loop is generic over `least-term`'s `Terminal` trait and any
//! `Write` screen, so every behavior here is exercised against scripted
//! fakes in the unit tests.

pub mod error;
pub mod pager;
pub mod source;
