//! # Chalky 🖍 Tty
//!
//! This crate provides the **terminal plumbing** underneath
//! [chalky](https://crates.io/crates/chalky). Its only dependency is the
//! low-level crate enabling system calls on Windows, i.e.,
//! [`windows-sys`](https://crates.io/crates/windows-sys).
//!
//! It has two parts:
//!
//!   * The [`cmd`] module is a small **library of [`Command`]s**, i.e., values
//!     whose [`Display`](std::fmt::Display) implementation writes an ANSI
//!     escape sequence. It covers erasing (parts of) the screen and the
//!     current line, moving and hiding the cursor, reverse video, the window
//!     title, and resetting text styles. Commands that select graphic
//!     renditions also implement [`Sgr`].
//!   * The [`console`] module provides access to the **legacy console**, i.e.,
//!     the attribute-based Windows console API that predates support for ANSI
//!     escape sequences. On other platforms, opening a console fails with
//!     [`ErrorKind::ConsoleUnavailable`](err::ErrorKind::ConsoleUnavailable).
//!
//!
//! # Example
//!
//! Executing a command is as simple as writing its display:
//! ```
//! # use chalkytty::cmd::{EraseScreen, ClearMode, MoveTo};
//! let clear = format!("{}{}", EraseScreen(ClearMode::All), MoveTo::HOME);
//! assert_eq!(clear, "\x1b[2J\x1b[1;1H");
//! ```
//!
//! Commands with arguments that may be invalid validate them upon creation:
//! ```
//! # use chalkytty::cmd::MoveTo;
//! # use chalkytty::err::ErrorKind;
//! assert_eq!(MoveTo::new(0, 5).unwrap_err().kind(), ErrorKind::InvalidCursorPosition);
//! assert_eq!(format!("{}", MoveTo::new(3, 5)?), "\x1b[3;5H");
//! # Ok::<(), chalkytty::err::Error>(())
//! ```

mod api;
pub mod cmd;
pub mod console;
pub mod err;
mod sys;

pub use api::{Command, Control, Sgr};
