//! # Chalky
//!
//! Chalky styles terminal text. Its main abstraction, [`Chalk`], is a
//! composable value that combines text [`Style`]s with an optional foreground
//! and an optional background color. Applying a chalk to a string wraps the
//! string in ANSI escape sequences and a trailing reset.
//!
//!
//! ## 1. Overview
//!
//!   * The [`color`] module models **terminal colors**: the 16 named
//!     [`Color`]s and 24-bit [`TrueColor`]s, both of which fit into any
//!     [`Colorant`] slot.
//!   * The [`style`] module defines **text attributes** with [`Style`] and sets
//!     thereof with [`StyleSet`].
//!   * [`Chalk`] **composes** styles and colors with `&`. The right operand's
//!     colors win.
//!   * [`Chain`] is a **fluent builder** for chalks, and the [`shortcuts`]
//!     module has ready-made chalks for every color and style.
//!   * The [`backend`] module **renders** chalks and **controls** the terminal
//!     with ANSI escape sequences or, on older versions of Windows, the legacy
//!     console. The [`context`] module determines which backend to use and
//!     whether styling is disabled altogether.
//!
//!
//! ## 2. Styling Text
//!
//! Compose chalks from shortcuts, build them with a chain, or both:
//!
//! ```
//! # use chalky::Chain;
//! # use chalky::backend::Ansi;
//! # use chalky::context::Context;
//! # use chalky::shortcuts::{bg, fg, sty};
//! let loud = sty::BOLD & fg::RED;
//! let calm = Chain::new().underline().bg().white().build();
//! let chalk = loud & calm;
//!
//! let text = Context::default().apply_with(&Ansi, &chalk, "hi");
//! assert_eq!(text, "\x1b[1m\x1b[4m\x1b[47m\x1b[31mhi\x1b[0m");
//! ```
//!
//! [`Chalk::apply`] renders with the backend for standard output. If the
//! application calls [`configure(true)`](configure), it returns text without
//! any escape sequences.
//!
//!
//! ## 3. Controlling the Terminal
//!
//! [`clear_screen`], [`clear_line`], and [`set_title`] operate on standard
//! output. For more, lock the stream's [`Backend`](backend::Backend) from the
//! [`Registry`](backend::Registry).

pub mod backend;
pub mod caps;
pub mod chain;
pub mod chalk;
pub mod color;
pub mod context;
pub mod error;
pub mod shortcuts;
pub mod style;
mod util;

pub use chain::Chain;
pub use chalk::Chalk;
pub use color::{Color, Colorant, Layer, TrueColor};
pub use context::{configure, is_disabled};
pub use style::{Style, StyleSet};

use std::io::Result;
use std::sync::PoisonError;

use backend::{BackendKind, Registry};
use chalkytty::console::Stream;

fn with_stdout<R>(op: impl FnOnce(&mut dyn backend::Backend) -> Result<R>) -> Result<R> {
    let backend = Registry::global().backend(Stream::Stdout, BackendKind::Auto);
    let mut backend = backend.lock().unwrap_or_else(PoisonError::into_inner);
    op(&mut **backend)
}

/// Clear the screen of standard output.
///
/// Keeping the head clears from the cursor to the end, keeping the tail clears
/// from the start to the cursor, keeping neither clears everything, and keeping
/// both does nothing. If `reset_position` is set, the cursor moves home after
/// clearing.
pub fn clear_screen(reset_position: bool, keep_head: bool, keep_tail: bool) -> Result<()> {
    with_stdout(|backend| backend.clear_screen(reset_position, keep_head, keep_tail))
}

/// Clear the current line of standard output.
pub fn clear_line(keep_head: bool, keep_tail: bool) -> Result<()> {
    with_stdout(|backend| backend.clear_line(keep_head, keep_tail))
}

/// Set the title of standard output's window.
pub fn set_title(title: &str) -> Result<()> {
    with_stdout(|backend| backend.set_title(title))
}
