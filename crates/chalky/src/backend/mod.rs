//! Backends that render chalks and control the terminal.
//!
//! A [`Backend`] offers the same capability surface no matter how a terminal
//! is controlled. [`AnsiBackend`] writes ANSI escape sequences, whereas
//! [`LegacyConsoleBackend`] calls into the legacy Windows console. Operations
//! a backend cannot perform are no-ops, and [`Backend::capabilities`] reports
//! which ones are real. Turning text plus styles into a decorated string is
//! the separate [`Render`] trait, since only escape sequences can be embedded
//! into a string. A backend exposes its renderer through
//! [`Backend::renderer`].
//!
//! Backends are created once per output stream and cached in a [`Registry`].

mod ansi;
mod legacy;
mod registry;

pub use ansi::{Ansi, AnsiBackend};
pub use legacy::{ConsoleState, LegacyConsoleBackend};
pub use registry::Registry;

use std::io::Result;
use std::time::Duration;

use crate::color::Colorant;
use crate::style::StyleSet;

/// A backend capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Clearing all or part of the screen.
    ClearScreen,
    /// Clearing all or part of the current line.
    ClearLine,
    /// Setting the window title.
    SetTitle,
    /// Resetting styles and colors.
    Reset,
    /// Hiding and showing the cursor.
    CursorVisibility,
    /// Reversing the video of the entire screen.
    ReverseVideo,
    /// Flashing the screen.
    Flash,
    /// Rendering chalks as text with escape sequences.
    Apply,
}

impl Capability {
    #[inline]
    const fn bits(&self) -> u8 {
        1 << *self as u8
    }
}

/// The set of capabilities supported by a backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Capabilities(u8);

impl Capabilities {
    /// No capabilities at all.
    pub const NONE: Capabilities = Capabilities(0);

    /// All capabilities.
    pub const ALL: Capabilities = Capabilities(0xff);

    /// Add the capability.
    pub const fn with(self, capability: Capability) -> Self {
        Self(self.0 | capability.bits())
    }

    /// Determine whether the capability is supported.
    pub const fn contains(&self, capability: Capability) -> bool {
        self.0 & capability.bits() != 0
    }
}

// ----------------------------------------------------------------------------------------------------------

/// Render text with styles and colors.
pub trait Render {
    /// Decorate the text.
    ///
    /// The result starts with one escape sequence per style, followed by the
    /// background and then the foreground color if present, the text, and a
    /// final reset. Implementations only compute the string and never write
    /// to the terminal.
    fn apply(
        &self,
        text: &str,
        style: StyleSet,
        background: Option<Colorant>,
        foreground: Option<Colorant>,
    ) -> String;
}

/// A terminal backend.
///
/// Clear operations take two flags, `keep_head` and `keep_tail`. Keeping the
/// head clears from the cursor to the end, keeping the tail clears from the
/// start to the cursor, keeping neither clears everything, and keeping both
/// does nothing at all.
pub trait Backend: Send {
    /// Get the supported capabilities.
    fn capabilities(&self) -> Capabilities;

    /// Clear (part of) the screen, optionally moving the cursor home.
    fn clear_screen(&mut self, reset_position: bool, keep_head: bool, keep_tail: bool)
        -> Result<()>;

    /// Clear (part of) the current line.
    fn clear_line(&mut self, keep_head: bool, keep_tail: bool) -> Result<()>;

    /// Set the window title.
    fn set_title(&mut self, title: &str) -> Result<()>;

    /// Reset styles and colors.
    fn reset(&mut self) -> Result<()>;

    /// Make the cursor invisible.
    fn hide_cursor(&mut self) -> Result<()>;

    /// Make the cursor visible again.
    fn show_cursor(&mut self) -> Result<()>;

    /// Turn on reverse video for the entire screen.
    fn reverse_video(&mut self) -> Result<()>;

    /// Turn off reverse video for the entire screen.
    fn normal_video(&mut self) -> Result<()>;

    /// Flash the screen.
    ///
    /// The default implementation turns on reverse video, blocks the calling
    /// thread for the given duration, and then turns reverse video off again.
    /// It does nothing if the backend cannot reverse video.
    fn flash(&mut self, duration: Duration) -> Result<()> {
        if !self.capabilities().contains(Capability::ReverseVideo) {
            return Ok(());
        }

        self.reverse_video()?;
        std::thread::sleep(duration);
        self.normal_video()
    }

    /// Get the renderer, if the backend can embed styles into strings.
    fn renderer(&self) -> Option<&dyn Render>;
}

// ----------------------------------------------------------------------------------------------------------

/// The kind of backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Pick the legacy console for Windows consoles that cannot process ANSI
    /// escape sequences and ANSI escapes otherwise.
    #[default]
    Auto,
    Ansi,
    LegacyConsole,
}

impl BackendKind {
    /// Resolve automatic selection for the given stream.
    pub fn resolve(self, stream: chalkytty::console::Stream) -> Self {
        match self {
            Self::Auto => {
                if chalkytty::console::supports_ansi(stream) {
                    Self::Ansi
                } else {
                    Self::LegacyConsole
                }
            }
            kind => kind,
        }
    }

    /// Get a human-readable name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Auto => "auto",
            Self::Ansi => "ansi",
            Self::LegacyConsole => "legacy console",
        }
    }
}
