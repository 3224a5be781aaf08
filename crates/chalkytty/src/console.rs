//! Access to the legacy console.
//!
//! Before Windows 10 version 1511, the Windows console did not process ANSI
//! escape sequences. Instead, programs changed the console's appearance by
//! calling into the console API, which models text attributes as a packed
//! 16-bit word and offers functions for filling cells, moving the cursor, and
//! setting the title. This module exposes the handful of those functions that
//! are needed for styling text and clearing the screen through the [`Device`]
//! trait, with [`Console`] as the native implementation.
//!
//! On platforms other than Windows, [`Console::open`] always fails with
//! [`ErrorKind::ConsoleUnavailable`](crate::err::ErrorKind::ConsoleUnavailable)
//! and [`supports_ansi`] always returns `true`.

use std::io::Result;

use crate::sys::RawConsole;

/// An output stream of the current process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stream {
    /// Standard output.
    #[default]
    Stdout,
    /// Standard error.
    Stderr,
}

impl Stream {
    /// Get a human-readable name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

/// A 0-indexed cell position in a console screen buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    pub column: u16,
    pub row: u16,
}

impl Coord {
    /// Create a new coordinate.
    pub const fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }
}

/// A snapshot of a console screen buffer's state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScreenInfo {
    /// The number of columns of the screen buffer.
    pub columns: u16,
    /// The number of rows of the screen buffer.
    pub rows: u16,
    /// The cursor position.
    pub cursor: Coord,
    /// The position of the visible window's top-left corner.
    pub window: Coord,
    /// The current text attributes.
    pub attributes: u16,
}

impl ScreenInfo {
    /// Get the number of cells in the screen buffer.
    pub const fn cells(&self) -> u32 {
        self.columns as u32 * self.rows as u32
    }

    /// Get the number of cells before the cursor.
    pub const fn cells_before_cursor(&self) -> u32 {
        self.cursor.row as u32 * self.columns as u32 + self.cursor.column as u32
    }
}

/// A legacy console device.
///
/// All methods are fallible, since they ultimately call into the operating
/// system.
pub trait Device: Send {
    /// Read the current screen buffer state.
    fn screen_info(&self) -> Result<ScreenInfo>;

    /// Set the attributes for subsequently written text.
    fn set_attributes(&mut self, attributes: u16) -> Result<()>;

    /// Fill `length` cells starting at `origin` with blanks in the given
    /// attributes, returning the number of cells actually filled.
    fn fill(&mut self, origin: Coord, length: u32, attributes: u16) -> Result<u32>;

    /// Move the cursor.
    fn set_cursor_position(&mut self, position: Coord) -> Result<()>;

    /// Show or hide the cursor.
    fn set_cursor_visibility(&mut self, visible: bool) -> Result<()>;

    /// Set the window title.
    fn set_title(&mut self, title: &str) -> Result<()>;
}

/// The native legacy console.
#[derive(Debug)]
pub struct Console {
    inner: RawConsole,
}

impl Console {
    /// Open the legacy console for the given stream.
    ///
    /// # Errors
    ///
    /// This function fails if the platform has no legacy console, the stream
    /// has been redirected, or the process has no console.
    pub fn open(stream: Stream) -> Result<Self> {
        Ok(Self {
            inner: RawConsole::open(stream)?,
        })
    }
}

impl Device for Console {
    fn screen_info(&self) -> Result<ScreenInfo> {
        self.inner.screen_info()
    }

    fn set_attributes(&mut self, attributes: u16) -> Result<()> {
        self.inner.set_attributes(attributes)
    }

    fn fill(&mut self, origin: Coord, length: u32, attributes: u16) -> Result<u32> {
        self.inner.fill(origin, length, attributes)
    }

    fn set_cursor_position(&mut self, position: Coord) -> Result<()> {
        self.inner.set_cursor_position(position)
    }

    fn set_cursor_visibility(&mut self, visible: bool) -> Result<()> {
        self.inner.set_cursor_visibility(visible)
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        self.inner.set_title(title)
    }
}

/// Determine whether the stream processes ANSI escape sequences.
///
/// If the stream is a legacy console, this function tries to enable virtual
/// terminal processing and returns whether that succeeded. Otherwise, the
/// stream is a terminal that processes ANSI escape sequences or has been
/// redirected, and this function returns `true`.
pub fn supports_ansi(stream: Stream) -> bool {
    match RawConsole::open(stream) {
        Ok(console) => console.enable_virtual_terminal().is_ok(),
        Err(_) => true,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_screen_info() {
        let info = ScreenInfo {
            columns: 80,
            rows: 25,
            cursor: Coord::new(5, 2),
            window: Coord::default(),
            attributes: 0x07,
        };

        assert_eq!(info.cells(), 2_000);
        assert_eq!(info.cells_before_cursor(), 165);
    }

    #[cfg(not(target_family = "windows"))]
    #[test]
    fn test_no_legacy_console() {
        let error = Console::open(Stream::Stdout).unwrap_err();
        assert_eq!(error.kind(), std::io::ErrorKind::Unsupported);
        assert!(supports_ansi(Stream::Stdout));
        assert!(supports_ansi(Stream::Stderr));
    }
}
