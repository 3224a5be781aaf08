//! A library of terminal commands.
//!
//! This module provides straight-forward struct and enum types that implement
//! the [`Command`](crate::Command) trait and, where needed, also the [`Sgr`]
//! trait. Organized
//! by topic, it covers the following commands:
//!
//!   * Window title management:
//!       * [`SetWindowTitle`]
//!   * Screen management:
//!       * [`EraseScreen`] with a [`ClearMode`]
//!       * [`EnableReverseMode`] and [`DisableReverseMode`]
//!   * Cursor management:
//!       * [`HideCursor`] and [`ShowCursor`]
//!       * [`MoveTo`]
//!   * Managing content:
//!       * [`EraseLine`] with a [`ClearMode`]
//!   * Styling content:
//!       * [`ResetStyle`]
//!
//! Most commands are implemented by zero-sized unit structs. Commands that
//! require arguments store them. [`MoveTo`] validates its arguments upon
//! creation, so that an invalid position never makes it into an escape
//! sequence.
//!
//!
//! # Example
//!
//! ```
//! # use chalkytty::cmd::{ClearMode, EraseLine, HideCursor, SetWindowTitle};
//! assert_eq!(format!("{}", EraseLine(ClearMode::ToEnd)), "\x1b[0K");
//! assert_eq!(format!("{}", HideCursor), "\x1b[?25l");
//! assert_eq!(
//!     format!("{}", SetWindowTitle::new("Wow!")),
//!     "\x1b]2;Wow!\x07"
//! );
//! ```

use crate::err::{Error, ErrorKind};
use crate::{Control, Sgr};

macro_rules! declare_unit_struct {
    ($name:ident) => {
        #[doc = concat!("The unit `",stringify!($name),"` command.")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name;
    };
}

macro_rules! implement_command {
    ($name:ident : $selfish:ident ; $output:ident $body:block) => {
        impl $crate::Command for $name {}

        impl ::core::fmt::Display for $name {
            #[inline]
            fn fmt(&$selfish, $output: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $body
            }
        }
    };
}

macro_rules! define_unit_command {
    ($name:ident, $ansi:tt) => {
        declare_unit_struct!($name);
        implement_command!($name: self; f { f.write_str($ansi) });
    };
}

macro_rules! implement_sgr {
    ($name:ident : $selfish:ident ; $output:ident $body:block) => {
        impl $crate::Command for $name {}

        impl $crate::Sgr for $name {
            #[inline]
            fn write_param(&$selfish, $output: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $body
            }
        }

        impl ::core::fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::Control::CSI.as_str())?;
                self.write_param(f)?;
                f.write_str("m")
            }
        }
    };
}

macro_rules! define_unit_sgr {
    ($name:ident, $ansi:tt) => {
        declare_unit_struct!($name);
        implement_sgr!($name: self; f { f.write_str($ansi) });
    };
}

macro_rules! define_erase {
    ($name:ident, $region:literal, $suffix:literal) => {
        #[doc = concat!("The dynamic `", stringify!($name), "(ClearMode)` command.")]
        ///
        #[doc = concat!("This command erases (part of) the ", $region, ".")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name(pub ClearMode);

        implement_command!($name: self; f {
            f.write_str($crate::Control::CSI.as_str())?;
            <_ as ::core::fmt::Display>::fmt(&(self.0 as u8), f)?;
            f.write_str($suffix)
        });
    };
}

// ====================================== Library ======================================

// --------------------------------- Window Management ---------------------------------

/// The dynamic `SetWindowTitle(String)` command.
///
/// The title is written as is, i.e., as UTF-8, and terminated with `BEL`. This
/// command cannot be copied, only cloned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetWindowTitle(String);

impl SetWindowTitle {
    /// Create a new command to set the window title.
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self(title.into())
    }

    /// Get the title.
    pub fn title(&self) -> &str {
        self.0.as_str()
    }
}

implement_command!(SetWindowTitle: self; f {
    f.write_str(Control::OSC.as_str())?;
    f.write_str("2;")?;
    f.write_str(self.0.as_str())?;
    f.write_str(Control::BEL.as_str())
});

// --------------------------------- Screen Management ---------------------------------

/// The extent of an erase command.
///
/// The discriminant is the parameter of the ANSI escape sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ClearMode {
    /// Erase from the cursor to the end, keeping the head.
    ToEnd = 0,
    /// Erase from the start to the cursor, keeping the tail.
    ToStart = 1,
    /// Erase everything.
    All = 2,
}

impl ClearMode {
    /// Determine the clear mode that keeps the head, the tail, or neither.
    ///
    /// This function returns `None` if both head and tail are to be kept, since
    /// there is nothing left to erase.
    pub const fn from_keep(keep_head: bool, keep_tail: bool) -> Option<Self> {
        match (keep_head, keep_tail) {
            (true, true) => None,
            (true, false) => Some(Self::ToEnd),
            (false, true) => Some(Self::ToStart),
            (false, false) => Some(Self::All),
        }
    }
}

define_erase!(EraseScreen, "screen", "J");

define_unit_command!(EnableReverseMode, "\x1b[?5h");
define_unit_command!(DisableReverseMode, "\x1b[?5l");

// --------------------------------- Cursor Management ---------------------------------

define_unit_command!(HideCursor, "\x1b[?25l");
define_unit_command!(ShowCursor, "\x1b[?25h");

/// The dynamic `MoveTo(row, column)` command.
///
/// Rows and columns are 1-indexed. Since the constructor rejects positions
/// with a row or column less than one, a `MoveTo` always writes a valid escape
/// sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveTo {
    row: u32,
    column: u32,
}

impl MoveTo {
    /// The command to move the cursor to the top-left corner.
    pub const HOME: MoveTo = MoveTo { row: 1, column: 1 };

    /// Create a new command to move the cursor to the 1-indexed position.
    ///
    /// # Errors
    ///
    /// This function returns an error of kind
    /// [`ErrorKind::InvalidCursorPosition`] if either the row or the column is
    /// zero or negative, or does not fit into a `u32`.
    pub fn new(row: i64, column: i64) -> Result<Self, Error> {
        match (u32::try_from(row), u32::try_from(column)) {
            (Ok(row), Ok(column)) if 0 < row && 0 < column => Ok(Self { row, column }),
            _ => Err(ErrorKind::InvalidCursorPosition.into()),
        }
    }

    /// Get the row.
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Get the column.
    pub const fn column(&self) -> u32 {
        self.column
    }
}

implement_command!(MoveTo: self; f {
    f.write_str(Control::CSI.as_str())?;
    <_ as ::core::fmt::Display>::fmt(&self.row, f)?;
    f.write_str(";")?;
    <_ as ::core::fmt::Display>::fmt(&self.column, f)?;
    f.write_str("H")
});

// -------------------------------- Content Management ---------------------------------

define_erase!(EraseLine, "current line", "K");

// --------------------------------- Style Management ----------------------------------

define_unit_sgr!(ResetStyle, "0");

// =====================================================================================
