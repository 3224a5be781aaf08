//! Utility module with chalky's errors.

/// An out-of-bounds error.
///
/// This error indicates an index value that is out of bounds for some range.
/// Chalky uses it for the index values `0..=15` of [`Color`](crate::Color).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: core::ops::RangeInclusive<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new(value: impl Into<usize>, expected: core::ops::RangeInclusive<usize>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

impl core::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "{} does not fit into range {}..={}",
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl std::error::Error for OutOfBoundsError {}

// ====================================================================================================================

/// An invalid hexadecimal color format.
///
/// [`TrueColor::from_hex`](crate::TrueColor::from_hex) accepts three or six
/// hexadecimal digits, optionally preceded by a `#`. Anything else is an
/// invalid color format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format with neither three nor six characters after the optional
    /// `#`. For example, `#00` is missing a hexadecimal digit.
    UnexpectedLength,

    /// A color format with the expected length but characters other than
    /// hexadecimal digits. For example, `#efg` has a malformed third
    /// digit.
    MalformedHex,
}

impl core::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use ColorFormatError::*;

        match *self {
            UnexpectedLength => {
                f.write_str("hex color should have 3 or 6 digits, optionally preceded by `#`")
            }
            MalformedHex => f.write_str("hex color contains characters other than 0-9, a-f, A-F"),
        }
    }
}

impl std::error::Error for ColorFormatError {}
