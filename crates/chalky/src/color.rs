//! Terminal color representations.
//!
//! This module offers a choice of [`Color`], i.e., the 16 named palette
//! entries, and [`TrueColor`], i.e., 24-bit RGB, as the two color
//! representations supported by terminals. Both can be wrapped as
//! [`Colorant`]s, which is what [`Chalk`](crate::Chalk) stores in its color
//! slots. The [`Layer`] determines whether a colorant is rendered as
//! foreground or background color.
use chalkytty::{Command, Control, Sgr};

use crate::error::{ColorFormatError, OutOfBoundsError};

// ====================================================================================================================
// Layer
// ====================================================================================================================

/// The targeted display layer: Foreground or background.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The foreground or text layer.
    #[default]
    Foreground,
    /// The background layer.
    Background,
}

impl Layer {
    /// Determine whether this layer is the foreground.
    pub const fn is_foreground(&self) -> bool {
        matches!(*self, Self::Foreground)
    }

    /// Determine whether this layer is the background.
    pub const fn is_background(&self) -> bool {
        matches!(*self, Self::Background)
    }

    /// Determine the offset for this layer.
    ///
    /// The offset is added to the SGR parameter values for foreground colors
    /// and therefore zero for [`Layer::Foreground`].
    pub const fn offset(&self) -> u8 {
        match *self {
            Self::Foreground => 0,
            Self::Background => 10,
        }
    }
}

// ====================================================================================================================
// Color
// ====================================================================================================================

/// The 16 named terminal colors.
///
/// The colors are ordered because they are ordered as palette entries, with
/// the eight base hues first and their bright versions second. Rust code
/// converts between palette indexes and variants with [`Color as
/// TryFrom<u8>`](enum.Color.html#impl-TryFrom%3Cu8%3E-for-Color) and [`u8 as
/// From<Color>`](enum.Color.html#impl-From%3CColor%3E-for-u8).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    #[default]
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Get an iterator over all colors in palette order.
    pub fn all() -> ColorIterator {
        ColorIterator::new()
    }

    /// Determine whether this color is bright.
    pub const fn is_bright(&self) -> bool {
        8 <= *self as u8
    }

    /// Get the base version of this color.
    ///
    /// If this color is bright, this method returns its non-bright version.
    /// Otherwise, it returns the same color.
    pub const fn to_base(&self) -> Color {
        Self::from_index(*self as u8 & 0x07)
    }

    /// Get the bright version of this color.
    ///
    /// If the color is not bright, this method returns its bright version.
    /// Otherwise, it returns the same color.
    pub const fn to_bright(&self) -> Color {
        Self::from_index(*self as u8 | 0x08)
    }

    /// Get the SGR parameter for this color on the given layer.
    ///
    /// Foreground colors use 30–37 and 90–97, background colors 40–47 and
    /// 100–107.
    pub const fn sgr(&self, layer: Layer) -> u8 {
        let base = if self.is_bright() { 90 } else { 30 };
        base + layer.offset() + self.to_base() as u8
    }

    /// Get this color's name.
    ///
    /// This method returns the human-readable name, e.g., `"bright green"` for
    /// [`Color::BrightGreen`].
    pub const fn name(&self) -> &'static str {
        use self::Color::*;

        match *self {
            Black => "black",
            Red => "red",
            Green => "green",
            Yellow => "yellow",
            Blue => "blue",
            Magenta => "magenta",
            Cyan => "cyan",
            White => "white",
            BrightBlack => "bright black",
            BrightRed => "bright red",
            BrightGreen => "bright green",
            BrightYellow => "bright yellow",
            BrightBlue => "bright blue",
            BrightMagenta => "bright magenta",
            BrightCyan => "bright cyan",
            BrightWhite => "bright white",
        }
    }

    // The index must be masked to 0..=15.
    const fn from_index(index: u8) -> Self {
        use self::Color::*;

        match index & 0x0f {
            0 => Black,
            1 => Red,
            2 => Green,
            3 => Yellow,
            4 => Blue,
            5 => Magenta,
            6 => Cyan,
            7 => White,
            8 => BrightBlack,
            9 => BrightRed,
            10 => BrightGreen,
            11 => BrightYellow,
            12 => BrightBlue,
            13 => BrightMagenta,
            14 => BrightCyan,
            _ => BrightWhite,
        }
    }
}

impl TryFrom<u8> for Color {
    type Error = OutOfBoundsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= 15 {
            Ok(Self::from_index(value))
        } else {
            Err(OutOfBoundsError::new(value, 0..=15))
        }
    }
}

impl From<Color> for u8 {
    fn from(value: Color) -> u8 {
        value as u8
    }
}

impl core::fmt::Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A helper for iterating over colors.
///
/// This iterator is fused, i.e., after returning `None` once, it will keep
/// returning `None`. This iterator also is exact, i.e., its `size_hint()`
/// returns the exact number of remaining items.
#[derive(Debug)]
pub struct ColorIterator {
    index: u8,
}

impl ColorIterator {
    fn new() -> Self {
        Self { index: 0 }
    }
}

impl Iterator for ColorIterator {
    type Item = Color;

    fn next(&mut self) -> Option<Self::Item> {
        if 16 <= self.index {
            None
        } else {
            let color = Color::from_index(self.index);
            self.index += 1;
            Some(color)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(16 - self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ColorIterator {}

impl core::iter::FusedIterator for ColorIterator {}

// ====================================================================================================================
// True Color
// ====================================================================================================================

/// A 24-bit RGB color.
///
/// Equality and hashing are by channel values, so that two true colors with
/// the same channels are interchangeable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TrueColor([u8; 3]);

impl TrueColor {
    /// Create a new true color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parse a hexadecimal color.
    ///
    /// This function accepts three or six hexadecimal digits, optionally
    /// preceded by a `#`. With three digits, each digit is doubled, i.e.,
    /// `#f80` is the same as `#ff8800`.
    ///
    /// # Errors
    ///
    /// This function returns [`ColorFormatError::UnexpectedLength`] if there
    /// are neither three nor six characters after the optional `#` and
    /// [`ColorFormatError::MalformedHex`] if any of them is not a hexadecimal
    /// digit.
    ///
    /// # Example
    ///
    /// ```
    /// # use chalky::TrueColor;
    /// assert_eq!(TrueColor::from_hex("#F00")?, TrueColor::new(255, 0, 0));
    /// assert_eq!(TrueColor::from_hex("ff0000")?, TrueColor::new(255, 0, 0));
    /// # Ok::<(), chalky::error::ColorFormatError>(())
    /// ```
    pub fn from_hex(s: &str) -> Result<Self, ColorFormatError> {
        fn digit(byte: u8) -> Result<u8, ColorFormatError> {
            match byte {
                b'0'..=b'9' => Ok(byte - b'0'),
                b'a'..=b'f' => Ok(byte - b'a' + 10),
                b'A'..=b'F' => Ok(byte - b'A' + 10),
                _ => Err(ColorFormatError::MalformedHex),
            }
        }

        let digits = s.strip_prefix('#').unwrap_or(s).as_bytes();
        let mut channels = [0_u8; 3];
        match digits.len() {
            3 => {
                for (channel, byte) in channels.iter_mut().zip(digits) {
                    *channel = digit(*byte)? * 17;
                }
            }
            6 => {
                for (channel, pair) in channels.iter_mut().zip(digits.chunks_exact(2)) {
                    if let [high, low] = *pair {
                        *channel = (digit(high)? << 4) | digit(low)?;
                    }
                }
            }
            _ => return Err(ColorFormatError::UnexpectedLength),
        }

        Ok(Self(channels))
    }

    /// Get the channel values.
    pub const fn channels(&self) -> [u8; 3] {
        self.0
    }

    /// Get the channel values as decimal text.
    ///
    /// The strings have no padding and hence can be embedded in an escape
    /// sequence as is.
    pub fn to_channels(&self) -> [String; 3] {
        self.0.map(|channel| channel.to_string())
    }
}

impl core::str::FromStr for TrueColor {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8; 3]> for TrueColor {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl From<[u8; 3]> for TrueColor {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<TrueColor> for [u8; 3] {
    fn from(value: TrueColor) -> Self {
        value.0
    }
}

impl core::fmt::Display for TrueColor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [r, g, b] = self.0;
        f.write_fmt(format_args!("#{:02x}{:02x}{:02x}", r, g, b))
    }
}

// ====================================================================================================================
// Colorant
// ====================================================================================================================

/// A colorant is either a named color or a true color.
///
/// Wherever chalky has a color slot, it stores a colorant, and both variants
/// are accepted uniformly thanks to the `From` conversions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Colorant {
    /// One of the 16 named colors.
    Ansi(Color),
    /// A 24-bit color.
    Rgb(TrueColor),
}

impl Colorant {
    /// Write the colorant's SGR parameters for the given layer with the given
    /// formatter.
    pub fn write_sgr_params(
        &self,
        layer: Layer,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match *self {
            Self::Ansi(ref c) => write!(f, "{}", c.sgr(layer)),
            Self::Rgb(ref c) => {
                let [r, g, b] = c.channels();
                write!(f, "{};2;{};{};{}", 38 + layer.offset(), r, g, b)
            }
        }
    }

    /// Provide a layer to make this colorant displayable.
    ///
    /// The result is an [`Sgr`] command that writes the corresponding ANSI
    /// escape sequence.
    pub const fn on(self, layer: Layer) -> LayeredColorant {
        LayeredColorant {
            layer,
            colorant: self,
        }
    }
}

impl From<Color> for Colorant {
    fn from(value: Color) -> Self {
        Self::Ansi(value)
    }
}

impl From<TrueColor> for Colorant {
    fn from(value: TrueColor) -> Self {
        Self::Rgb(value)
    }
}

/// A colorant with a layer.
///
/// This is the [`Sgr`] command for setting the foreground or background color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LayeredColorant {
    layer: Layer,
    colorant: Colorant,
}

impl LayeredColorant {
    /// Get the layer.
    pub const fn layer(&self) -> Layer {
        self.layer
    }

    /// Get the colorant.
    pub const fn colorant(&self) -> Colorant {
        self.colorant
    }
}

impl Command for LayeredColorant {}

impl Sgr for LayeredColorant {
    fn write_param(&self, out: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.colorant.write_sgr_params(self.layer, out)
    }
}

impl core::fmt::Display for LayeredColorant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(Control::CSI.as_str())?;
        self.write_param(f)?;
        f.write_str("m")
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_color() -> Result<(), OutOfBoundsError> {
        assert_eq!(Color::all().len(), 16);
        for (index, color) in Color::all().enumerate() {
            assert_eq!(usize::from(u8::from(color)), index);
            assert_eq!(Color::try_from(index as u8)?, color);
            assert_eq!(color.is_bright(), 8 <= index);
            assert_eq!(color.to_base().to_bright(), color.to_bright());
            assert!(!color.to_base().is_bright(), "{} has bright base", color);
        }

        assert_eq!(Color::BrightGreen.to_base(), Color::Green);
        assert_eq!(Color::Green.to_bright(), Color::BrightGreen);
        assert_eq!(Color::BrightMagenta.name(), "bright magenta");
        assert_eq!(
            Color::try_from(16),
            Err(OutOfBoundsError::new(16_u8, 0..=15))
        );
        Ok(())
    }

    #[test]
    fn test_color_sgr() {
        let foreground = Color::all()
            .map(|c| c.sgr(Layer::Foreground))
            .collect::<Vec<_>>();
        assert_eq!(
            foreground,
            vec![30, 31, 32, 33, 34, 35, 36, 37, 90, 91, 92, 93, 94, 95, 96, 97]
        );

        let background = Color::all()
            .map(|c| c.sgr(Layer::Background))
            .collect::<Vec<_>>();
        assert_eq!(
            background,
            vec![40, 41, 42, 43, 44, 45, 46, 47, 100, 101, 102, 103, 104, 105, 106, 107]
        );
    }

    #[test]
    fn test_from_hex() -> Result<(), ColorFormatError> {
        assert_eq!(TrueColor::from_hex("#F00")?.channels(), [255, 0, 0]);
        assert_eq!(TrueColor::from_hex("ff0000")?.channels(), [255, 0, 0]);
        assert_eq!(TrueColor::from_hex("#1e90Ff")?, TrueColor::new(30, 144, 255));
        assert_eq!("abc".parse::<TrueColor>()?, TrueColor::from_hex("aabbcc")?);

        assert_eq!(
            TrueColor::from_hex(""),
            Err(ColorFormatError::UnexpectedLength)
        );
        assert_eq!(
            TrueColor::from_hex("#"),
            Err(ColorFormatError::UnexpectedLength)
        );
        assert_eq!(
            TrueColor::from_hex("##fff"),
            Err(ColorFormatError::UnexpectedLength)
        );
        assert_eq!(
            TrueColor::from_hex("#ff00"),
            Err(ColorFormatError::UnexpectedLength)
        );
        assert_eq!(
            TrueColor::from_hex("#efg"),
            Err(ColorFormatError::MalformedHex)
        );
        assert_eq!(TrueColor::from_hex("é0"), Err(ColorFormatError::MalformedHex));
        Ok(())
    }

    #[test]
    fn test_true_color() {
        let color = TrueColor::new(7, 128, 255);
        assert_eq!(color.to_channels(), ["7", "128", "255"]);
        assert_eq!(format!("{}", color), "#0780ff");
        assert_eq!(<[u8; 3]>::from(color), [7, 128, 255]);
        assert_eq!(TrueColor::from([7, 128, 255]), color);
    }

    #[test]
    fn test_layered_colorant() {
        assert_eq!(
            format!("{}", Colorant::from(Color::Red).on(Layer::Foreground)),
            "\x1b[31m"
        );
        assert_eq!(
            format!("{}", Colorant::from(Color::BrightCyan).on(Layer::Background)),
            "\x1b[106m"
        );
        assert_eq!(
            format!("{}", Colorant::from(TrueColor::new(0, 9, 200)).on(Layer::Foreground)),
            "\x1b[38;2;0;9;200m"
        );
        assert_eq!(
            format!("{}", Colorant::from(TrueColor::new(255, 255, 1)).on(Layer::Background)),
            "\x1b[48;2;255;255;1m"
        );
    }

    proptest! {
        #[test]
        fn hex_accepts_six_digits(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), hash in any::<bool>()) {
            let text = format!("{}{:02x}{:02X}{:02x}", if hash { "#" } else { "" }, r, g, b);
            prop_assert_eq!(TrueColor::from_hex(&text), Ok(TrueColor::new(r, g, b)));
        }

        #[test]
        fn hex_doubles_three_digits(digits in "[0-9a-fA-F]{3}", hash in any::<bool>()) {
            let doubled: String = digits.chars().flat_map(|c| [c, c]).collect();
            let short = format!("{}{}", if hash { "#" } else { "" }, digits);
            prop_assert_eq!(TrueColor::from_hex(&short), TrueColor::from_hex(&doubled));
            prop_assert!(TrueColor::from_hex(&short).is_ok(), "{} rejected", short);
        }

        #[test]
        fn hex_rejects_other_lengths(digits in "[0-9a-f]{0,12}", hash in any::<bool>()) {
            prop_assume!(digits.len() != 3 && digits.len() != 6);
            let text = format!("{}{}", if hash { "#" } else { "" }, digits);
            prop_assert_eq!(TrueColor::from_hex(&text), Err(ColorFormatError::UnexpectedLength));
        }
    }
}
