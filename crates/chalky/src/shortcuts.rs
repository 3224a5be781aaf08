//! Ready-made chalks.
//!
//! The [`fg`], [`bg`], and [`sty`] modules hold one constant chalk for every
//! foreground color, background color, and style, respectively. They compose
//! with `&`:
//!
//! ```
//! # use chalky::shortcuts::{bg, fg, sty};
//! let warning = sty::BOLD & fg::YELLOW & bg::BLACK;
//! assert!(!warning.is_default());
//! ```

use crate::chalk::Chalk;
use crate::color::{Color, Colorant, Layer, TrueColor};
use crate::error::ColorFormatError;
use crate::style::Style;

const fn foreground(color: Color) -> Chalk {
    Chalk::new().with_colorant(Colorant::Ansi(color), Layer::Foreground)
}

const fn background(color: Color) -> Chalk {
    Chalk::new().with_colorant(Colorant::Ansi(color), Layer::Background)
}

macro_rules! color_constants {
    ($maker:ident; $($name:ident => $color:ident),* $(,)?) => {
        $(
            pub const $name: Chalk = super::$maker(Color::$color);
        )*
    };
}

/// Foreground colors.
pub mod fg {
    use super::*;

    color_constants!(foreground;
        BLACK => Black,
        RED => Red,
        GREEN => Green,
        YELLOW => Yellow,
        BLUE => Blue,
        MAGENTA => Magenta,
        CYAN => Cyan,
        WHITE => White,
        BRIGHT_BLACK => BrightBlack,
        BRIGHT_RED => BrightRed,
        BRIGHT_GREEN => BrightGreen,
        BRIGHT_YELLOW => BrightYellow,
        BRIGHT_BLUE => BrightBlue,
        BRIGHT_MAGENTA => BrightMagenta,
        BRIGHT_CYAN => BrightCyan,
        BRIGHT_WHITE => BrightWhite,
    );
}

/// Background colors.
pub mod bg {
    use super::*;

    color_constants!(background;
        BLACK => Black,
        RED => Red,
        GREEN => Green,
        YELLOW => Yellow,
        BLUE => Blue,
        MAGENTA => Magenta,
        CYAN => Cyan,
        WHITE => White,
        BRIGHT_BLACK => BrightBlack,
        BRIGHT_RED => BrightRed,
        BRIGHT_GREEN => BrightGreen,
        BRIGHT_YELLOW => BrightYellow,
        BRIGHT_BLUE => BrightBlue,
        BRIGHT_MAGENTA => BrightMagenta,
        BRIGHT_CYAN => BrightCyan,
        BRIGHT_WHITE => BrightWhite,
    );
}

/// Styles.
pub mod sty {
    use super::*;

    pub const RESET: Chalk = Chalk::new().with_style(Style::Reset);
    pub const BOLD: Chalk = Chalk::new().with_style(Style::Bold);
    pub const DIM: Chalk = Chalk::new().with_style(Style::Dim);
    pub const ITALIC: Chalk = Chalk::new().with_style(Style::Italic);
    pub const UNDERLINE: Chalk = Chalk::new().with_style(Style::Underline);
    pub const SLOW_BLINK: Chalk = Chalk::new().with_style(Style::SlowBlink);
    pub const RAPID_BLINK: Chalk = Chalk::new().with_style(Style::RapidBlink);
    pub const REVERSED: Chalk = Chalk::new().with_style(Style::Reversed);
    pub const CONCEAL: Chalk = Chalk::new().with_style(Style::Conceal);
    pub const STRIKETHROUGH: Chalk = Chalk::new().with_style(Style::Strikethrough);
    pub const NORMAL: Chalk = Chalk::new().with_style(Style::Normal);
}

/// Create a chalk with the true color on the given layer.
pub const fn rgb(r: u8, g: u8, b: u8, layer: Layer) -> Chalk {
    Chalk::new().with_colorant(Colorant::Rgb(TrueColor::new(r, g, b)), layer)
}

/// Create a chalk with the hexadecimal color on the given layer.
///
/// # Errors
///
/// This function fails if the string is not a valid three- or six-digit
/// hexadecimal color.
pub fn hex(s: &str, layer: Layer) -> Result<Chalk, ColorFormatError> {
    Ok(Chalk::new().with_color(TrueColor::from_hex(s)?, layer))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::backend::Ansi;
    use crate::context::Context;

    #[test]
    fn test_constants() {
        assert_eq!(fg::RED.foreground(), Some(Color::Red.into()));
        assert_eq!(fg::RED.background(), None);
        assert_eq!(bg::BRIGHT_MAGENTA.background(), Some(Color::BrightMagenta.into()));
        assert_eq!(fg::BRIGHT_MAGENTA.foreground(), Some(Color::BrightMagenta.into()));
        assert!(sty::STRIKETHROUGH.style().contains(Style::Strikethrough));
        assert_eq!(sty::NORMAL.style().len(), 1);
    }

    #[test]
    fn test_helpers() -> Result<(), ColorFormatError> {
        assert_eq!(
            rgb(255, 0, 0, Layer::Foreground),
            hex("#F00", Layer::Foreground)?
        );
        assert_eq!(
            hex("ff0000", Layer::Background)?.background(),
            Some(TrueColor::new(255, 0, 0).into())
        );
        assert_eq!(hex("#12", Layer::Background), Err(ColorFormatError::UnexpectedLength));
        Ok(())
    }

    #[test]
    fn test_rendering() {
        let chalk = (sty::BOLD & fg::RED) & (sty::UNDERLINE & bg::WHITE);
        let text = Context::default().apply_with(&Ansi, &chalk, "hi");
        assert_eq!(text, "\x1b[1m\x1b[4m\x1b[47m\x1b[31mhi\x1b[0m");
    }
}
