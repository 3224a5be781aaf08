//! A fluent builder for chalks.
//!
//! [`Chain`] assembles a [`Chalk`] one selector at a time. Color selectors
//! target the foreground until [`Chain::bg`] switches to the background, and
//! [`Chain::fg`] switches back. Since every method consumes the chain, a
//! finished chain cannot be used again. [`Chain::finish`] hands out a fresh
//! chain together with the chalk.
//!
//!
//! # Example
//!
//! ```
//! # use chalky::{Chain, Color, Style};
//! let chalk = Chain::new().bold().red().bg().white().build();
//! assert!(chalk.style().contains(Style::Bold));
//! assert_eq!(chalk.foreground(), Some(Color::Red.into()));
//! assert_eq!(chalk.background(), Some(Color::White.into()));
//! ```

use core::ops::{Add, BitAnd};

use crate::chalk::Chalk;
use crate::color::{Color, Colorant, Layer, TrueColor};
use crate::error::ColorFormatError;
use crate::style::Style;

macro_rules! style_selectors {
    ($($method:ident => $style:ident),* $(,)?) => {
        $(
            #[doc = concat!("Add [`Style::", stringify!($style), "`].")]
            #[must_use]
            pub fn $method(self) -> Self {
                self.style(Style::$style)
            }
        )*
    };
}

macro_rules! color_selectors {
    ($($method:ident => $color:ident),* $(,)?) => {
        $(
            #[doc = concat!("Select [`Color::", stringify!($color), "`] for the targeted layer.")]
            #[must_use]
            pub fn $method(self) -> Self {
                self.color(Color::$color)
            }
        )*
    };
}

/// A consuming builder for chalks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Chain {
    chalk: Chalk,
    background: bool,
}

impl Chain {
    /// Create a new, empty chain targeting the foreground.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the targeted layer.
    pub fn layer(&self) -> Layer {
        if self.background {
            Layer::Background
        } else {
            Layer::Foreground
        }
    }

    /// Add the style.
    #[must_use]
    pub fn style(self, style: Style) -> Self {
        Self {
            chalk: self.chalk.with_style(style),
            ..self
        }
    }

    /// Put the colorant into the targeted layer.
    #[must_use]
    pub fn color(self, color: impl Into<Colorant>) -> Self {
        let layer = self.layer();
        Self {
            chalk: self.chalk.with_color(color, layer),
            ..self
        }
    }

    /// Target the background with subsequent color selections.
    #[must_use]
    pub fn bg(self) -> Self {
        Self {
            background: true,
            ..self
        }
    }

    /// Target the foreground with subsequent color selections.
    #[must_use]
    pub fn fg(self) -> Self {
        Self {
            background: false,
            ..self
        }
    }

    /// Put the true color into the targeted layer.
    #[must_use]
    pub fn rgb(self, r: u8, g: u8, b: u8) -> Self {
        self.color(TrueColor::new(r, g, b))
    }

    /// Put the hexadecimal color into the targeted layer.
    ///
    /// # Errors
    ///
    /// This method fails if the string is not a valid three- or six-digit
    /// hexadecimal color.
    pub fn hex(self, s: &str) -> Result<Self, ColorFormatError> {
        Ok(self.color(TrueColor::from_hex(s)?))
    }

    /// Fold the chalk into this chain.
    #[must_use]
    pub fn and(self, chalk: Chalk) -> Self {
        Self {
            chalk: self.chalk & chalk,
            ..self
        }
    }

    style_selectors!(
        reset => Reset,
        bold => Bold,
        dim => Dim,
        italic => Italic,
        underline => Underline,
        slow_blink => SlowBlink,
        rapid_blink => RapidBlink,
        reversed => Reversed,
        conceal => Conceal,
        strikethrough => Strikethrough,
        normal => Normal,
    );

    color_selectors!(
        black => Black,
        red => Red,
        green => Green,
        yellow => Yellow,
        blue => Blue,
        magenta => Magenta,
        cyan => Cyan,
        white => White,
        bright_black => BrightBlack,
        bright_red => BrightRed,
        bright_green => BrightGreen,
        bright_yellow => BrightYellow,
        bright_blue => BrightBlue,
        bright_magenta => BrightMagenta,
        bright_cyan => BrightCyan,
        bright_white => BrightWhite,
    );

    /// Finish the chain and return the chalk.
    pub fn build(self) -> Chalk {
        self.chalk
    }

    /// Finish the chain and apply the chalk to the text.
    pub fn apply(self, text: &str) -> String {
        self.chalk.apply(text)
    }

    /// Finish the chain and return the chalk together with a fresh chain.
    pub fn finish(self) -> (Chalk, Chain) {
        (self.chalk, Chain::new())
    }
}

impl BitAnd<Chalk> for Chain {
    type Output = Chain;

    fn bitand(self, rhs: Chalk) -> Self::Output {
        self.and(rhs)
    }
}

impl BitAnd for Chain {
    type Output = Chain;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs.chalk)
    }
}

impl Add<Chalk> for Chain {
    type Output = Chain;

    fn add(self, rhs: Chalk) -> Self::Output {
        self.and(rhs)
    }
}

impl Add for Chain {
    type Output = Chain;

    fn add(self, rhs: Self) -> Self::Output {
        self.and(rhs.chalk)
    }
}

impl From<Chain> for Chalk {
    fn from(value: Chain) -> Self {
        value.build()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::backend::Ansi;
    use crate::context::Context;

    #[test]
    fn test_selectors() {
        let chalk = Chain::new()
            .bold()
            .underline()
            .bright_magenta()
            .bg()
            .cyan()
            .fg()
            .italic()
            .build();

        assert_eq!(
            chalk.style().iter().collect::<Vec<_>>(),
            vec![Style::Bold, Style::Italic, Style::Underline]
        );
        assert_eq!(chalk.foreground(), Some(Color::BrightMagenta.into()));
        assert_eq!(chalk.background(), Some(Color::Cyan.into()));
    }

    #[test]
    fn test_layer_flag() {
        let chain = Chain::new().bg();
        assert_eq!(chain.layer(), Layer::Background);
        let chain = chain.fg();
        assert_eq!(chain.layer(), Layer::Foreground);

        // Toggling alone changes no color.
        assert!(Chain::new().bg().fg().bg().build().is_default());
    }

    #[test]
    fn test_true_colors() -> Result<(), ColorFormatError> {
        let chalk = Chain::new().rgb(1, 2, 3).bg().hex("#F00")?.build();
        assert_eq!(chalk.foreground(), Some(TrueColor::new(1, 2, 3).into()));
        assert_eq!(chalk.background(), Some(TrueColor::new(255, 0, 0).into()));

        assert_eq!(
            Chain::new().hex("#ff00"),
            Err(ColorFormatError::UnexpectedLength)
        );
        assert_eq!(Chain::new().hex("xyz"), Err(ColorFormatError::MalformedHex));
        Ok(())
    }

    #[test]
    fn test_finish() {
        let (chalk, chain) = Chain::new().dim().green().bg().finish();
        assert!(chalk.style().contains(Style::Dim));
        assert_eq!(chain, Chain::new());
        assert_eq!(chain.layer(), Layer::Foreground);
        assert!(chain.build().is_default());
    }

    #[test]
    fn test_composition() {
        let base = Chain::new().bold().red();
        let extra = Chalk::new()
            .with_style(Style::Underline)
            .with_background(Color::White);

        let a = base.clone() & extra;
        let b = base & Chain::new().underline().bg().white();
        assert_eq!(a, b);
        assert_eq!(Chalk::from(a), Chain::new().bold().red().and(extra).build());
    }

    #[test]
    fn test_composition_with_plus() {
        let extra = Chalk::new()
            .with_style(Style::Underline)
            .with_background(Color::White);

        assert_eq!(
            Chain::new().bold().red() + extra,
            Chain::new().bold().red() & extra
        );
        assert_eq!(
            Chain::new().bold().red() + Chain::new().underline().bg().white(),
            Chain::new().bold().red() & Chain::new().underline().bg().white()
        );
    }

    #[test]
    fn test_bold_red_and_underline_white() {
        let chalk = Chain::new().bold().red().build() & Chain::new().underline().bg().white().build();
        let text = Context::default().apply_with(&Ansi, &chalk, "hi");
        assert_eq!(text, "\x1b[1m\x1b[4m\x1b[47m\x1b[31mhi\x1b[0m");
    }
}
