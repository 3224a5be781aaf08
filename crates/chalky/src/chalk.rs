//! Composable text styles.
//!
//! A [`Chalk`] is the value applied to text. Everything else in this crate
//! either builds chalks or renders them.

use core::ops::{Add, BitAnd};

use crate::color::{Colorant, Layer};
use crate::context::Context;
use crate::style::{Style, StyleSet};

/// A composable text style.
///
/// A chalk combines a set of [`Style`] attributes with an optional foreground
/// and an optional background [`Colorant`]. Chalks are immutable values.
/// Composing two chalks with `&` (or `+`) unions their styles, while each
/// color slot of the right operand overrides the left operand's slot if it is
/// set.
///
/// # Example
///
/// ```
/// # use chalky::{Chalk, Color, Style};
/// let bold_red = Chalk::new()
///     .with_style(Style::Bold)
///     .with_foreground(Color::Red);
/// let underlined = Chalk::new()
///     .with_style(Style::Underline)
///     .with_background(Color::White);
///
/// let chalk = bold_red & underlined;
/// assert!(chalk.style().contains(Style::Bold));
/// assert!(chalk.style().contains(Style::Underline));
/// assert_eq!(chalk.foreground(), Some(Color::Red.into()));
/// assert_eq!(chalk.background(), Some(Color::White.into()));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Chalk {
    style: StyleSet,
    foreground: Option<Colorant>,
    background: Option<Colorant>,
}

impl Chalk {
    /// Create a new chalk without styles or colors.
    pub const fn new() -> Self {
        Self {
            style: StyleSet::empty(),
            foreground: None,
            background: None,
        }
    }

    /// Create a chalk that also has the given style.
    pub const fn with_style(self, style: Style) -> Self {
        Self {
            style: self.style.with(style),
            ..self
        }
    }

    /// Create a chalk with the given foreground color.
    pub fn with_foreground(self, color: impl Into<Colorant>) -> Self {
        Self {
            foreground: Some(color.into()),
            ..self
        }
    }

    /// Create a chalk with the given background color.
    pub fn with_background(self, color: impl Into<Colorant>) -> Self {
        Self {
            background: Some(color.into()),
            ..self
        }
    }

    /// Create a chalk with the color in the given layer's slot.
    pub fn with_color(self, color: impl Into<Colorant>, layer: Layer) -> Self {
        self.with_colorant(color.into(), layer)
    }

    /// Create a chalk with the colorant in the given layer's slot.
    pub const fn with_colorant(self, colorant: Colorant, layer: Layer) -> Self {
        match layer {
            Layer::Foreground => Self {
                foreground: Some(colorant),
                ..self
            },
            Layer::Background => Self {
                background: Some(colorant),
                ..self
            },
        }
    }

    /// Get the style attributes.
    pub const fn style(&self) -> StyleSet {
        self.style
    }

    /// Get the foreground color, if any.
    pub const fn foreground(&self) -> Option<Colorant> {
        self.foreground
    }

    /// Get the background color, if any.
    pub const fn background(&self) -> Option<Colorant> {
        self.background
    }

    /// Determine whether this chalk has neither styles nor colors.
    pub const fn is_default(&self) -> bool {
        self.style.is_empty() && self.foreground.is_none() && self.background.is_none()
    }

    /// Compose this chalk with another one.
    pub const fn compose(self, other: Self) -> Self {
        Self {
            style: self.style.union(other.style),
            foreground: match other.foreground {
                Some(color) => Some(color),
                None => self.foreground,
            },
            background: match other.background {
                Some(color) => Some(color),
                None => self.background,
            },
        }
    }

    /// Reverse foreground and background by adding [`Style::Reversed`].
    pub const fn reverse(self) -> Self {
        self.with_style(Style::Reversed)
    }

    /// Apply this chalk to the text.
    ///
    /// This method renders with the process-wide [`Context::global`]. Hence,
    /// if styling has been disabled through [`configure`](crate::configure),
    /// the result is the text without any escape sequences.
    pub fn apply(&self, text: &str) -> String {
        Context::global().apply(self, text)
    }
}

impl BitAnd for Chalk {
    type Output = Chalk;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}

impl Add for Chalk {
    type Output = Chalk;

    fn add(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}

impl From<Style> for Chalk {
    fn from(value: Style) -> Self {
        Self::new().with_style(value)
    }
}
