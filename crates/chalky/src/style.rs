//! Text style attributes.
use chalkytty::{Command, Control, Sgr};

/// A text style attribute.
///
/// Discriminants are indexes into a bit vector, which lets [`StyleSet`] store
/// attributes compactly and iterate over them in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Style {
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    SlowBlink,
    RapidBlink,
    Reversed,
    Conceal,
    Strikethrough,
    Normal,
}

impl Style {
    const ALL: [Style; 11] = [
        Style::Reset,
        Style::Bold,
        Style::Dim,
        Style::Italic,
        Style::Underline,
        Style::SlowBlink,
        Style::RapidBlink,
        Style::Reversed,
        Style::Conceal,
        Style::Strikethrough,
        Style::Normal,
    ];

    #[inline]
    const fn bits(&self) -> u16 {
        1 << *self as u16
    }

    /// Get an iterator over all styles in declaration order.
    pub fn all() -> impl Iterator<Item = Style> {
        Self::ALL.into_iter()
    }

    /// Get the SGR parameter for this style.
    pub const fn sgr(&self) -> u8 {
        use self::Style::*;

        match *self {
            Reset => 0,
            Bold => 1,
            Dim => 2,
            Italic => 3,
            Underline => 4,
            SlowBlink => 5,
            RapidBlink => 6,
            Reversed => 7,
            Conceal => 8,
            Strikethrough => 9,
            Normal => 22,
        }
    }
}

impl Command for Style {}

impl Sgr for Style {
    fn write_param(&self, out: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(out, "{}", self.sgr())
    }
}

impl core::fmt::Display for Style {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(Control::CSI.as_str())?;
        self.write_param(f)?;
        f.write_str("m")
    }
}

// ----------------------------------------------------------------------------------------------------------

/// A set of style attributes.
///
/// Unlike the SGR parameters it renders to, a style set has no order. Its
/// iterator nonetheless is deterministic and yields styles in declaration
/// order.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StyleSet(u16);

impl StyleSet {
    /// Create a new, empty style set.
    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a new style set that also contains the given style.
    #[inline]
    pub const fn with(self, style: Style) -> Self {
        Self(self.0 | style.bits())
    }

    /// Determine whether this set contains the given style.
    #[inline]
    pub const fn contains(&self, style: Style) -> bool {
        self.0 & style.bits() != 0
    }

    /// Compute the union of the two sets.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Determine whether this set is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Get the number of styles in this set.
    #[inline]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Get an iterator over the styles in this set.
    pub fn iter(&self) -> StyleIter {
        StyleIter {
            set: *self,
            index: 0,
        }
    }
}

impl From<Style> for StyleSet {
    fn from(value: Style) -> Self {
        Self::empty().with(value)
    }
}

impl FromIterator<Style> for StyleSet {
    fn from_iter<T: IntoIterator<Item = Style>>(iter: T) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl IntoIterator for StyleSet {
    type Item = Style;
    type IntoIter = StyleIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl core::fmt::Debug for StyleSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// An iterator over the styles of a [`StyleSet`].
#[derive(Debug)]
pub struct StyleIter {
    set: StyleSet,
    index: usize,
}

impl Iterator for StyleIter {
    type Item = Style;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(style) = Style::ALL.get(self.index).copied() {
            self.index += 1;
            if self.set.contains(style) {
                return Some(style);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = Style::ALL
            .get(self.index..)
            .map_or(0, |rest| rest.iter().filter(|s| self.set.contains(**s)).count());
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StyleIter {}

impl core::iter::FusedIterator for StyleIter {}
