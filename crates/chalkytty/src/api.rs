/// A command for the terminal.
///
/// Commands provide instructions to the terminal and are communicated in-band
/// by writing ANSI escape codes. Doing so is the responsibility of the
/// [`std::fmt::Display`] implementation, whereas the [`std::fmt::Debug`]
/// implementation should simply identify the command.
///
/// This trait is object-safe.
pub trait Command: core::fmt::Debug + core::fmt::Display {}

/// A borrowed command is a command.
impl<C: Command + ?Sized> Command for &C {}

/// A boxed command is a command.
impl<C: Command + ?Sized> Command for Box<C> {}

// ------------------------------------------------------------------------------------------------

/// A command using select-graphic-rendition ANSI escape sequences.
///
/// SGR commands implement [`Sgr::write_param`], which writes the parameter(s)
/// without the leading `CSI` and the trailing `m`. Their display then wraps
/// the parameters, so that each SGR command writes exactly one escape
/// sequence.
///
/// Declaring `out` to be a formatter instead of a generic writer keeps the
/// trait object-safe.
pub trait Sgr: Command {
    /// Write the parameter(s) for this SGR command.
    fn write_param(&self, out: &mut core::fmt::Formatter<'_>) -> core::fmt::Result;
}

/// A borrowed SGR is an SGR.
impl<S: Sgr + ?Sized> Sgr for &S {
    fn write_param(&self, out: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        (**self).write_param(out)
    }
}

/// A boxed SGR is an SGR.
impl<S: Sgr + ?Sized> Sgr for Box<S> {
    fn write_param(&self, out: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        (**self).write_param(out)
    }
}

// ------------------------------------------------------------------------------------------------

/// Control codes that start or end the ANSI escape sequences written by this
/// crate.
///
/// All controls are written in their 7-bit form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Bell, which terminates operating system commands.
    BEL,
    /// Control Sequence Introducer: `ESC [`
    CSI,
    /// Operating System Command: `ESC ]`
    OSC,
}

impl Control {
    /// Get the 7-bit representation of this control.
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::BEL => "\x07",
            Self::CSI => "\x1b[",
            Self::OSC => "\x1b]",
        }
    }
}

impl core::fmt::Display for Control {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
