use core::convert::Infallible;
use std::io::Result;

use crate::console::{Coord, ScreenInfo, Stream};
use crate::err::ErrorKind;

/// A console screen buffer that cannot be opened.
///
/// Only Windows has a legacy console. Everywhere else, terminals process ANSI
/// escape sequences, and this type is uninhabited.
#[derive(Debug)]
pub(crate) struct RawConsole {
    never: Infallible,
}

impl RawConsole {
    pub fn open(_: Stream) -> Result<Self> {
        Err(ErrorKind::ConsoleUnavailable.into())
    }

    pub fn enable_virtual_terminal(&self) -> Result<()> {
        match self.never {}
    }

    pub fn screen_info(&self) -> Result<ScreenInfo> {
        match self.never {}
    }

    pub fn set_attributes(&mut self, _: u16) -> Result<()> {
        match self.never {}
    }

    pub fn fill(&mut self, _: Coord, _: u32, _: u16) -> Result<u32> {
        match self.never {}
    }

    pub fn set_cursor_position(&mut self, _: Coord) -> Result<()> {
        match self.never {}
    }

    pub fn set_cursor_visibility(&mut self, _: bool) -> Result<()> {
        match self.never {}
    }

    pub fn set_title(&mut self, _: &str) -> Result<()> {
        match self.never {}
    }
}
