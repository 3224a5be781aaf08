use std::io::{Error, Result};
use std::iter::once;
use std::ptr::{from_mut, from_ref};

use windows_sys::Win32::Foundation::{HANDLE, INVALID_HANDLE_VALUE};
use windows_sys::Win32::System::Console::{
    self, CONSOLE_CURSOR_INFO, CONSOLE_MODE as ConsoleMode, CONSOLE_SCREEN_BUFFER_INFO, COORD,
    SMALL_RECT,
};

use super::into_result::IntoResult;
use crate::console::{Coord, ScreenInfo, Stream};
use crate::err::ErrorKind;

#[inline]
fn to_coord(coord: Coord) -> COORD {
    COORD {
        X: i16::try_from(coord.column).unwrap_or(i16::MAX),
        Y: i16::try_from(coord.row).unwrap_or(i16::MAX),
    }
}

#[inline]
fn from_coord(coord: COORD) -> Coord {
    Coord::new(
        u16::try_from(coord.X).unwrap_or(0),
        u16::try_from(coord.Y).unwrap_or(0),
    )
}

// ----------------------------------------------------------------------------------------------------------

/// A console screen buffer, i.e., the standard output or error of a process
/// attached to a console.
#[derive(Debug)]
pub(crate) struct RawConsole {
    handle: HANDLE,
}

// SAFETY: Windows HANDLE is defined as a *mut c_void but most instances are
// thread-safe. In fact, Rust's standard library [implements `Send` and
// `Sync`](https://github.com/rust-lang/rust/blob/8e37e151835d96d6a7415e93e6876561485a3354/library/std/src/os/windows/io/handle.rs#L111),
// for wrapped handles, too. Also, the standard handle is owned by the process,
// not by this struct, which never closes it.
unsafe impl Send for RawConsole {}

impl RawConsole {
    /// Access the console screen buffer for the given stream.
    ///
    /// This method fails if the stream has been redirected or the process has
    /// no console.
    pub fn open(stream: Stream) -> Result<Self> {
        let id = match stream {
            Stream::Stdout => Console::STD_OUTPUT_HANDLE,
            Stream::Stderr => Console::STD_ERROR_HANDLE,
        };

        // SAFETY: GetStdHandle has no preconditions.
        let handle = unsafe { Console::GetStdHandle(id) };
        if handle == INVALID_HANDLE_VALUE {
            return Err(Error::last_os_error());
        } else if handle.is_null() {
            return Err(ErrorKind::ConsoleUnavailable.into());
        }

        let console = Self { handle };
        console.screen_info()?;
        Ok(console)
    }

    /// Try to enable virtual terminal processing, i.e., ANSI escape sequences.
    pub fn enable_virtual_terminal(&self) -> Result<()> {
        let mut mode: ConsoleMode = 0;
        // SAFETY: The handle is valid and mode is a valid, mutable location.
        unsafe { Console::GetConsoleMode(self.handle, from_mut(&mut mode)) }.into_result()?;
        if mode & Console::ENABLE_VIRTUAL_TERMINAL_PROCESSING != 0 {
            return Ok(());
        }

        let mode =
            mode | Console::ENABLE_PROCESSED_OUTPUT | Console::ENABLE_VIRTUAL_TERMINAL_PROCESSING;
        // SAFETY: The handle is valid.
        unsafe { Console::SetConsoleMode(self.handle, mode) }.into_result()
    }

    pub fn screen_info(&self) -> Result<ScreenInfo> {
        let origin = COORD { X: 0, Y: 0 };
        let mut info = CONSOLE_SCREEN_BUFFER_INFO {
            dwSize: origin,
            dwCursorPosition: origin,
            wAttributes: 0,
            srWindow: SMALL_RECT {
                Left: 0,
                Top: 0,
                Right: 0,
                Bottom: 0,
            },
            dwMaximumWindowSize: origin,
        };

        // SAFETY: The handle is valid and info is a valid, mutable location.
        unsafe { Console::GetConsoleScreenBufferInfo(self.handle, from_mut(&mut info)) }
            .into_result()?;

        let size = from_coord(info.dwSize);
        Ok(ScreenInfo {
            columns: size.column,
            rows: size.row,
            cursor: from_coord(info.dwCursorPosition),
            window: from_coord(COORD {
                X: info.srWindow.Left,
                Y: info.srWindow.Top,
            }),
            attributes: info.wAttributes,
        })
    }

    pub fn set_attributes(&mut self, attributes: u16) -> Result<()> {
        // SAFETY: The handle is valid.
        unsafe { Console::SetConsoleTextAttribute(self.handle, attributes) }.into_result()
    }

    pub fn fill(&mut self, origin: Coord, length: u32, attributes: u16) -> Result<u32> {
        let origin = to_coord(origin);

        let mut written = 0;
        // SAFETY: The handle is valid and written is a valid, mutable location.
        unsafe {
            Console::FillConsoleOutputCharacterW(
                self.handle,
                u16::from(b' '),
                length,
                origin,
                from_mut(&mut written),
            )
        }
        .into_result()?;

        let mut colored = 0;
        // SAFETY: The handle is valid and colored is a valid, mutable location.
        unsafe {
            Console::FillConsoleOutputAttribute(
                self.handle,
                attributes,
                length,
                origin,
                from_mut(&mut colored),
            )
        }
        .into_result()?;

        Ok(written)
    }

    pub fn set_cursor_position(&mut self, position: Coord) -> Result<()> {
        // SAFETY: The handle is valid.
        unsafe { Console::SetConsoleCursorPosition(self.handle, to_coord(position)) }
            .into_result()
    }

    pub fn set_cursor_visibility(&mut self, visible: bool) -> Result<()> {
        let mut info = CONSOLE_CURSOR_INFO {
            dwSize: 0,
            bVisible: 0,
        };
        // SAFETY: The handle is valid and info is a valid, mutable location.
        unsafe { Console::GetConsoleCursorInfo(self.handle, from_mut(&mut info)) }
            .into_result()?;

        info.bVisible = i32::from(visible);
        // SAFETY: The handle is valid and info is a valid location.
        unsafe { Console::SetConsoleCursorInfo(self.handle, from_ref(&info)) }.into_result()
    }

    pub fn set_title(&mut self, title: &str) -> Result<()> {
        let wide: Vec<u16> = title.encode_utf16().chain(once(0)).collect();
        // SAFETY: wide is a valid, nul-terminated UTF-16 string that outlives
        // the call.
        unsafe { Console::SetConsoleTitleW(wide.as_ptr()) }.into_result()
    }
}
