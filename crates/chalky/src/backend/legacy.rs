use std::cell::OnceCell;
use std::io::Result;

use chalkytty::cmd::ClearMode;
use chalkytty::console::{Console, Coord, Device, ScreenInfo, Stream};

use super::{Backend, Capabilities, Capability, Render};

/// The legacy console's text attributes.
///
/// The console packs text attributes into a 16-bit word. The foreground color
/// occupies bits 0–2 and the background color bits 4–6, while bit 3
/// ([`ConsoleState::BRIGHT`]) and bit 7 ([`ConsoleState::BRIGHT_BACKGROUND`])
/// select the bright version of either color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConsoleState {
    pub foreground: u16,
    pub background: u16,
    pub style: u16,
}

impl ConsoleState {
    /// The flag for a bright foreground.
    pub const BRIGHT: u16 = 0x08;
    /// The flag for a bright background.
    pub const BRIGHT_BACKGROUND: u16 = 0x80;

    /// Unpack the attribute word.
    pub const fn from_attributes(attributes: u16) -> Self {
        Self {
            foreground: attributes & 0x07,
            background: (attributes >> 4) & 0x07,
            style: attributes & (Self::BRIGHT | Self::BRIGHT_BACKGROUND),
        }
    }

    /// Pack the attribute word.
    pub const fn to_attributes(&self) -> u16 {
        self.foreground | (self.background << 4) | self.style
    }
}

impl Default for ConsoleState {
    /// White text on black, neither bright.
    fn default() -> Self {
        Self {
            foreground: 7,
            background: 0,
            style: 0,
        }
    }
}

// ----------------------------------------------------------------------------------------------------------

/// A backend that calls into the legacy console.
///
/// This backend captures the console's text attributes upon creation and
/// restores them upon [`Backend::reset`]. It can clear screen and line, set
/// the title, and show or hide the cursor. It cannot reverse video and, since
/// console calls cannot be embedded into strings, it has no renderer.
///
/// If the console is unavailable or a console call fails, the backend logs a
/// warning and turns inert. All further operations succeed without doing
/// anything.
#[derive(Debug)]
pub struct LegacyConsoleBackend<D: Device = Console> {
    device: Option<D>,
    default_state: OnceCell<ConsoleState>,
}

impl LegacyConsoleBackend<Console> {
    /// Create a new legacy console backend for the given stream.
    pub fn new(stream: Stream) -> Self {
        match Console::open(stream) {
            Ok(console) => Self::with_device(console),
            Err(error) => {
                tracing::warn!(
                    stream = stream.name(),
                    %error,
                    "legacy console is unavailable; console operations are no-ops"
                );
                Self {
                    device: None,
                    default_state: OnceCell::new(),
                }
            }
        }
    }
}

impl<D: Device> LegacyConsoleBackend<D> {
    /// Create a new legacy console backend for the given device.
    pub fn with_device(device: D) -> Self {
        let mut backend = Self {
            device: Some(device),
            default_state: OnceCell::new(),
        };
        backend.default_state();
        backend
    }

    /// Get the device, unless the backend is inert.
    pub fn device(&self) -> Option<&D> {
        self.device.as_ref()
    }

    /// Determine whether this backend has turned inert.
    pub fn is_inert(&self) -> bool {
        self.device.is_none()
    }

    /// Get the console's default state, capturing it if necessary.
    pub fn default_state(&mut self) -> Option<ConsoleState> {
        if let Some(state) = self.default_state.get() {
            return Some(*state);
        }

        let info = self.call(|device| device.screen_info())?;
        Some(
            *self
                .default_state
                .get_or_init(|| ConsoleState::from_attributes(info.attributes)),
        )
    }

    fn call<T>(&mut self, op: impl FnOnce(&mut D) -> Result<T>) -> Option<T> {
        let device = self.device.as_mut()?;
        match op(device) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(%error, "legacy console call failed; console operations are no-ops");
                self.device = None;
                None
            }
        }
    }

    fn clear(&mut self, mode: ClearMode, line_only: bool) -> Option<ScreenInfo> {
        let info = self.call(|device| device.screen_info())?;
        let Coord { column, row } = info.cursor;
        let columns = u32::from(info.columns);

        let (origin, length) = match (line_only, mode) {
            (false, ClearMode::All) => (Coord::default(), info.cells()),
            (false, ClearMode::ToEnd) => (
                info.cursor,
                info.cells().saturating_sub(info.cells_before_cursor()),
            ),
            (false, ClearMode::ToStart) => (Coord::default(), info.cells_before_cursor() + 1),
            (true, ClearMode::All) => (Coord::new(0, row), columns),
            (true, ClearMode::ToEnd) => (info.cursor, columns.saturating_sub(u32::from(column))),
            (true, ClearMode::ToStart) => (Coord::new(0, row), u32::from(column) + 1),
        };

        self.call(|device| device.fill(origin, length, info.attributes))?;
        Some(info)
    }
}

impl<D: Device> Backend for LegacyConsoleBackend<D> {
    fn capabilities(&self) -> Capabilities {
        if self.is_inert() {
            return Capabilities::NONE;
        }

        Capabilities::NONE
            .with(Capability::ClearScreen)
            .with(Capability::ClearLine)
            .with(Capability::SetTitle)
            .with(Capability::Reset)
            .with(Capability::CursorVisibility)
    }

    fn clear_screen(
        &mut self,
        reset_position: bool,
        keep_head: bool,
        keep_tail: bool,
    ) -> Result<()> {
        let Some(mode) = ClearMode::from_keep(keep_head, keep_tail) else {
            return Ok(());
        };

        if let Some(info) = self.clear(mode, false) {
            if reset_position {
                self.call(|device| device.set_cursor_position(info.window));
            }
        }
        Ok(())
    }

    fn clear_line(&mut self, keep_head: bool, keep_tail: bool) -> Result<()> {
        if let Some(mode) = ClearMode::from_keep(keep_head, keep_tail) {
            self.clear(mode, true);
        }
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        self.call(|device| device.set_title(title));
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        if let Some(state) = self.default_state() {
            self.call(|device| device.set_attributes(state.to_attributes()));
        }
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.call(|device| device.set_cursor_visibility(false));
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.call(|device| device.set_cursor_visibility(true));
        Ok(())
    }

    fn reverse_video(&mut self) -> Result<()> {
        Ok(())
    }

    fn normal_video(&mut self) -> Result<()> {
        Ok(())
    }

    fn renderer(&self) -> Option<&dyn Render> {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::time::Duration;
    use tracing_test::traced_test;

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum Call {
        Attributes(u16),
        Fill(Coord, u32, u16),
        Cursor(Coord),
        Visibility(bool),
        Title(String),
    }

    #[derive(Debug)]
    struct FakeConsole {
        info: ScreenInfo,
        calls: Vec<Call>,
        broken: bool,
    }

    impl FakeConsole {
        fn new() -> Self {
            Self {
                info: ScreenInfo {
                    columns: 80,
                    rows: 25,
                    cursor: Coord::new(10, 3),
                    window: Coord::new(0, 5),
                    attributes: 0x1e,
                },
                calls: Vec::new(),
                broken: false,
            }
        }

        fn check(&self) -> Result<()> {
            if self.broken {
                Err(std::io::Error::other("console went away"))
            } else {
                Ok(())
            }
        }
    }

    impl Device for FakeConsole {
        fn screen_info(&self) -> Result<ScreenInfo> {
            self.check()?;
            Ok(self.info)
        }

        fn set_attributes(&mut self, attributes: u16) -> Result<()> {
            self.check()?;
            self.info.attributes = attributes;
            self.calls.push(Call::Attributes(attributes));
            Ok(())
        }

        fn fill(&mut self, origin: Coord, length: u32, attributes: u16) -> Result<u32> {
            self.check()?;
            self.calls.push(Call::Fill(origin, length, attributes));
            Ok(length)
        }

        fn set_cursor_position(&mut self, position: Coord) -> Result<()> {
            self.check()?;
            self.calls.push(Call::Cursor(position));
            Ok(())
        }

        fn set_cursor_visibility(&mut self, visible: bool) -> Result<()> {
            self.check()?;
            self.calls.push(Call::Visibility(visible));
            Ok(())
        }

        fn set_title(&mut self, title: &str) -> Result<()> {
            self.check()?;
            self.calls.push(Call::Title(title.to_string()));
            Ok(())
        }
    }

    fn calls(backend: &LegacyConsoleBackend<FakeConsole>) -> Vec<Call> {
        backend.device().map(|d| d.calls.clone()).unwrap_or_default()
    }

    #[test]
    fn test_console_state() {
        let state = ConsoleState::from_attributes(0x9e);
        assert_eq!(state.foreground, 6);
        assert_eq!(state.background, 1);
        assert_eq!(state.style, ConsoleState::BRIGHT | ConsoleState::BRIGHT_BACKGROUND);
        assert_eq!(state.to_attributes(), 0x9e);

        let state = ConsoleState::default();
        assert_eq!(state.to_attributes(), 0x07);
        assert_eq!(ConsoleState::from_attributes(0x07), state);
    }

    #[test]
    fn test_clear_screen() -> Result<()> {
        let mut backend = LegacyConsoleBackend::with_device(FakeConsole::new());
        backend.clear_screen(true, true, true)?;
        assert!(calls(&backend).is_empty());

        backend.clear_screen(false, false, false)?;
        backend.clear_screen(false, true, false)?;
        backend.clear_screen(false, false, true)?;
        backend.clear_screen(true, false, false)?;

        assert_eq!(
            calls(&backend),
            vec![
                Call::Fill(Coord::new(0, 0), 2_000, 0x1e),
                Call::Fill(Coord::new(10, 3), 1_750, 0x1e),
                Call::Fill(Coord::new(0, 0), 251, 0x1e),
                Call::Fill(Coord::new(0, 0), 2_000, 0x1e),
                Call::Cursor(Coord::new(0, 5)),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_clear_line() -> Result<()> {
        let mut backend = LegacyConsoleBackend::with_device(FakeConsole::new());
        backend.clear_line(true, true)?;
        backend.clear_line(false, false)?;
        backend.clear_line(true, false)?;
        backend.clear_line(false, true)?;

        assert_eq!(
            calls(&backend),
            vec![
                Call::Fill(Coord::new(0, 3), 80, 0x1e),
                Call::Fill(Coord::new(10, 3), 70, 0x1e),
                Call::Fill(Coord::new(0, 3), 11, 0x1e),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_operations() -> Result<()> {
        let mut backend = LegacyConsoleBackend::with_device(FakeConsole::new());
        assert_eq!(
            backend.default_state(),
            Some(ConsoleState::from_attributes(0x1e))
        );

        backend.set_title("legacy")?;
        backend.hide_cursor()?;
        backend.show_cursor()?;
        backend.reverse_video()?;
        backend.normal_video()?;
        backend.flash(Duration::from_secs(5))?;
        backend.reset()?;

        assert_eq!(
            calls(&backend),
            vec![
                Call::Title("legacy".to_string()),
                Call::Visibility(false),
                Call::Visibility(true),
                Call::Attributes(0x1e),
            ]
        );

        let caps = backend.capabilities();
        assert!(caps.contains(Capability::ClearScreen));
        assert!(caps.contains(Capability::CursorVisibility));
        assert!(!caps.contains(Capability::ReverseVideo));
        assert!(!caps.contains(Capability::Flash));
        assert!(!caps.contains(Capability::Apply));
        assert!(backend.renderer().is_none());
        Ok(())
    }

    #[test]
    #[traced_test]
    fn test_failure_turns_inert() -> Result<()> {
        let mut backend = LegacyConsoleBackend::with_device(FakeConsole::new());
        if let Some(ref mut device) = backend.device {
            device.broken = true;
        }

        backend.set_title("nope")?;
        assert!(backend.is_inert());
        assert_eq!(backend.capabilities(), Capabilities::NONE);
        backend.clear_screen(true, false, false)?;
        backend.hide_cursor()?;
        backend.reset()?;

        assert!(logs_contain("legacy console call failed"));
        logs_assert(|lines: &[&str]| {
            match lines
                .iter()
                .filter(|line| line.contains("legacy console call failed"))
                .count()
            {
                1 => Ok(()),
                n => Err(format!("expected one warning, got {}", n)),
            }
        });
        Ok(())
    }

    #[cfg(not(target_family = "windows"))]
    #[test]
    #[traced_test]
    fn test_unavailable_console() -> Result<()> {
        let mut backend = LegacyConsoleBackend::new(Stream::Stdout);
        assert!(backend.is_inert());
        assert_eq!(backend.default_state(), None);
        backend.clear_screen(true, false, false)?;
        backend.set_title("nothing")?;
        backend.reset()?;
        assert!(logs_contain("legacy console is unavailable"));
        Ok(())
    }
}
