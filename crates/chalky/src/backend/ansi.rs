use std::fmt::{Display, Formatter, Write as _};
use std::io::{Result, Write};

use chalkytty::cmd::{
    ClearMode, DisableReverseMode, EnableReverseMode, EraseLine, EraseScreen, HideCursor, MoveTo,
    ResetStyle, SetWindowTitle, ShowCursor,
};
use chalkytty::console::Stream;
use chalkytty::Command;

use super::{Backend, Capabilities, Render};
use crate::color::{Colorant, Layer};
use crate::style::StyleSet;

/// The ANSI escape sequence renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ansi;

/// Text decorated with styles and colors, ready for display.
struct Decorated<'a> {
    text: &'a str,
    style: StyleSet,
    background: Option<Colorant>,
    foreground: Option<Colorant>,
}

impl Display for Decorated<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for style in self.style.iter() {
            write!(f, "{}", style)?;
        }
        if let Some(color) = self.background {
            write!(f, "{}", color.on(Layer::Background))?;
        }
        if let Some(color) = self.foreground {
            write!(f, "{}", color.on(Layer::Foreground))?;
        }
        f.write_str(self.text)?;
        write!(f, "{}", ResetStyle)
    }
}

impl Render for Ansi {
    fn apply(
        &self,
        text: &str,
        style: StyleSet,
        background: Option<Colorant>,
        foreground: Option<Colorant>,
    ) -> String {
        Decorated {
            text,
            style,
            background,
            foreground,
        }
        .to_string()
    }
}

// ----------------------------------------------------------------------------------------------------------

/// A backend that writes ANSI escape sequences.
///
/// Every operation that produces output is a single write of the complete
/// escape sequence(s), followed by a flush.
#[derive(Debug)]
pub struct AnsiBackend<W: Write + Send> {
    writer: W,
}

impl AnsiBackend<Box<dyn Write + Send>> {
    /// Create a new ANSI backend for the given stream.
    pub fn for_stream(stream: Stream) -> Self {
        let writer: Box<dyn Write + Send> = match stream {
            Stream::Stdout => Box::new(std::io::stdout()),
            Stream::Stderr => Box::new(std::io::stderr()),
        };
        Self::new(writer)
    }
}

impl<W: Write + Send> AnsiBackend<W> {
    /// Create a new ANSI backend writing to the given writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get a reference to the writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consume this backend and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn exec(&mut self, commands: &[&dyn Command]) -> Result<()> {
        let mut buffer = String::new();
        for command in commands {
            // Writing to a string never fails.
            let _ = write!(buffer, "{}", command);
        }

        tracing::trace!(sequence = ?buffer, "executing ANSI command");
        self.writer.write_all(buffer.as_bytes())?;
        self.writer.flush()
    }
}

impl<W: Write + Send> Backend for AnsiBackend<W> {
    fn capabilities(&self) -> Capabilities {
        Capabilities::ALL
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

        if reset_position {
            self.exec(&[&EraseScreen(mode), &MoveTo::HOME])
        } else {
            self.exec(&[&EraseScreen(mode)])
        }
    }

    fn clear_line(&mut self, keep_head: bool, keep_tail: bool) -> Result<()> {
        match ClearMode::from_keep(keep_head, keep_tail) {
            Some(mode) => self.exec(&[&EraseLine(mode)]),
            None => Ok(()),
        }
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        self.exec(&[&SetWindowTitle::new(title)])
    }

    fn reset(&mut self) -> Result<()> {
        self.exec(&[&ResetStyle])
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.exec(&[&HideCursor])
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.exec(&[&ShowCursor])
    }

    fn reverse_video(&mut self) -> Result<()> {
        self.exec(&[&EnableReverseMode])
    }

    fn normal_video(&mut self) -> Result<()> {
        self.exec(&[&DisableReverseMode])
    }

    fn renderer(&self) -> Option<&dyn Render> {
        Some(&Ansi)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Color, Style, TrueColor};
    use std::time::{Duration, Instant};

    /// A writer that records every write.
    #[derive(Debug, Default)]
    struct Recorder {
        writes: Vec<Vec<u8>>,
    }

    impl Recorder {
        fn output(&self) -> String {
            String::from_utf8(self.writes.concat()).unwrap()
        }
    }

    impl Write for Recorder {
        fn write(&mut self, buf: &[u8]) -> Result<usize> {
            self.writes.push(buf.to_vec());
            Ok(buf.len())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }
    }

    fn backend() -> AnsiBackend<Recorder> {
        AnsiBackend::new(Recorder::default())
    }

    #[test]
    fn test_apply() {
        let style = StyleSet::from(Style::Underline).with(Style::Bold);
        let text = Ansi.apply(
            "hi",
            style,
            Some(Color::White.into()),
            Some(Color::Red.into()),
        );
        assert_eq!(text, "\x1b[1m\x1b[4m\x1b[47m\x1b[31mhi\x1b[0m");

        let text = Ansi.apply(
            "rgb",
            StyleSet::empty(),
            None,
            Some(TrueColor::new(255, 0, 0).into()),
        );
        assert_eq!(text, "\x1b[38;2;255;0;0mrgb\x1b[0m");

        assert_eq!(Ansi.apply("", StyleSet::empty(), None, None), "\x1b[0m");
        assert_eq!(Ansi.apply("plain", StyleSet::empty(), None, None), "plain\x1b[0m");
    }

    #[test]
    fn test_clear_screen() -> Result<()> {
        let mut backend = backend();
        backend.clear_screen(true, true, true)?;
        assert!(backend.get_ref().writes.is_empty());

        backend.clear_screen(false, false, false)?;
        backend.clear_screen(false, true, false)?;
        backend.clear_screen(false, false, true)?;
        backend.clear_screen(true, false, false)?;

        let recorder = backend.into_inner();
        assert_eq!(recorder.writes.len(), 4);
        assert_eq!(
            recorder.output(),
            "\x1b[2J\x1b[0J\x1b[1J\x1b[2J\x1b[1;1H"
        );
        Ok(())
    }

    #[test]
    fn test_clear_line() -> Result<()> {
        let mut backend = backend();
        backend.clear_line(true, true)?;
        assert!(backend.get_ref().writes.is_empty());

        backend.clear_line(true, false)?;
        backend.clear_line(false, true)?;
        backend.clear_line(false, false)?;
        assert_eq!(backend.get_ref().output(), "\x1b[0K\x1b[1K\x1b[2K");
        Ok(())
    }

    #[test]
    fn test_commands() -> Result<()> {
        let mut backend = backend();
        backend.set_title("Ünïcode ✓")?;
        backend.reset()?;
        backend.hide_cursor()?;
        backend.show_cursor()?;
        backend.reverse_video()?;
        backend.normal_video()?;

        assert_eq!(
            backend.get_ref().output(),
            "\x1b]2;Ünïcode ✓\x07\x1b[0m\x1b[?25l\x1b[?25h\x1b[?5h\x1b[?5l"
        );
        assert_eq!(backend.get_ref().writes.len(), 6);
        assert!(backend.renderer().is_some());
        Ok(())
    }

    #[test]
    fn test_flash() -> Result<()> {
        let mut backend = backend();
        let start = Instant::now();
        backend.flash(Duration::from_millis(20))?;
        assert!(Duration::from_millis(20) <= start.elapsed());

        let recorder = backend.into_inner();
        assert_eq!(recorder.writes.len(), 2);
        assert_eq!(recorder.output(), "\x1b[?5h\x1b[?5l");
        Ok(())
    }
}
