//! Helper module with this crate's error type.
//!
//! Terminal errors complement I/O errors by identifying invalid command
//! arguments and an unavailable legacy console. They seamlessly convert to I/O
//! errors. Failing console calls, in contrast, are plain I/O errors carrying
//! the operating system's error code.

/// The enumeration of error kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A cursor position with a row or column less than one.
    InvalidCursorPosition,
    /// The legacy console is not available on this platform or for this
    /// stream.
    ConsoleUnavailable,
}

impl ErrorKind {
    /// Turn the error kind to an error message.
    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::InvalidCursorPosition => "cursor positions are 1-indexed",
            Self::ConsoleUnavailable => "legacy console is not available",
        }
    }
}

impl From<ErrorKind> for std::io::Error {
    fn from(value: ErrorKind) -> Self {
        Error::from(value).into()
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error { kind }
    }
}

/// A terminal error.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.kind.as_str())
    }
}

impl std::error::Error for Error {}

impl From<Error> for std::io::Error {
    fn from(value: Error) -> Self {
        match value.kind {
            ErrorKind::InvalidCursorPosition => Self::new(std::io::ErrorKind::InvalidInput, value),
            ErrorKind::ConsoleUnavailable => Self::new(std::io::ErrorKind::Unsupported, value),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_conversion() {
        let error = std::io::Error::from(ErrorKind::InvalidCursorPosition);
        assert_eq!(error.kind(), std::io::ErrorKind::InvalidInput);
        assert_eq!(error.to_string(), "cursor positions are 1-indexed");

        let error = std::io::Error::from(ErrorKind::ConsoleUnavailable);
        assert_eq!(error.kind(), std::io::ErrorKind::Unsupported);
        let inner = error.into_inner().and_then(|e| e.downcast::<Error>().ok());
        assert_eq!(inner.map(|e| e.kind()), Some(ErrorKind::ConsoleUnavailable));
    }
}
