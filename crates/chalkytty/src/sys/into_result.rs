use std::io::Result;

/// Trait to determine whether a status code is an error.
pub(crate) trait IsError {
    /// Determine if this value is an error.
    fn is_error(&self) -> bool;
}

// Console functions return a BOOL, which is zero on failure.
macro_rules! is_error {
    ($source:ty) => {
        impl IsError for $source {
            #[inline]
            fn is_error(&self) -> bool {
                *self == 0
            }
        }
    };
}

is_error!(i32);

/// Trait to convert a status code into a Rust result.
pub(crate) trait IntoResult {
    /// Convert this status code into a Rust result.
    fn into_result(self) -> Result<()>;
}

impl<T: IsError> IntoResult for T {
    fn into_result(self) -> Result<()> {
        if self.is_error() {
            Err(std::io::Error::last_os_error())
        } else {
            Ok(())
        }
    }
}
