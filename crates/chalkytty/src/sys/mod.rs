#[cfg(target_family = "windows")]
mod into_result;
#[cfg(not(target_family = "windows"))]
mod fallback;
#[cfg(target_family = "windows")]
mod windows;

#[cfg(not(target_family = "windows"))]
pub(crate) use self::fallback::RawConsole;
#[cfg(target_family = "windows")]
pub(crate) use self::windows::RawConsole;
