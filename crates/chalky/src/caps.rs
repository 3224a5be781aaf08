//! Terminal capability sniffing.
//!
//! Chalky never decides on its own whether to use true colors or the 16 named
//! colors. Applications can use [`supports_truecolor`] to make that choice.

use crate::util::{Env, Environment};

/// Determine whether the operating system is Linux or macOS.
pub fn supports_posix() -> bool {
    cfg!(any(target_os = "linux", target_os = "macos"))
}

/// Determine whether the terminal supports 24-bit colors.
///
/// This function checks the `COLORTERM` environment variable for `truecolor`,
/// then the `TERM` environment variable for `256color` or `24bit`, and finally,
/// on Linux or macOS, whether `tput colors` reports 256 colors. The first
/// non-empty variable decides.
pub fn supports_truecolor() -> bool {
    truecolor_from_environment(&Env::default(), supports_posix())
}

fn truecolor_from_environment(env: &impl Environment, posix: bool) -> bool {
    if let Some(colorterm) = env.read_non_empty("COLORTERM") {
        return colorterm.to_lowercase().contains("truecolor");
    }

    if let Some(term) = env.read_non_empty("TERM") {
        let term = term.to_lowercase();
        return term.contains("256color") || term.contains("24bit");
    }

    if posix {
        return env
            .run("tput", &["colors"])
            .is_some_and(|output| output.lines().next().is_some_and(|line| line.contains("256")));
    }

    false
}
