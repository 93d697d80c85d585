//! Quiet-mode detection and shared color conventions for the CLI.

use colored::{ColoredString, Colorize};
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET_FLAG: AtomicBool = AtomicBool::new(false);

/// Enable quiet mode for the rest of the process (set from `--quiet`).
pub fn set_quiet() {
    QUIET_FLAG.store(true, Ordering::Relaxed);
}

/// Check if quiet mode is enabled via the `--quiet` flag or the
/// `BARBARA_QUIET` environment variable. Quiet mode drops banners and
/// hints; verdicts are always printed.
pub fn is_quiet() -> bool {
    QUIET_FLAG.load(Ordering::Relaxed)
        || std::env::var("BARBARA_QUIET")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
}

/// The colored verdict word.
pub fn verdict_word(valid: bool) -> ColoredString {
    if valid {
        "valid".green().bold()
    } else {
        "invalid".red().bold()
    }
}

/// Cyan for syllogism codes, matching how identifiers are shown
/// everywhere in the CLI.
pub fn code(text: &str) -> ColoredString {
    text.cyan()
}
