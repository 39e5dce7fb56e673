//! Terminal status messages.
//!
//! Everything here writes to stderr; stdout is reserved for command output.

mod messages;

pub use messages::{error, info, success, warning};

/// Configure global color output.
///
/// `--no-color` always wins; otherwise `NO_COLOR`, `FORCE_COLOR` and terminal
/// detection decide.
pub fn init_colors(no_color: bool) {
    owo_colors::set_override(!no_color && should_use_color());
}

/// Check if color output should be enabled.
pub fn should_use_color() -> bool {
    // NO_COLOR environment variable disables colors
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // FORCE_COLOR enables colors even in non-TTY
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}
