//! Terminal utilities for colored output.

use std::io::{self, IsTerminal};

/// Check if stdout is attached to a terminal.
pub fn in_controlling_terminal() -> bool {
    io::stdout().is_terminal()
}

/// Disable colors when stdout is redirected, so piped reports stay plain text.
///
/// `NO_COLOR` and `CLICOLOR_FORCE` are honored by `colored` itself.
pub fn configure_color() {
    if !in_controlling_terminal() {
        colored::control::set_override(false);
    }
}
