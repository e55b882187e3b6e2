//! Small helpers for consistent terminal messages.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Heading printed before the move table of a round.
pub fn round_banner(out: &mut dyn Write, number: usize, starter: &str) -> std::io::Result<()> {
    writeln!(out, "Round {}, {} goes first.", number, starter)
}
