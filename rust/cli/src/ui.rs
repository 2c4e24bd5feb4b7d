//! UI helper functions for terminal output formatting.
//!
//! Errors and warnings go to the error stream; prompts go to the output
//! stream and are flushed so they show before input is read.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Print a question without a trailing newline.
pub fn prompt(out: &mut dyn Write, question: &str) -> std::io::Result<()> {
    write!(out, "{}", question)?;
    out.flush()
}

/// Horizontal rule between rounds.
pub fn separator(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "{}", "-".repeat(61))
}
