//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Section divider in the style of the hand history panel.
pub fn divider(out: &mut dyn Write, title: &str) -> std::io::Result<()> {
    writeln!(out, "── {} ──", title)
}
