//! Input helpers for interactive commands.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
/// Returns the trimmed line, or `None` on EOF or read error so callers can
/// wind the session down instead of spinning.
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => {
            let trimmed = line.trim();
            Some(trimmed.to_string())
        }
        Err(_) => None, // Read error
    }
}
