//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Banner printed at the start of each turn.
pub fn turn_banner(who: &str) -> String {
    let title = format!("TURN: {} ", who);
    format!("{:-<width$}", title, width = 72)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_is_padded_to_fixed_width() {
        let b = turn_banner("You");
        assert!(b.starts_with("TURN: You -"));
        assert_eq!(b.len(), 72);
    }

    #[test]
    fn errors_are_prefixed() {
        let mut err = Vec::new();
        write_error(&mut err, "boom").unwrap();
        assert_eq!(String::from_utf8(err).unwrap(), "Error: boom\n");
    }
}
