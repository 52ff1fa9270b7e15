//! Input helpers for interactive commands.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Returns the trimmed line, or `None` on EOF or read errors. Bytes that are
/// not valid UTF-8 are replaced rather than ending the input, so the caller
/// sees a malformed line and can re-prompt.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use concentration_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new(b"  1 2  \n");
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("1 2"));
/// assert_eq!(read_stdin_line(&mut input), None);
///
/// let mut garbled = Cursor::new(b"\xff\xfe\n0 0\n");
/// assert!(read_stdin_line(&mut garbled).is_some());
/// assert_eq!(read_stdin_line(&mut garbled).as_deref(), Some("0 0"));
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut buf = Vec::new();
    match stdin.read_until(b'\n', &mut buf) {
        Ok(0) => None, // EOF
        Ok(_) => Some(String::from_utf8_lossy(&buf).trim().to_string()),
        Err(_) => None, // Read error
    }
}
