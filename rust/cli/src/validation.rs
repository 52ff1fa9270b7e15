//! Input parsing and validation for the interactive `play` command.
//!
//! Parsing turns a raw line into a board location; the engine then decides
//! whether that location is a legal pick. Each rejection maps to its own
//! message so the player knows what to fix.

use concentration_engine::board::{COLS, Location, ROWS};
use concentration_engine::errors::GameError;

pub const MSG_BAD_FORMAT: &str = "Invalid input try again.";
pub const MSG_OUT_OF_RANGE: &str = "Row and column should be from 0 to 3 and 0 to 12 respectively.";
pub const MSG_TAKEN: &str = "This card has already been taken.";
pub const MSG_SAME_AS_FIRST: &str = "Choose a card different from your first choice";

/// Outcome of parsing one line of player input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A row/column pair on the board
    Pick(Location),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a board location.
///
/// Accepts two integers separated by whitespace and/or a comma, optionally
/// wrapped in parentheses, and `q`/`quit` to leave the game.
///
/// # Example
///
/// ```rust
/// # use concentration_cli::validation::{parse_pick, ParseResult, MSG_OUT_OF_RANGE};
/// use concentration_engine::board::Location;
///
/// assert_eq!(parse_pick("2 7"), ParseResult::Pick(Location::new(2, 7)));
/// assert_eq!(parse_pick("(0, 12)"), ParseResult::Pick(Location::new(0, 12)));
/// assert_eq!(parse_pick("quit"), ParseResult::Quit);
/// assert_eq!(parse_pick("4 0"), ParseResult::Invalid(MSG_OUT_OF_RANGE.to_string()));
/// ```
pub fn parse_pick(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    if input == "q" || input == "quit" {
        return ParseResult::Quit;
    }

    let cleaned = input.trim_start_matches('(').trim_end_matches(')');
    let parts: Vec<&str> = cleaned
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    let [row, col] = parts.as_slice() else {
        return ParseResult::Invalid(MSG_BAD_FORMAT.to_string());
    };
    if !is_integer(row) || !is_integer(col) {
        return ParseResult::Invalid(MSG_BAD_FORMAT.to_string());
    }
    // Integers too large for i64 are still just off the board
    let (Ok(row), Ok(col)) = (row.parse::<i64>(), col.parse::<i64>()) else {
        return ParseResult::Invalid(MSG_OUT_OF_RANGE.to_string());
    };
    if !(0..ROWS as i64).contains(&row) || !(0..COLS as i64).contains(&col) {
        return ParseResult::Invalid(MSG_OUT_OF_RANGE.to_string());
    }
    ParseResult::Pick(Location::new(row as usize, col as usize))
}

fn is_integer(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Message shown when the engine rejects a parsed pick.
pub fn pick_error_message(error: &GameError) -> String {
    match error {
        GameError::OutOfBounds { .. } => MSG_OUT_OF_RANGE.to_string(),
        GameError::AlreadyClaimed { .. } => MSG_TAKEN.to_string(),
        GameError::SameAsFirstPick => MSG_SAME_AS_FIRST.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_arity_is_a_format_error() {
        for input in ["", "1", "1 2 3", "one two", "1.5 2", "- 1", "+ 2", "1e3 0"] {
            assert_eq!(
                parse_pick(input),
                ParseResult::Invalid(MSG_BAD_FORMAT.to_string()),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn negative_and_large_values_are_range_errors() {
        for input in [
            "-1 0",
            "0 13",
            "4 4",
            "3 -2",
            "99999999999999999999 0",
            "0 -99999999999999999999",
        ] {
            assert_eq!(
                parse_pick(input),
                ParseResult::Invalid(MSG_OUT_OF_RANGE.to_string()),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn accepts_separators_and_case() {
        assert_eq!(parse_pick("3,12"), ParseResult::Pick(Location::new(3, 12)));
        assert_eq!(parse_pick("  0   0 "), ParseResult::Pick(Location::new(0, 0)));
        assert_eq!(parse_pick("Q"), ParseResult::Quit);
    }

    #[test]
    fn engine_rejections_have_specific_messages() {
        assert_eq!(
            pick_error_message(&GameError::AlreadyClaimed { row: 0, col: 0 }),
            MSG_TAKEN
        );
        assert_eq!(
            pick_error_message(&GameError::SameAsFirstPick),
            MSG_SAME_AS_FIRST
        );
        assert_eq!(
            pick_error_message(&GameError::OutOfBounds { row: 9, col: 9 }),
            MSG_OUT_OF_RANGE
        );
    }
}
