//! Board, card and result formatters for terminal display.
//!
//! All functions are pure reads of engine state; nothing here mutates a game.
//!
//! ## Unicode vs ASCII Fallback
//!
//! Short card names use ♥ ♦ ♣ ♠ where the terminal supports them and the
//! letters h d c s otherwise.
//!
//! ## Example
//!
//! ```rust
//! use concentration_engine::board::Board;
//! use concentration_engine::cards::full_deck;
//! # use concentration_cli::formatters::format_board;
//!
//! let board = Board::from_cards(&full_deck()).unwrap();
//! let text = format_board(&board);
//! assert!(text.starts_with(">>CURRENT STATE"));
//! ```

use concentration_engine::board::{Board, COLS};
use concentration_engine::cards::{Card, Rank, Suit};
use concentration_engine::game::GameResult;
use concentration_engine::player::Winner;
use std::fmt::Write;

/// Placeholder drawn for claimed cells.
pub const CLAIMED_MARK: &str = "X";

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> &'static str {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
    }
}

/// Single-character rank (A, 2-9, T, J, Q, K).
pub fn format_rank(rank: Rank) -> &'static str {
    match rank {
        Rank::Ace => "A",
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
    }
}

/// Short form such as "Q♥" (Unicode) or "Qh" (ASCII).
pub fn format_card(card: Card) -> String {
    format!("{}{}", format_rank(card.rank()), format_suit(card.suit()))
}

fn column_header(out: &mut String) {
    out.push_str("    ");
    for col in 0..COLS {
        let _ = write!(out, "{:>3}", col);
    }
    out.push('\n');
}

/// The face-down board as the player sees it.
///
/// Live cells show their row-major cell index, claimed cells show
/// [`CLAIMED_MARK`]. Rows and columns are labelled for entering picks.
pub fn format_board(board: &Board) -> String {
    let mut out = String::from(">>CURRENT STATE\n");
    column_header(&mut out);
    for (loc, card) in board.cells() {
        if loc.col == 0 {
            let _ = write!(out, "{:>2}: ", loc.row);
        }
        match card {
            Some(_) => {
                let _ = write!(out, "{:>3}", loc.index());
            }
            None => {
                let _ = write!(out, "{:>3}", CLAIMED_MARK);
            }
        }
        if loc.col == COLS - 1 {
            out.push('\n');
        }
    }
    out
}

/// The board face-up, for inspecting a deal.
pub fn format_layout(board: &Board) -> String {
    let mut out = String::new();
    column_header(&mut out);
    for (loc, card) in board.cells() {
        if loc.col == 0 {
            let _ = write!(out, "{:>2}: ", loc.row);
        }
        let text = card.map(format_card).unwrap_or_else(|| CLAIMED_MARK.to_string());
        let _ = write!(out, "{:>3}", text);
        if loc.col == COLS - 1 {
            out.push('\n');
        }
    }
    out
}

/// Closing message for a finished game, from the human's point of view.
///
/// # Example
///
/// ```rust
/// use concentration_engine::game::GameResult;
/// use concentration_engine::player::Scores;
/// # use concentration_cli::formatters::format_result;
///
/// let result = GameResult::from_scores(Scores { human: 30, computer: 22 });
/// assert_eq!(format_result(&result), "Congratulations!!\nYou WIN by 30 / 22");
/// ```
pub fn format_result(result: &GameResult) -> String {
    let s = result.scores;
    match result.winner {
        Winner::Human => format!("Congratulations!!\nYou WIN by {} / {}", s.human, s.computer),
        Winner::Computer => format!("Too bad!!\nYou LOST by {} / {}", s.human, s.computer),
        Winner::Tie => format!("You TIED by {} / {}", s.human, s.computer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concentration_engine::board::Location;
    use concentration_engine::cards::full_deck;
    use concentration_engine::player::Scores;

    #[test]
    fn claimed_cells_render_as_placeholder() {
        let mut board = Board::from_cards(&full_deck()).unwrap();
        board.claim(Location::new(1, 0)).unwrap();
        board.claim(Location::new(1, 1)).unwrap();
        let text = format_board(&board);
        let row1 = text.lines().find(|l| l.starts_with(" 1:")).unwrap();
        let cells: Vec<&str> = row1[3..].split_whitespace().collect();
        assert_eq!(cells.len(), 13);
        assert_eq!(&cells[..3], &["X", "X", "15"]);
    }

    #[test]
    fn board_shows_cell_indices_not_cards() {
        let board = Board::from_cards(&full_deck()).unwrap();
        let text = format_board(&board);
        let last = text.lines().last().unwrap();
        assert!(last.starts_with(" 3:"));
        assert!(last.trim_end().ends_with("51"));
    }

    #[test]
    fn layout_shows_card_faces() {
        let board = Board::from_cards(&full_deck()).unwrap();
        let text = format_layout(&board);
        let row0 = text.lines().nth(1).unwrap();
        assert!(row0.contains(&format_card(full_deck()[0])));
        assert!(format_card(full_deck()[0]).starts_with('A'));
    }

    #[test]
    fn result_messages_cover_loss_and_tie() {
        let lost = GameResult::from_scores(Scores {
            human: 10,
            computer: 42,
        });
        assert_eq!(format_result(&lost), "Too bad!!\nYou LOST by 10 / 42");
        let tie = GameResult::from_scores(Scores {
            human: 26,
            computer: 26,
        });
        assert_eq!(format_result(&tie), "You TIED by 26 / 26");
    }
}
