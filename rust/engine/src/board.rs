use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::{full_deck, Card, DECK_SIZE};
use crate::errors::GameError;

pub const ROWS: usize = 4;
pub const COLS: usize = 13;

/// A cell position on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(self) -> bool {
        self.row < ROWS && self.col < COLS
    }

    /// Row-major index in `0..52`.
    pub fn index(self) -> usize {
        self.row * COLS + self.col
    }

    pub fn from_index(index: usize) -> Self {
        Self::new(index / COLS, index % COLS)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The 4×13 grid of face-down cards.
///
/// A cell is `Some(card)` while live and `None` once claimed. Claimed cells are
/// never revived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Card>; COLS]; ROWS],
}

impl Board {
    /// Lays out a uniformly shuffled deck row by row.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = full_deck();
        cards.shuffle(rng);
        Self::layout(&cards)
    }

    /// Builds a board from an explicit row-major layout.
    ///
    /// The input must be a permutation of all 52 cards.
    pub fn from_cards(cards: &[Card]) -> Result<Self, GameError> {
        if cards.len() != DECK_SIZE as usize {
            return Err(GameError::InvalidLayout(format!(
                "expected {} cards, got {}",
                DECK_SIZE,
                cards.len()
            )));
        }
        let mut seen = [false; DECK_SIZE as usize];
        for c in cards {
            let slot = &mut seen[c.id() as usize];
            if *slot {
                return Err(GameError::InvalidLayout(format!(
                    "card {} appears twice",
                    c.id()
                )));
            }
            *slot = true;
        }
        Ok(Self::layout(cards))
    }

    fn layout(cards: &[Card]) -> Self {
        let mut cells = [[None; COLS]; ROWS];
        for (i, &c) in cards.iter().enumerate() {
            let loc = Location::from_index(i);
            cells[loc.row][loc.col] = Some(c);
        }
        Self { cells }
    }

    pub fn card_at(&self, loc: Location) -> Result<Option<Card>, GameError> {
        if !loc.in_bounds() {
            return Err(GameError::OutOfBounds {
                row: loc.row,
                col: loc.col,
            });
        }
        Ok(self.cells[loc.row][loc.col])
    }

    /// Returns the card at a live cell, or an error for off-board and claimed cells.
    pub fn live_card(&self, loc: Location) -> Result<Card, GameError> {
        self.card_at(loc)?.ok_or(GameError::AlreadyClaimed {
            row: loc.row,
            col: loc.col,
        })
    }

    pub fn claim(&mut self, loc: Location) -> Result<Card, GameError> {
        let card = self.live_card(loc)?;
        self.cells[loc.row][loc.col] = None;
        Ok(card)
    }

    pub fn is_live(&self, loc: Location) -> bool {
        matches!(self.card_at(loc), Ok(Some(_)))
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_none)
    }

    /// Number of live cells.
    pub fn remaining(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Live cells in row-major order.
    pub fn live_locations(&self) -> Vec<Location> {
        self.cells()
            .filter_map(|(loc, c)| c.map(|_| loc))
            .collect()
    }

    pub fn location_of(&self, card: Card) -> Option<Location> {
        self.cells()
            .find_map(|(loc, c)| (c == Some(card)).then_some(loc))
    }

    /// Cards still on the board, sorted by identifier.
    pub fn remaining_cards(&self) -> Vec<Card> {
        let mut v: Vec<Card> = self.cells.iter().flatten().flatten().copied().collect();
        v.sort();
        v
    }

    /// Cards no longer on the board, sorted by identifier.
    pub fn claimed_cards(&self) -> Vec<Card> {
        let live = self.remaining_cards();
        full_deck()
            .into_iter()
            .filter(|c| live.binary_search(c).is_err())
            .collect()
    }

    /// All cells with their contents, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Location, Option<Card>)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &card)| (Location::new(r, c), card))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ordered() -> Board {
        Board::from_cards(&full_deck()).unwrap()
    }

    #[test]
    fn location_index_round_trips_row_major() {
        assert_eq!(Location::new(1, 0).index(), 13);
        assert_eq!(Location::from_index(51), Location::new(3, 12));
    }

    #[test]
    fn from_cards_rejects_duplicates() {
        let mut cards = full_deck();
        cards[1] = cards[0];
        assert!(matches!(
            Board::from_cards(&cards),
            Err(GameError::InvalidLayout(_))
        ));
    }

    #[test]
    fn from_cards_rejects_short_layouts() {
        let cards = &full_deck()[..10];
        assert!(Board::from_cards(cards).is_err());
    }

    #[test]
    fn claim_twice_is_rejected() {
        let mut b = ordered();
        let loc = Location::new(2, 3);
        assert!(b.claim(loc).is_ok());
        assert_eq!(
            b.claim(loc),
            Err(GameError::AlreadyClaimed { row: 2, col: 3 })
        );
    }

    #[test]
    fn out_of_range_reads_fail() {
        let b = ordered();
        assert_eq!(
            b.card_at(Location::new(4, 0)),
            Err(GameError::OutOfBounds { row: 4, col: 0 })
        );
        assert!(b.card_at(Location::new(0, 13)).is_err());
    }
}
