//! The computer's recollection of cards it has seen but not yet matched.

use serde::{Deserialize, Serialize};

use crate::board::Location;
use crate::cards::{Card, Rank};

/// Cards seen face-up in mismatched turns, keyed by card and ordered by first sighting.
///
/// Scans walk entries in insertion order, so tie-breaks between several known
/// pairs are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStore {
    entries: Vec<(Card, Location)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records where `card` lies. A card already remembered keeps its place in
    /// the scan order and gets the new location.
    pub fn remember(&mut self, card: Card, loc: Location) {
        match self.entries.iter_mut().find(|(c, _)| *c == card) {
            Some(entry) => entry.1 = loc,
            None => self.entries.push((card, loc)),
        }
    }

    pub fn forget(&mut self, card: Card) -> Option<Location> {
        let pos = self.entries.iter().position(|(c, _)| *c == card)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn location_of(&self, card: Card) -> Option<Location> {
        self.entries
            .iter()
            .find_map(|&(c, loc)| (c == card).then_some(loc))
    }

    pub fn contains(&self, card: Card) -> bool {
        self.location_of(card).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Card, Location)> + '_ {
        self.entries.iter().copied()
    }

    /// Finds two remembered cards of the same rank.
    ///
    /// Walks entries in order and returns the first two locations of the first
    /// rank that has at least two members.
    pub fn find_pair(&self) -> Option<(Location, Location)> {
        self.entries.iter().enumerate().find_map(|(i, &(card, loc))| {
            self.entries[i + 1..]
                .iter()
                .find(|(other, _)| other.rank() == card.rank())
                .map(|&(_, other_loc)| (loc, other_loc))
        })
    }

    /// First remembered location holding a card of `rank`, skipping `exclude`.
    pub fn find_rank_match(&self, rank: Rank, exclude: Location) -> Option<Location> {
        self.entries
            .iter()
            .find(|&&(c, loc)| c.rank() == rank && loc != exclude)
            .map(|&(_, loc)| loc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u8) -> Card {
        Card::new(id).unwrap()
    }

    #[test]
    fn remember_overwrites_in_place() {
        let mut m = MemoryStore::new();
        m.remember(card(1), Location::new(0, 0));
        m.remember(card(2), Location::new(0, 1));
        m.remember(card(1), Location::new(3, 3));
        assert_eq!(m.len(), 2);
        let order: Vec<Card> = m.iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec![card(1), card(2)]);
        assert_eq!(m.location_of(card(1)), Some(Location::new(3, 3)));
    }

    #[test]
    fn forget_missing_card_is_noop() {
        let mut m = MemoryStore::new();
        m.remember(card(4), Location::new(1, 1));
        assert_eq!(m.forget(card(5)), None);
        assert_eq!(m.len(), 1);
        assert_eq!(m.forget(card(4)), Some(Location::new(1, 1)));
        assert!(m.is_empty());
    }

    #[test]
    fn find_pair_needs_two_of_a_rank() {
        let mut m = MemoryStore::new();
        m.remember(card(0), Location::new(0, 0));
        m.remember(card(1), Location::new(0, 1));
        assert_eq!(m.find_pair(), None);
        m.remember(card(14), Location::new(2, 2));
        assert_eq!(
            m.find_pair(),
            Some((Location::new(0, 1), Location::new(2, 2)))
        );
    }

    #[test]
    fn find_pair_prefers_earliest_rank_group() {
        let mut m = MemoryStore::new();
        m.remember(card(7), Location::new(0, 0));
        m.remember(card(3), Location::new(0, 1));
        m.remember(card(16), Location::new(0, 2));
        m.remember(card(20), Location::new(0, 3));
        // 7 and 20 are both rank 8; 3 and 16 are both rank 4. 7 was seen first.
        assert_eq!(
            m.find_pair(),
            Some((Location::new(0, 0), Location::new(0, 3)))
        );
    }

    #[test]
    fn find_rank_match_skips_excluded_location() {
        let mut m = MemoryStore::new();
        let first = Location::new(1, 4);
        m.remember(card(9), first);
        assert_eq!(m.find_rank_match(Rank::Ten, first), None);
        m.remember(card(48), Location::new(3, 0));
        assert_eq!(
            m.find_rank_match(Rank::Ten, first),
            Some(Location::new(3, 0))
        );
    }
}
