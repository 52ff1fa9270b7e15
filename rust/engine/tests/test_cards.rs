use concentration_engine::cards::{
    display_name, full_deck, rank_of, suit_of, Card, Rank, Suit, DECK_SIZE, RANKS_PER_SUIT,
};
use std::collections::HashSet;

#[test]
fn full_deck_has_52_unique_names() {
    let deck = full_deck();
    assert_eq!(deck.len(), 52);
    let names: HashSet<String> = deck.iter().map(|&c| display_name(c)).collect();
    assert_eq!(names.len(), 52);
}

#[test]
fn rank_is_invariant_across_suits() {
    for id in 0..DECK_SIZE {
        let base = Card::new(id).unwrap();
        let mut k = 1;
        while id + RANKS_PER_SUIT * k < DECK_SIZE {
            let other = Card::new(id + RANKS_PER_SUIT * k).unwrap();
            assert_eq!(rank_of(base), rank_of(other), "ids {} and {}", id, other.id());
            assert_ne!(suit_of(base), suit_of(other));
            k += 1;
        }
    }
}

#[test]
fn identifier_is_suit_major() {
    for card in full_deck() {
        let rank = rank_of(card);
        let suit = suit_of(card);
        assert_eq!(card.id(), suit.index() * RANKS_PER_SUIT + rank.index());
        assert_eq!(Rank::from_index(rank.index()), rank);
        assert_eq!(Suit::from_index(suit.index()), suit);
    }
}

#[test]
fn each_rank_appears_once_per_suit() {
    for suit_idx in 0..4u8 {
        let ranks: HashSet<Rank> = (0..RANKS_PER_SUIT)
            .map(|r| Card::new(suit_idx * RANKS_PER_SUIT + r).unwrap().rank())
            .collect();
        assert_eq!(ranks.len(), 13);
    }
}

#[test]
fn identifier_table_corners() {
    let cases = [
        (0, "Ace of diamonds"),
        (12, "King of diamonds"),
        (13, "Ace of clubs"),
        (23, "Jack of clubs"),
        (37, "Queen of hearts"),
        (40, "2 of spades"),
        (48, "10 of spades"),
    ];
    for (id, name) in cases {
        assert_eq!(display_name(Card::new(id).unwrap()), name);
    }
    assert_eq!(Card::new(26).unwrap().suit(), Suit::Hearts);
}

#[test]
fn cards_serialize_as_identifiers() {
    let json = serde_json::to_string(&Card::new(18).unwrap()).unwrap();
    assert_eq!(json, "18");
}
