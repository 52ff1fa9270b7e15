use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cards in the deck.
pub const DECK_SIZE: u8 = 52;
/// Number of ranks in each suit.
pub const RANKS_PER_SUIT: u8 = 13;

/// One of the four suits, in identifier order.
/// Identifiers `0..13` are diamonds, `13..26` clubs, `26..39` hearts, `39..52` spades.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    pub fn from_index(v: u8) -> Suit {
        match v {
            0 => Suit::Diamonds,
            1 => Suit::Clubs,
            2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
        }
    }
}

/// Face value of a card. Two cards match when their ranks are equal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (0)
    Ace = 0,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (10)
    Jack,
    /// Queen (11)
    Queen,
    /// King (12)
    King,
}

impl Rank {
    pub fn from_index(v: u8) -> Rank {
        match v {
            0 => Rank::Ace,
            1 => Rank::Two,
            2 => Rank::Three,
            3 => Rank::Four,
            4 => Rank::Five,
            5 => Rank::Six,
            6 => Rank::Seven,
            7 => Rank::Eight,
            8 => Rank::Nine,
            9 => Rank::Ten,
            10 => Rank::Jack,
            11 => Rank::Queen,
            _ => Rank::King,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }
}

/// A card identified by its position in the unshuffled deck.
///
/// The identifier fully determines the card: `rank = id % 13`, `suit = id / 13`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card(u8);

impl Card {
    /// Returns `None` when `id` is outside `0..52`.
    pub fn new(id: u8) -> Option<Card> {
        (id < DECK_SIZE).then_some(Card(id))
    }

    pub fn id(self) -> u8 {
        self.0
    }

    pub fn rank(self) -> Rank {
        rank_of(self)
    }

    pub fn suit(self) -> Suit {
        suit_of(self)
    }

    pub fn matches(self, other: Card) -> bool {
        self.rank() == other.rank()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank().name(), self.suit().name())
    }
}

pub fn rank_of(card: Card) -> Rank {
    Rank::from_index(card.0 % RANKS_PER_SUIT)
}

pub fn suit_of(card: Card) -> Suit {
    Suit::from_index(card.0 / RANKS_PER_SUIT)
}

/// Human-readable name such as `"Queen of hearts"`.
pub fn display_name(card: Card) -> String {
    card.to_string()
}

pub fn full_deck() -> Vec<Card> {
    (0..DECK_SIZE).map(Card).collect()
}
