use serde::{Deserialize, Serialize};

use crate::board::Location;
use crate::cards::Card;
use crate::player::{Player, Scores, Winner};

/// Where the turn engine is within a turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the turn owner's first card
    AwaitingFirstPick,
    /// First card is face-up, waiting for the second
    AwaitingSecondPick { first: Location },
    /// Both cards are face-up, waiting for the match check
    Resolving { first: Location, second: Location },
    /// Every card has been claimed
    GameOver,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::AwaitingFirstPick => "awaiting first pick",
            Phase::AwaitingSecondPick { .. } => "awaiting second pick",
            Phase::Resolving { .. } => "resolving",
            Phase::GameOver => "game over",
        }
    }
}

/// A card turned face-up during a turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Reveal {
    pub location: Location,
    pub card: Card,
}

/// Final score and winner.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Winner,
    pub scores: Scores,
}

impl GameResult {
    pub fn from_scores(scores: Scores) -> Self {
        Self {
            winner: scores.winner(),
            scores,
        }
    }
}

/// Everything that happened when a pair was resolved.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// 1-based turn counter
    pub turn: u32,
    /// Player who flipped the pair
    pub player: Player,
    pub first: Reveal,
    pub second: Reveal,
    pub matched: bool,
    /// Owner of the next turn
    pub next_player: Player,
    /// Scores after this turn
    pub scores: Scores,
    /// Set when this turn claimed the last pair
    pub result: Option<GameResult>,
}
