use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Points awarded for each matched pair.
pub const POINTS_PER_PAIR: u32 = 2;

/// One of the two competitors.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// The person at the keyboard
    Human,
    /// The memory-driven opponent
    Computer,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Player::Human => "human",
            Player::Computer => "computer",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cards claimed by each player.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub human: u32,
    pub computer: u32,
}

impl Scores {
    pub fn of(&self, player: Player) -> u32 {
        match player {
            Player::Human => self.human,
            Player::Computer => self.computer,
        }
    }

    pub fn award_pair(&mut self, player: Player) {
        match player {
            Player::Human => self.human += POINTS_PER_PAIR,
            Player::Computer => self.computer += POINTS_PER_PAIR,
        }
    }

    pub fn total(&self) -> u32 {
        self.human + self.computer
    }

    pub fn winner(&self) -> Winner {
        match self.human.cmp(&self.computer) {
            Ordering::Greater => Winner::Human,
            Ordering::Less => Winner::Computer,
            Ordering::Equal => Winner::Tie,
        }
    }
}

/// Final standing of a finished game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Human,
    Computer,
    Tie,
}
