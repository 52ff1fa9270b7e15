//! The remembering opponent.
//!
//! Each turn it tries, in order:
//! 1. a pair of same-rank cards already in memory, flipped without any randomness;
//! 2. a random live card, followed by a remembered card of the same rank at a
//!    different location;
//! 3. a second random live card.

use crate::{AIOpponent, random_live_cell};
use concentration_engine::board::Location;
use concentration_engine::engine::SelectionContext;

/// How a [`MemoryAI`] arrived at its picks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Selection {
    /// Both picks came straight from memory
    KnownPair,
    /// Random first pick, second pick recalled from memory
    Recalled,
    /// Both picks random
    Guess,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryAI;

impl MemoryAI {
    pub fn new() -> Self {
        Self
    }

    /// Picks two cells and reports which rule produced them.
    pub fn select(&self, ctx: &mut SelectionContext<'_>) -> Option<(Location, Location, Selection)> {
        if let Some((a, b)) = ctx.memory.find_pair() {
            return Some((a, b, Selection::KnownPair));
        }

        let first = random_live_cell(ctx.board, ctx.rng, None)?;
        let first_card = ctx.board.live_card(first).ok()?;
        if let Some(second) = ctx.memory.find_rank_match(first_card.rank(), first) {
            return Some((first, second, Selection::Recalled));
        }

        let second = random_live_cell(ctx.board, ctx.rng, Some(first))?;
        Some((first, second, Selection::Guess))
    }
}

impl AIOpponent for MemoryAI {
    fn choose_pair(&self, ctx: &mut SelectionContext<'_>) -> Option<(Location, Location)> {
        let (first, second, how) = self.select(ctx)?;
        tracing::debug!(first = %first, second = %second, selection = ?how, "memory ai picked");
        Some((first, second))
    }

    fn name(&self) -> &str {
        "MemoryAI"
    }
}
