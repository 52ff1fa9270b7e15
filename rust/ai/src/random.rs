//! Memoryless opponent: two uniformly random live cells every turn.

use crate::{AIOpponent, random_live_cell};
use concentration_engine::board::Location;
use concentration_engine::engine::SelectionContext;

#[derive(Debug, Clone, Default)]
pub struct RandomAI;

impl RandomAI {
    pub fn new() -> Self {
        Self
    }
}

impl AIOpponent for RandomAI {
    fn choose_pair(&self, ctx: &mut SelectionContext<'_>) -> Option<(Location, Location)> {
        let first = random_live_cell(ctx.board, ctx.rng, None)?;
        let second = random_live_cell(ctx.board, ctx.rng, Some(first))?;
        Some((first, second))
    }

    fn name(&self) -> &str {
        "RandomAI"
    }
}
