//! # concentration-ai: Computer Opponents for Concentration
//!
//! Strategies that choose which two cards the computer flips on its turn.
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait every strategy implements
//! - [`memory`] - The remembering opponent used in normal play
//! - [`random`] - Memoryless opponent, used as a stand-in in simulations
//! - [`create_ai`] - Factory building a strategy from its name
//!
//! ## Quick Start
//!
//! ```rust
//! use concentration_ai::create_ai;
//! use concentration_engine::engine::Engine;
//!
//! let ai = create_ai("memory").expect("known strategy");
//! let mut engine = Engine::new(Some(42));
//!
//! let (first, second) = ai
//!     .choose_pair(&mut engine.selection_context())
//!     .expect("fresh board has live cells");
//! assert_ne!(first, second);
//! engine.play_turn(first, second).expect("selector picks legal cells");
//! ```

use concentration_engine::board::{Board, Location};
use concentration_engine::engine::SelectionContext;
use rand::RngCore;
use rand::seq::IndexedRandom;
use thiserror::Error;

pub mod memory;
pub mod random;

/// Names accepted by [`create_ai`].
pub const AI_NAMES: &[&str] = &["memory", "random"];

/// A computer strategy for picking two cards per turn.
///
/// # Example Implementation
///
/// ```rust
/// use concentration_ai::AIOpponent;
/// use concentration_engine::board::Location;
/// use concentration_engine::engine::SelectionContext;
///
/// struct FirstTwo;
///
/// impl AIOpponent for FirstTwo {
///     fn choose_pair(&self, ctx: &mut SelectionContext<'_>) -> Option<(Location, Location)> {
///         let live = ctx.board.live_locations();
///         Some((*live.first()?, *live.get(1)?))
///     }
///
///     fn name(&self) -> &str {
///         "FirstTwo"
///     }
/// }
/// ```
pub trait AIOpponent: Send + Sync {
    /// Chooses two distinct live cells.
    ///
    /// Returns `None` only when fewer than two live cells remain, which a
    /// game in progress never has.
    fn choose_pair(&self, ctx: &mut SelectionContext<'_>) -> Option<(Location, Location)>;

    /// Return the name/identifier of this AI implementation.
    fn name(&self) -> &str;
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown AI type: {0} (expected one of: memory, random)")]
pub struct UnknownAi(pub String);

/// Factory function to create AI opponents by type string.
///
/// # Example
///
/// ```rust
/// use concentration_ai::create_ai;
///
/// let ai = create_ai("memory").unwrap();
/// assert_eq!(ai.name(), "MemoryAI");
/// assert!(create_ai("psychic").is_err());
/// ```
pub fn create_ai(ai_type: &str) -> Result<Box<dyn AIOpponent>, UnknownAi> {
    match ai_type {
        "memory" => Ok(Box::new(memory::MemoryAI::new())),
        "random" => Ok(Box::new(random::RandomAI::new())),
        _ => Err(UnknownAi(ai_type.to_string())),
    }
}

/// Uniformly picks a live cell other than `exclude`.
pub(crate) fn random_live_cell(
    board: &Board,
    rng: &mut dyn RngCore,
    exclude: Option<Location>,
) -> Option<Location> {
    let candidates: Vec<Location> = board
        .live_locations()
        .into_iter()
        .filter(|&loc| Some(loc) != exclude)
        .collect();
    candidates.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_knows_every_listed_name() {
        for name in AI_NAMES {
            assert!(create_ai(name).is_ok(), "{} should be constructible", name);
        }
    }

    #[test]
    fn factory_rejects_unknown_names() {
        let err = create_ai("baseline").err().unwrap();
        assert_eq!(err, UnknownAi("baseline".into()));
        assert!(err.to_string().contains("baseline"));
    }
}
