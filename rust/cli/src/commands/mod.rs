//! Command handler modules for the Concentration CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: output streams (`&mut dyn Write`) and, for `play`,
//!   the input stream (`&mut dyn BufRead`) are passed in
//! - Error propagation: all errors propagated via `CliError`

use crate::error::CliError;
use concentration_ai::AIOpponent;
use concentration_engine::engine::Engine;
use concentration_engine::game::TurnOutcome;

pub mod cfg;
pub mod deal;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;

/// Lets `ai` choose a pair for the current turn owner and resolves it.
pub(crate) fn take_ai_turn(engine: &mut Engine, ai: &dyn AIOpponent) -> Result<TurnOutcome, CliError> {
    let (first, second) = ai
        .choose_pair(&mut engine.selection_context())
        .ok_or_else(|| CliError::Engine(format!("{} found no pair of live cards", ai.name())))?;
    Ok(engine.play_turn(first, second)?)
}
