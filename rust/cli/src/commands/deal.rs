//! Deal command handler.
//!
//! Shuffles a board exactly as `play` would for the same seed and prints it
//! face-up. Useful for checking a seed before playing it.

use crate::error::CliError;
use crate::formatters::format_layout;
use concentration_engine::engine::Engine;
use std::io::Write;

/// Handle the deal command.
///
/// # Examples
///
/// ```ignore
/// // Internal command handler - not part of public API
/// use concentration_cli::commands::deal::handle_deal_command;
/// let mut out = Vec::new();
/// handle_deal_command(Some(42), &mut out).unwrap();
/// ```
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let engine = Engine::new(Some(base_seed));
    writeln!(out, "deal: seed={}", base_seed)?;
    writeln!(out, "First player: {}", engine.current_player())?;
    write!(out, "{}", format_layout(engine.board()))?;
    Ok(())
}
