//! Simulation command: complete games played by two computer strategies.
//!
//! The strategy under test takes the computer's seat; a second strategy
//! stands in for the human. Game `i` is seeded with `seed + i`, so a run is
//! reproducible from its base seed.

use crate::commands::take_ai_turn;
use crate::error::CliError;
use crate::ui;
use concentration_ai::{AIOpponent, create_ai};
use concentration_engine::engine::Engine;
use concentration_engine::player::{Player, Winner};
use serde::Serialize;
use std::io::Write;

/// Aggregate standings over a simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimSummary {
    pub games: u32,
    pub base_seed: u64,
    pub computer_wins: u32,
    pub opponent_wins: u32,
    pub ties: u32,
    pub computer_cards: u64,
    pub opponent_cards: u64,
    pub total_turns: u64,
}

impl SimSummary {
    pub fn average_turns(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_turns as f64 / self.games as f64
        }
    }
}

/// Plays `games` complete games and tallies the results.
pub fn simulate(
    games: u32,
    base_seed: u64,
    computer: &dyn AIOpponent,
    opponent: &dyn AIOpponent,
) -> Result<SimSummary, CliError> {
    let mut summary = SimSummary {
        games,
        base_seed,
        ..SimSummary::default()
    };
    for i in 0..games {
        let mut engine = Engine::new(Some(base_seed.wrapping_add(u64::from(i))));
        while !engine.is_over() {
            let seat: &dyn AIOpponent = match engine.current_player() {
                Player::Computer => computer,
                Player::Human => opponent,
            };
            take_ai_turn(&mut engine, seat)?;
        }
        let result = engine
            .result()
            .ok_or_else(|| CliError::Engine("finished game has no result".into()))?;
        match result.winner {
            Winner::Computer => summary.computer_wins += 1,
            Winner::Human => summary.opponent_wins += 1,
            Winner::Tie => summary.ties += 1,
        }
        summary.computer_cards += u64::from(result.scores.computer);
        summary.opponent_cards += u64::from(result.scores.human);
        summary.total_turns += u64::from(engine.turns_played());
        tracing::debug!(game = i, turns = engine.turns_played(), winner = ?result.winner, "simulated game");
    }
    Ok(summary)
}

/// Handle the sim command.
///
/// # Arguments
///
/// * `games` - Number of games to play (must be >= 1)
/// * `seed` - Base RNG seed (default: random)
/// * `ai` - Strategy in the computer's seat
/// * `opponent` - Strategy standing in for the human
/// * `json` - Emit the summary as JSON instead of text
pub fn handle_sim_command(
    games: u32,
    seed: Option<u64>,
    ai: &str,
    opponent: &str,
    json: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let computer = create_ai(ai).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let stand_in = create_ai(opponent).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let base_seed = seed.unwrap_or_else(rand::random);

    let summary = simulate(games, base_seed, computer.as_ref(), stand_in.as_ref())?;

    if json {
        let value = serde_json::json!({
            "ai": ai,
            "opponent": opponent,
            "summary": summary,
            "average_turns": summary.average_turns(),
        });
        let text = serde_json::to_string_pretty(&value).map_err(std::io::Error::other)?;
        writeln!(out, "{}", text)?;
    } else {
        writeln!(
            out,
            "sim: games={} seed={} ai={} opponent={}",
            games, base_seed, ai, opponent
        )?;
        writeln!(out, "Computer ({}) wins: {}", ai, summary.computer_wins)?;
        writeln!(out, "Opponent ({}) wins: {}", opponent, summary.opponent_wins)?;
        writeln!(out, "Ties: {}", summary.ties)?;
        writeln!(
            out,
            "Cards claimed: computer {} / opponent {}",
            summary.computer_cards, summary.opponent_cards
        )?;
        writeln!(out, "Average turns per game: {:.1}", summary.average_turns())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulate_accounts_for_every_card() {
        let memory = create_ai("memory").unwrap();
        let random = create_ai("random").unwrap();
        let summary = simulate(5, 10, memory.as_ref(), random.as_ref()).unwrap();
        assert_eq!(summary.games, 5);
        assert_eq!(
            summary.computer_wins + summary.opponent_wins + summary.ties,
            5
        );
        assert_eq!(summary.computer_cards + summary.opponent_cards, 5 * 52);
        assert!(summary.total_turns >= 5 * 26);
    }

    #[test]
    fn test_same_seed_same_summary() {
        let memory = create_ai("memory").unwrap();
        let random = create_ai("random").unwrap();
        let a = simulate(3, 123, memory.as_ref(), random.as_ref()).unwrap();
        let b = simulate(3, 123, memory.as_ref(), random.as_ref()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_games_is_an_error() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_sim_command(0, Some(1), "memory", "random", false, &mut out, &mut err);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(String::from_utf8(err).unwrap().contains("games must be >= 1"));
    }

    #[test]
    fn test_json_summary_is_valid() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_sim_command(2, Some(9), "memory", "memory", true, &mut out, &mut err).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["summary"]["games"], 2);
        assert_eq!(v["ai"], "memory");
        let cards = v["summary"]["computer_cards"].as_u64().unwrap()
            + v["summary"]["opponent_cards"].as_u64().unwrap();
        assert_eq!(cards, 104);
    }
}
