//! # Play Command
//!
//! Interactive game of Concentration against the computer.
//!
//! The human's turns read `row col` picks from the injected input stream and
//! re-prompt, without touching the game, until a pick is legal. The
//! computer's turns come from the selected [`AIOpponent`]. `q`, `quit` or end
//! of input leaves the game early.

use crate::commands::take_ai_turn;
use crate::error::CliError;
use crate::formatters::{format_board, format_result};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_pick, pick_error_message};
use concentration_ai::{AIOpponent, create_ai};
use concentration_engine::board::Location;
use concentration_engine::engine::Engine;
use concentration_engine::game::TurnOutcome;
use concentration_engine::player::Player;
use std::io::{BufRead, Write};

const FIRST_PROMPT: &str = "Enter the location of the first card you pick (row col) -> ";
const SECOND_PROMPT: &str = "Enter the location of the second card you pick (row col) -> ";

/// Handle the play command: one interactive game.
///
/// # Arguments
///
/// * `seed` - RNG seed for the board, coin flip and computer guesses (default: random)
/// * `ai` - Computer strategy name (see `concentration_ai::AI_NAMES`)
/// * `out` - Output stream for the board and turn reports
/// * `err` - Error stream for rejected input
/// * `stdin` - Input stream for the human's picks
///
/// # Returns
///
/// * `Ok(())` when the game finishes or the player quits
/// * `Err(CliError)` for an unknown strategy or I/O failure
pub fn handle_play_command(
    seed: Option<u64>,
    ai: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let opponent = create_ai(ai).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let mut engine = Engine::new(seed);

    writeln!(out, "Welcome to a game of Concentration!!")?;
    writeln!(out, "play: seed={} ai={}", engine.seed(), ai)?;
    let opener = match engine.current_player() {
        Player::Human => "You go first.",
        Player::Computer => "The computer goes first.",
    };
    writeln!(out, "{}", opener)?;
    tracing::info!(seed = engine.seed(), ai, first = %engine.current_player(), "session started");

    while !engine.is_over() {
        let outcome = match engine.current_player() {
            Player::Human => match human_turn(&mut engine, stdin, out, err)? {
                Some(outcome) => outcome,
                None => {
                    let s = engine.scores();
                    writeln!(out)?;
                    writeln!(
                        out,
                        "Game abandoned after {} turns. Score: You {} / Computer {}",
                        engine.turns_played(),
                        s.human,
                        s.computer
                    )?;
                    tracing::info!(turns = engine.turns_played(), "session abandoned");
                    return Ok(());
                }
            },
            Player::Computer => computer_turn(&mut engine, opponent.as_ref(), out)?,
        };
        report_outcome(&outcome, out)?;
    }

    if let Some(result) = engine.result() {
        writeln!(out)?;
        writeln!(out, "{}", format_result(&result))?;
    }
    Ok(())
}

/// Runs one human turn. `None` means the player left the game.
fn human_turn(
    engine: &mut Engine,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Option<TurnOutcome>, CliError> {
    writeln!(out)?;
    write!(out, "{}", format_board(engine.board()))?;
    writeln!(out, "{}", ui::turn_banner("You"))?;

    let Some(first) = prompt_pick(engine, FIRST_PROMPT, stdin, out, err)? else {
        return Ok(None);
    };
    let card = engine.pick_first(first)?;
    writeln!(out, "The card you selected: {}", card)?;

    let Some(second) = prompt_pick(engine, SECOND_PROMPT, stdin, out, err)? else {
        return Ok(None);
    };
    let card = engine.pick_second(second)?;
    writeln!(out, "The card you selected: {}", card)?;

    Ok(Some(engine.resolve()?))
}

/// Prompts until the input names a legal pick for the current phase.
fn prompt_pick(
    engine: &Engine,
    prompt: &str,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Option<Location>, CliError> {
    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;
        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            ui::display_warning(err, "input closed")?;
            return Ok(None);
        };
        match parse_pick(&line) {
            ParseResult::Pick(loc) => match engine.check_pick(loc) {
                Ok(_) => return Ok(Some(loc)),
                Err(e) => ui::write_error(err, &pick_error_message(&e))?,
            },
            ParseResult::Quit => return Ok(None),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
}

fn computer_turn(
    engine: &mut Engine,
    ai: &dyn AIOpponent,
    out: &mut dyn Write,
) -> Result<TurnOutcome, CliError> {
    writeln!(out)?;
    writeln!(out, "{}", ui::turn_banner("Computer"))?;
    let outcome = take_ai_turn(engine, ai)?;
    writeln!(
        out,
        "First choice: {} {}",
        outcome.first.card, outcome.first.location
    )?;
    writeln!(
        out,
        "Second choice: {} {}",
        outcome.second.card, outcome.second.location
    )?;
    Ok(outcome)
}

fn report_outcome(outcome: &TurnOutcome, out: &mut dyn Write) -> Result<(), CliError> {
    if outcome.matched {
        writeln!(out, "MATCH")?;
        writeln!(
            out,
            "Score: You {} / Computer {}",
            outcome.scores.human, outcome.scores.computer
        )?;
    } else {
        writeln!(out, "NOT a match")?;
    }
    Ok(())
}
