//! # Concentration CLI Library
//!
//! Command-line front end for the Concentration engine: an interactive game
//! against the computer plus a few tools for inspecting seeds and strategies.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["concentration", "play", "--seed", "42"];
//! let code = concentration_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play one game against the computer
//! - `sim`: Play many computer-vs-computer games and report the standings
//! - `deal`: Show a shuffled board face-up
//! - `cfg`: Display current configuration settings

#[macro_use]
mod macros;

use clap::Parser;
use std::io::{BufRead, Write};
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, ConcentrationCli};
use commands::{handle_cfg_command, handle_deal_command, handle_play_command, handle_sim_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "deal", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand
/// handler. `play` reads the human's picks from the process's stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["concentration", "deal", "--seed", "42"];
/// let code = concentration_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`], with the input stream injected.
///
/// ```
/// use std::io::Cursor;
/// let mut stdin = Cursor::new(b"q\n".to_vec());
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = concentration_cli::run_with_input(
///     ["concentration", "play", "--seed", "3"],
///     &mut stdin,
///     &mut out,
///     &mut err,
/// );
/// assert_eq!(code, 0);
/// ```
pub fn run_with_input<I, S>(
    args: I,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ConcentrationCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout with success
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: concentration <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: concentration --help");
                    exit_code::ERROR
                }
            };
        }
    };

    if let Commands::Cfg = cli.cmd {
        return finish(handle_cfg_command(out, err), err);
    }

    // Flags win over the config file and environment
    let cfg = match config::load() {
        Ok(c) => c,
        Err(e) => {
            let _ = ui::write_error(err, &format!("Invalid configuration: {}", e));
            return exit_code::ERROR;
        }
    };
    tracing::debug!(seed = ?cfg.seed, ai = %cfg.ai, "configuration loaded");

    let result = match cli.cmd {
        Commands::Play { seed, ai } => {
            let ai = ai.map_or(cfg.ai.as_str(), |s| s.as_str());
            handle_play_command(seed.or(cfg.seed), ai, out, err, stdin)
        }
        Commands::Sim {
            games,
            seed,
            ai,
            opponent,
            json,
        } => {
            let ai = ai.map_or(cfg.ai.as_str(), |s| s.as_str());
            handle_sim_command(games, seed.or(cfg.seed), ai, opponent.as_str(), json, out, err)
        }
        Commands::Deal { seed } => handle_deal_command(seed.or(cfg.seed), out),
        Commands::Cfg => handle_cfg_command(out, err),
    };
    finish(result, err)
}

fn finish(result: Result<(), CliError>, err: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
