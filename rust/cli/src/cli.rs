//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "concentration",
    version,
    about = "Play Concentration (Memory) against a computer opponent"
)]
pub struct ConcentrationCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one game against the computer
    Play {
        /// RNG seed for the board and the computer's guesses (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Computer strategy
        #[arg(long, value_enum)]
        ai: Option<Strategy>,
    },
    /// Play complete computer-vs-computer games and report the standings
    Sim {
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
        games: u32,
        /// Base seed; game i uses seed + i
        #[arg(long)]
        seed: Option<u64>,
        /// Strategy in the computer's seat
        #[arg(long, value_enum)]
        ai: Option<Strategy>,
        /// Strategy standing in for the human
        #[arg(long, value_enum, default_value_t = Strategy::Random)]
        opponent: Strategy,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the face-up layout of a shuffled board
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}

/// Computer strategy selectable on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Remembers mismatched cards and plays known pairs first
    Memory,
    /// Flips two random cards every turn
    Random,
}

impl Strategy {
    /// Returns the name understood by `concentration_ai::create_ai`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use concentration_cli::cli::Strategy;
    /// assert_eq!(Strategy::Memory.as_str(), "memory");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Memory => "memory",
            Strategy::Random => "random",
        }
    }
}
