//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use indian_poker_engine::player::Seat;

#[derive(Parser, Debug)]
#[command(name = "ipoker", version, about = "Indian Poker simulator")]
pub struct IpokerCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Table parameters that override the resolved configuration.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct TableArgs {
    /// Chips each player starts a game with
    #[arg(long)]
    pub starting_chips: Option<i64>,
    /// Blind posted by both players every round
    #[arg(long)]
    pub blind: Option<i64>,
    /// Round cap per game; reaching it is a draw
    #[arg(long)]
    pub max_length: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a seeded tournament between two agents
    Tournament {
        /// Agent playing seat A
        #[arg(long, default_value = "baseline")]
        ai_a: String,
        /// Agent playing seat B
        #[arg(long, default_value = "calling")]
        ai_b: String,
        /// Number of games
        #[arg(long)]
        games: Option<u64>,
        /// Seed of the first game
        #[arg(long)]
        seed: Option<u64>,
        #[command(flatten)]
        table: TableArgs,
        /// Write the full report as JSON to this path
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Play one game and optionally record every round as JSONL
    Game {
        #[arg(long, default_value = "baseline")]
        ai_a: String,
        #[arg(long, default_value = "calling")]
        ai_b: String,
        #[arg(long)]
        seed: Option<u64>,
        /// Seat acting first in the opening round; defaults to A on even seeds
        #[arg(long, value_enum)]
        first: Option<FirstSeat>,
        #[command(flatten)]
        table: TableArgs,
        /// JSONL file receiving one record per round
        #[arg(long)]
        output: Option<PathBuf>,
        /// Print the cards and resolution of every round
        #[arg(long)]
        verbose: bool,
    },
    /// Score a private card against two community cards
    Score {
        card: u8,
        common1: u8,
        common2: u8,
    },
    /// Show the cards a seed deals
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: u32,
    },
    /// Display the resolved configuration and the source of each value
    Cfg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstSeat {
    A,
    B,
}

impl From<FirstSeat> for Seat {
    fn from(seat: FirstSeat) -> Self {
        match seat {
            FirstSeat::A => Seat::A,
            FirstSeat::B => Seat::B,
        }
    }
}
