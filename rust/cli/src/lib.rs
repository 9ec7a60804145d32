//! # Indian Poker CLI Library
//!
//! Command-line front end for the Indian Poker engine: run tournaments
//! between built-in agents, play and record single games, inspect deals and
//! hand scores, and show the resolved configuration.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments, executes the subcommand and returns the exit
//! code. Output goes to the writers it is given, so it can be driven from
//! tests with in-memory buffers.
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = indian_poker_cli::run(["ipoker", "score", "4", "5", "6"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert_eq!(String::from_utf8(out).unwrap(), "Score: 26 (straight or trips)\n");
//! ```
//!
//! ## Available Subcommands
//!
//! - `tournament`: Play a seeded series of games and report points
//! - `game`: Play one game, optionally writing every round as JSONL
//! - `score`: Score a private card against two community cards
//! - `deal`: Show the cards a seed deals
//! - `cfg`: Display the resolved configuration and its sources

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{Commands, IpokerCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_game_command, handle_score_command,
    handle_tournament_command,
};
use indian_poker_engine::player::Seat;

pub use error::CliError;

const COMMANDS: &[&str] = &["tournament", "game", "score", "deal", "cfg"];

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: [`exit_code::SUCCESS`] on success, [`exit_code::ERROR`] for
/// argument, configuration and command failures.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match IpokerCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e, out, err),
    };

    match dispatch(cli.cmd, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn report_parse_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version print to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let _ = write_usage(e, err);
    exit_code::ERROR
}

fn write_usage(e: clap::Error, err: &mut dyn Write) -> std::io::Result<()> {
    writeln!(err, "{}", e)?;
    writeln!(err)?;
    writeln!(err, "Indian Poker CLI")?;
    writeln!(err, "Usage: ipoker <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: ipoker --help")
}

fn dispatch(cmd: Commands, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    match cmd {
        Commands::Cfg => {
            let resolved = config::load_with_sources()?;
            resolved.validate()?;
            handle_cfg_command(&resolved, out)
        }
        Commands::Tournament {
            ai_a,
            ai_b,
            games,
            seed,
            table,
            output,
        } => {
            let mut resolved = config::load_with_sources()?;
            resolved.apply_seed(seed);
            resolved.apply_games(games);
            resolved.apply_table(&table);
            resolved.validate()?;
            handle_tournament_command(
                &ai_a,
                &ai_b,
                resolved.config.tournament_config(),
                output.as_deref(),
                out,
                err,
            )
        }
        Commands::Game {
            ai_a,
            ai_b,
            seed,
            first,
            table,
            output,
            verbose,
        } => {
            let mut resolved = config::load_with_sources()?;
            resolved.apply_seed(seed);
            resolved.apply_table(&table);
            resolved.validate()?;
            let seed = resolved.config.seed;
            let first = first
                .map(Seat::from)
                .unwrap_or(Seat::from_a_first(seed % 2 == 0));
            handle_game_command(
                &ai_a,
                &ai_b,
                seed,
                first,
                resolved.config.game_config(),
                output.as_deref(),
                verbose,
                out,
            )
        }
        Commands::Score {
            card,
            common1,
            common2,
        } => handle_score_command(card, common1, common2, out),
        Commands::Deal { seed, rounds } => {
            let mut resolved = config::load_with_sources()?;
            resolved.apply_seed(seed);
            handle_deal_command(resolved.config.seed, rounds, out)
        }
    }
}
