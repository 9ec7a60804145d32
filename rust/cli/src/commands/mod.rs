//! Command handlers for the `ipoker` binary.
//!
//! Each subcommand lives in its own module and exposes
//! `handle_COMMAND_command(...) -> Result<(), CliError>`. Output streams are
//! passed in as `&mut dyn Write` so handlers can be driven from tests.

mod cfg;
mod deal;
mod game;
mod score;
mod tournament;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use game::handle_game_command;
pub use score::handle_score_command;
pub use tournament::handle_tournament_command;

use indian_poker_ai::{AGENT_KINDS, Agent, create_agent};

use crate::error::CliError;

/// Build a named agent, rejecting unknown names with the list of valid ones.
fn build_agent(kind: &str, seed: u64) -> Result<Box<dyn Agent>, CliError> {
    create_agent(kind, seed).ok_or_else(|| {
        CliError::InvalidInput(format!(
            "Unknown agent '{}' (expected one of: {})",
            kind,
            AGENT_KINDS.join(", ")
        ))
    })
}

/// Agents for seats A and B. Randomised agents on the two seats draw from
/// different streams even when both derive from `seed`.
fn build_pair(ai_a: &str, ai_b: &str, seed: u64) -> Result<[Box<dyn Agent>; 2], CliError> {
    Ok([build_agent(ai_a, seed)?, build_agent(ai_b, !seed)?])
}
