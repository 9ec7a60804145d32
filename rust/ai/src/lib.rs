//! # indian-poker-ai: Agents for Indian Poker
//!
//! Provides concrete betting strategies behind the engine's
//! [`Agent`] capability, plus a factory that builds them by name.
//!
//! ## Core Components
//!
//! - [`calling::CallingAgent`] - Always matches the current bet
//! - [`baseline::BaselineAgent`] - Equity-driven strategy over the unseen cards
//! - [`random::RandomAgent`] - Seeded random strategy for noise and fuzzing
//! - [`scripted::ScriptedAgent`] - Replays a fixed list of bets
//! - [`create_agent`] - Factory function for creating agents by name
//!
//! ## Quick Start
//!
//! ```rust
//! use indian_poker_ai::create_agent;
//! use indian_poker_engine::config::TournamentConfig;
//! use indian_poker_engine::tournament::Tournament;
//!
//! let a = create_agent("baseline", 0).expect("known agent");
//! let b = create_agent("calling", 0).expect("known agent");
//! let config = TournamentConfig { num_games: 4, ..TournamentConfig::default() };
//! let mut tournament = Tournament::new(a, b, config).unwrap();
//! let report = tournament.play_tournament().unwrap();
//! assert_eq!(report.games.len(), 4);
//! ```

pub use indian_poker_engine::agent::{Agent, VisibleState};

pub mod baseline;
pub mod calling;
pub mod random;
pub mod scripted;

/// Names accepted by [`create_agent`].
pub const AGENT_KINDS: &[&str] = &["calling", "baseline", "random"];

/// Factory function to create agents by name.
///
/// `seed` is only used by agents with internal randomness (`"random"`).
/// Returns `None` for unknown names.
///
/// # Example
///
/// ```rust
/// use indian_poker_ai::create_agent;
///
/// let agent = create_agent("baseline", 0).unwrap();
/// assert_eq!(agent.name(), "baseline");
/// assert!(create_agent("telepath", 0).is_none());
/// ```
pub fn create_agent(kind: &str, seed: u64) -> Option<Box<dyn Agent>> {
    match kind {
        "calling" => Some(Box::new(calling::CallingAgent)),
        "baseline" => Some(Box::new(baseline::BaselineAgent::new())),
        "random" => Some(Box::new(random::RandomAgent::new(seed))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_kind_is_constructible() {
        for kind in AGENT_KINDS {
            let agent = create_agent(kind, 1).expect("listed kind");
            assert_eq!(agent.name(), *kind);
        }
    }

    #[test]
    fn unknown_kind_is_none() {
        assert!(create_agent("", 0).is_none());
        assert!(create_agent("Baseline", 0).is_none());
    }
}
