use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::agent::Agent;
use crate::config::GameConfig;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::logger::{RoundOutcome, RoundRecord};
use crate::player::{Chips, Points, Seat};
use crate::round::RoundEngine;

/// Why a game stopped.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EndReason {
    /// One stack reached zero or below
    Elimination { winner: Seat },
    /// The round cap was hit first
    RoundLimit,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub points: Points,
    pub rounds: u64,
    /// Final stacks of A and B
    pub chips: [Chips; 2],
    pub reason: EndReason,
}

/// A single game between two seats: rounds are played until a stack is
/// exhausted or the round cap is reached.
///
/// # Examples
///
/// ```
/// use indian_poker_engine::agent::{Agent, VisibleState};
/// use indian_poker_engine::config::GameConfig;
/// use indian_poker_engine::game::Game;
///
/// struct Caller;
/// impl Agent for Caller {
///     fn reset(&mut self) {}
///     fn play(&mut self, s: &VisibleState) -> i64 { s.current_bet() }
/// }
///
/// let (mut a, mut b) = (Caller, Caller);
/// let mut game = Game::new(7, &mut a, &mut b, true, GameConfig::default()).unwrap();
/// let outcome = game.play_game();
/// assert_eq!(outcome.chips[0] + outcome.chips[1], 40);
/// ```
pub struct Game<'a> {
    seed: u64,
    engine: RoundEngine,
    max_length: u64,
    deck: Deck,
    agents: [&'a mut dyn Agent; 2],
    chips: [Chips; 2],
    first: Seat,
    rounds: u64,
    history: Option<Vec<RoundRecord>>,
}

impl<'a> Game<'a> {
    pub fn new(
        seed: u64,
        player_a: &'a mut dyn Agent,
        player_b: &'a mut dyn Agent,
        a_first: bool,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            seed,
            engine: RoundEngine::new(config.blind),
            max_length: config.max_length,
            deck: Deck::new_with_seed(seed),
            agents: [player_a, player_b],
            chips: [config.starting_chips, config.starting_chips],
            first: Seat::from_a_first(a_first),
            rounds: 0,
            history: None,
        })
    }

    /// Keep a [`RoundRecord`] for every round played.
    pub fn with_history(mut self) -> Self {
        self.history = Some(Vec::new());
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn chips(&self) -> [Chips; 2] {
        self.chips
    }

    pub fn first_to_act(&self) -> Seat {
        self.first
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds
    }

    pub fn history(&self) -> Option<&[RoundRecord]> {
        self.history.as_deref()
    }

    pub fn take_history(&mut self) -> Vec<RoundRecord> {
        self.history.take().unwrap_or_default()
    }

    pub fn is_over(&self) -> bool {
        self.chips.iter().any(|&c| c <= 0) || self.rounds >= self.max_length
    }

    /// Deal and play a single round, updating stacks and the first-to-act seat.
    pub fn play_round(&mut self) -> RoundOutcome {
        let deal = self.deck.deal();
        let first = self.first;
        let outcome = self
            .engine
            .play(&deal, first, &mut self.chips, &mut self.agents);
        self.first = outcome.next_first;
        if let Some(history) = &mut self.history {
            history.push(RoundRecord {
                seed: self.seed,
                round: self.rounds,
                first,
                deal,
                outcome: outcome.clone(),
                chips_after: self.chips,
                ts: None,
            });
        }
        self.rounds += 1;
        outcome
    }

    /// Play rounds until a stack is exhausted or the round cap is reached.
    pub fn play_game(&mut self) -> GameOutcome {
        while !self.is_over() {
            self.play_round();
        }

        let (points, reason) = if self.rounds >= self.max_length {
            (Points::DRAW, EndReason::RoundLimit)
        } else {
            let winner = if self.chips[Seat::A.index()] > 0 {
                Seat::A
            } else {
                Seat::B
            };
            (Points::win_for(winner), EndReason::Elimination { winner })
        };
        debug!(
            seed = self.seed,
            rounds = self.rounds,
            chips_a = self.chips[0],
            chips_b = self.chips[1],
            ?reason,
            "game finished"
        );

        GameOutcome {
            points,
            rounds: self.rounds,
            chips: self.chips,
            reason,
        }
    }
}
