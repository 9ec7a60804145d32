//! Baseline agent for Indian Poker.
//!
//! Provides a simple, deterministic opponent for testing and benchmarking.
//! It cannot see its own card, so it enumerates every card it could be
//! holding and weighs each by how many copies are still unseen.

use indian_poker_engine::agent::{Agent, VisibleState};
use indian_poker_engine::cards::{Card, all_ranks, COPIES_PER_RANK, DECK_SIZE};
use indian_poker_engine::hand::score;
use indian_poker_engine::player::Chips;
use tracing::trace;

/// How the unseen card distribution plays against the visible opponent hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Probability of outscoring the opponent
    pub win: f64,
    /// Probability of an equal score
    pub draw: f64,
}

impl Estimate {
    /// Win probability with draws counted as half.
    pub fn equity(&self) -> f64 {
        self.win + self.draw / 2.0
    }
}

/// Equity-driven baseline strategy.
///
/// # Strategy
///
/// - Estimate equity over the 37 cards it might hold
/// - Equity at or above the shove threshold: go all-in
/// - Equity at or above the raise threshold: raise by `raise_step`
/// - Otherwise call. A fold pays the current bet plus any penalty while a
///   lost showdown at the same level pays only the bet, so it never folds.
///
/// # Example
///
/// ```rust
/// use indian_poker_ai::baseline::BaselineAgent;
/// use indian_poker_ai::Agent;
///
/// let ai = BaselineAgent::new();
/// assert_eq!(ai.name(), "baseline");
/// ```
#[derive(Debug, Clone)]
pub struct BaselineAgent {
    raise_threshold: f64,
    shove_threshold: f64,
    raise_step: Chips,
}

impl Default for BaselineAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl BaselineAgent {
    pub fn new() -> Self {
        Self {
            raise_threshold: 0.65,
            shove_threshold: 0.9,
            raise_step: 2,
        }
    }

    /// Enumerate the cards this seat could hold given what it can see.
    pub fn estimate(state: &VisibleState) -> Estimate {
        let [c1, c2] = state.common;
        let opponent = score(state.opponent_card, c1, c2);
        let visible = [state.opponent_card, c1, c2];
        let unseen = (DECK_SIZE - visible.len()) as f64;

        let mut est = Estimate {
            win: 0.0,
            draw: 0.0,
        };
        for card in all_ranks() {
            let copies = remaining_copies(card, &visible);
            if copies == 0 {
                continue;
            }
            let weight = copies as f64 / unseen;
            let own = score(card, c1, c2);
            if own > opponent {
                est.win += weight;
            } else if own == opponent {
                est.draw += weight;
            }
        }
        est
    }
}

fn remaining_copies(card: Card, visible: &[Card]) -> usize {
    COPIES_PER_RANK - visible.iter().filter(|&&c| c == card).count()
}

impl Agent for BaselineAgent {
    fn reset(&mut self) {}

    fn play(&mut self, state: &VisibleState) -> Chips {
        let est = Self::estimate(state);
        let equity = est.equity();
        let current = state.current_bet();

        let bet = if equity >= self.shove_threshold {
            state.all_in()
        } else if equity >= self.raise_threshold {
            current + self.raise_step
        } else {
            current
        };
        trace!(equity, win = est.win, current, bet, "baseline decision");
        bet
    }

    fn name(&self) -> &str {
        "baseline"
    }
}
