use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::Chips;

/// Everything a seat is allowed to see when it is asked for a bet.
///
/// The seat's own private card is deliberately absent: each player sees the
/// opponent's card and the two community cards only.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct VisibleState {
    pub common: [Card; 2],
    pub opponent_card: Card,
    pub own_chips: Chips,
    pub opponent_chips: Chips,
    pub own_bet: Chips,
    pub opponent_bet: Chips,
    /// The opponent has already used its option to raise in this sequence
    pub opponent_exhausted: bool,
}

impl VisibleState {
    /// Bet level a proposal must reach to avoid folding.
    pub fn current_bet(&self) -> Chips {
        self.own_bet.max(self.opponent_bet)
    }

    /// Largest bet that is not clamped to all-in.
    pub fn all_in(&self) -> Chips {
        self.own_chips.min(self.opponent_chips)
    }
}

/// A betting decision source for one seat.
///
/// Agents may keep state across the rounds and games of a tournament;
/// [`Agent::reset`] is called when the tournament is reset.
///
/// # Example Implementation
///
/// ```rust
/// use indian_poker_engine::agent::{Agent, VisibleState};
///
/// struct AlwaysCall;
///
/// impl Agent for AlwaysCall {
///     fn reset(&mut self) {}
///
///     fn play(&mut self, state: &VisibleState) -> i64 {
///         state.current_bet()
///     }
/// }
/// ```
pub trait Agent {
    /// Clear any internal state.
    fn reset(&mut self);

    /// Propose a bet for the current turn.
    ///
    /// A value below the current bet level folds, the current level calls,
    /// and anything higher raises. Values at or above the shorter stack are
    /// treated as all-in. Negative values fold.
    fn play(&mut self, state: &VisibleState) -> Chips;

    fn name(&self) -> &str {
        "agent"
    }
}

impl<T: Agent + ?Sized> Agent for Box<T> {
    fn reset(&mut self) {
        (**self).reset()
    }

    fn play(&mut self, state: &VisibleState) -> Chips {
        (**self).play(state)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
