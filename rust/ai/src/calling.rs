use indian_poker_engine::agent::{Agent, VisibleState};
use indian_poker_engine::player::Chips;

/// Never raises and never folds: always proposes the current bet level.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallingAgent;

impl Agent for CallingAgent {
    fn reset(&mut self) {}

    fn play(&mut self, state: &VisibleState) -> Chips {
        state.current_bet()
    }

    fn name(&self) -> &str {
        "calling"
    }
}
