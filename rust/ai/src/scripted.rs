use indian_poker_engine::agent::{Agent, VisibleState};
use indian_poker_engine::player::Chips;

/// Replays a fixed sequence of bets, cycling back to the start when it runs
/// out. An empty script calls every time.
///
/// # Example
///
/// ```rust
/// use indian_poker_ai::scripted::ScriptedAgent;
/// use indian_poker_ai::{Agent, VisibleState};
/// use indian_poker_engine::cards::Card;
///
/// let c = |r| Card::new(r).unwrap();
/// let state = VisibleState {
///     common: [c(2), c(5)],
///     opponent_card: c(9),
///     own_chips: 20,
///     opponent_chips: 20,
///     own_bet: 1,
///     opponent_bet: 1,
///     opponent_exhausted: false,
/// };
/// let mut agent = ScriptedAgent::new(vec![3, 0]);
/// assert_eq!(agent.play(&state), 3);
/// assert_eq!(agent.play(&state), 0);
/// assert_eq!(agent.play(&state), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedAgent {
    bets: Vec<Chips>,
    next: usize,
}

impl ScriptedAgent {
    pub fn new(bets: Vec<Chips>) -> Self {
        Self { bets, next: 0 }
    }
}

impl Agent for ScriptedAgent {
    fn reset(&mut self) {
        self.next = 0;
    }

    fn play(&mut self, state: &VisibleState) -> Chips {
        if self.bets.is_empty() {
            return state.current_bet();
        }
        let bet = self.bets[self.next % self.bets.len()];
        self.next += 1;
        bet
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
