//! Seeded random agent.
//!
//! Useful as noisy opposition and for exercising the betting protocol with
//! folds, calls and raises of varying size. The generator is reseeded on
//! [`Agent::reset`], so a reset agent replays the same decisions.

use indian_poker_engine::agent::{Agent, VisibleState};
use indian_poker_engine::player::Chips;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

#[derive(Debug, Clone)]
pub struct RandomAgent {
    seed: u64,
    rng: ChaCha20Rng,
    fold_chance: f64,
    raise_chance: f64,
    max_raise: Chips,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
            fold_chance: 0.1,
            raise_chance: 0.3,
            max_raise: 3,
        }
    }

    /// Override the per-decision fold and raise probabilities.
    pub fn with_chances(mut self, fold_chance: f64, raise_chance: f64) -> Self {
        self.fold_chance = fold_chance.clamp(0.0, 1.0);
        self.raise_chance = raise_chance.clamp(0.0, 1.0 - self.fold_chance);
        self
    }
}

impl Agent for RandomAgent {
    fn reset(&mut self) {
        self.rng = ChaCha20Rng::seed_from_u64(self.seed);
    }

    fn play(&mut self, state: &VisibleState) -> Chips {
        let roll: f64 = self.rng.random();
        if roll < self.fold_chance {
            0
        } else if roll < self.fold_chance + self.raise_chance {
            state.current_bet() + self.rng.random_range(1..=self.max_raise)
        } else {
            state.current_bet()
        }
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indian_poker_engine::cards::Card;

    fn state() -> VisibleState {
        let c = |r| Card::new(r).unwrap();
        VisibleState {
            common: [c(3), c(8)],
            opponent_card: c(6),
            own_chips: 20,
            opponent_chips: 20,
            own_bet: 1,
            opponent_bet: 2,
            opponent_exhausted: false,
        }
    }

    fn decisions(agent: &mut RandomAgent, n: usize) -> Vec<Chips> {
        (0..n).map(|_| agent.play(&state())).collect()
    }

    #[test]
    fn same_seed_same_decisions() {
        let mut a = RandomAgent::new(7);
        let mut b = RandomAgent::new(7);
        assert_eq!(decisions(&mut a, 50), decisions(&mut b, 50));
    }

    #[test]
    fn reset_replays_from_the_seed() {
        let mut a = RandomAgent::new(11);
        let first = decisions(&mut a, 30);
        a.reset();
        assert_eq!(decisions(&mut a, 30), first);
    }

    #[test]
    fn decisions_stay_in_range() {
        let mut a = RandomAgent::new(3);
        for bet in decisions(&mut a, 500) {
            assert!(bet == 0 || (2..=5).contains(&bet), "unexpected bet {}", bet);
        }
    }

    #[test]
    fn certain_fold_always_folds() {
        let mut a = RandomAgent::new(3).with_chances(1.0, 0.0);
        assert!(decisions(&mut a, 20).iter().all(|&b| b == 0));
    }
}
