use rand::seq::index;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card, DECK_SIZE};
use crate::player::Seat;

/// The four cards used by one round: a private card per seat and two
/// community cards.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub a_card: Card,
    pub b_card: Card,
    pub common: [Card; 2],
}

impl Deal {
    pub fn new(a_card: Card, b_card: Card, common: [Card; 2]) -> Self {
        Self {
            a_card,
            b_card,
            common,
        }
    }

    pub fn private(&self, seat: Seat) -> Card {
        match seat {
            Seat::A => self.a_card,
            Seat::B => self.b_card,
        }
    }
}

/// Seeded dealer over the 40-card multiset.
///
/// Every deal samples four distinct positions from the full deck, so cards
/// are effectively returned between rounds.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            cards: full_deck(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Draw the cards for one round, in order A, B, community, community.
    pub fn deal(&mut self) -> Deal {
        let picks = index::sample(&mut self.rng, DECK_SIZE, 4).into_vec();
        let c = |i: usize| self.cards[picks[i]];
        Deal::new(c(0), c(1), [c(2), c(3)])
    }
}
