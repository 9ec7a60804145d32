use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Lowest card rank in the deck.
pub const MIN_RANK: u8 = 1;
/// Highest card rank in the deck.
pub const MAX_RANK: u8 = 10;
/// Number of copies of each rank in a full deck.
pub const COPIES_PER_RANK: usize = 4;
/// Total number of cards in a full deck.
pub const DECK_SIZE: usize = (MAX_RANK as usize) * COPIES_PER_RANK;

/// A single card. Cards carry only a rank in `1..=10`; there are no suits.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// Build a card, rejecting ranks outside `1..=10`.
    pub fn new(rank: u8) -> Result<Self, GameError> {
        if (MIN_RANK..=MAX_RANK).contains(&rank) {
            Ok(Card(rank))
        } else {
            Err(GameError::InvalidCard { rank })
        }
    }

    pub fn rank(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Card {
    type Error = GameError;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        Card::new(rank)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn all_ranks() -> [Card; MAX_RANK as usize] {
    std::array::from_fn(|i| Card(MIN_RANK + i as u8))
}

/// The 40-card multiset: four copies of every rank, ordered by rank.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for r in all_ranks() {
        for _ in 0..COPIES_PER_RANK {
            v.push(r);
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_bounds_are_enforced() {
        assert!(Card::new(0).is_err());
        assert!(Card::new(11).is_err());
        assert_eq!(Card::new(1).unwrap().rank(), 1);
        assert_eq!(Card::new(10).unwrap().rank(), 10);
    }

    #[test]
    fn serde_rejects_out_of_range_rank() {
        let ok: Card = serde_json::from_str("7").unwrap();
        assert_eq!(ok.rank(), 7);
        assert!(serde_json::from_str::<Card>("12").is_err());
        assert_eq!(serde_json::to_string(&ok).unwrap(), "7");
    }
}
