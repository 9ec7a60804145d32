use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, MAX_RANK};

/// Score of the `{1, 9, 10}` wrap-around straight.
pub const WRAP_STRAIGHT_HIGH: u8 = 21;
/// Score of the `{1, 2, 10}` wrap-around straight.
pub const WRAP_STRAIGHT_LOW: u8 = 22;

/// Scoring band a hand falls into. Straights and three of a kind share the
/// top band (`20 + rank`), so a low triple can score under a high straight.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandBand {
    HighCard = 0,
    Pair = 1,
    StraightOrTrips = 2,
}

impl HandBand {
    pub fn of(score: u8) -> HandBand {
        if score > 20 {
            HandBand::StraightOrTrips
        } else if score > 10 {
            HandBand::Pair
        } else {
            HandBand::HighCard
        }
    }

    /// Extra chips owed by a player who folds a hand in this band that would
    /// have won the showdown.
    pub fn fold_penalty(self) -> i64 {
        match self {
            HandBand::StraightOrTrips => 10,
            HandBand::Pair => 5,
            HandBand::HighCard => 0,
        }
    }
}

/// Score a private card together with the two community cards.
///
/// Higher is better; equal scores tie. Ranking:
/// - straight: `20 + top rank`, with `{1,9,10}` = 21 and `{1,2,10}` = 22
/// - three of a kind: `20 + rank`
/// - pair with a community card: `10 + rank`
/// - otherwise the private card's rank
///
/// # Examples
///
/// ```
/// use indian_poker_engine::cards::Card;
/// use indian_poker_engine::hand::score;
///
/// let c = |r| Card::new(r).unwrap();
/// assert_eq!(score(c(4), c(5), c(6)), 26);
/// assert_eq!(score(c(7), c(7), c(2)), 17);
/// assert_eq!(score(c(3), c(8), c(9)), 3);
/// ```
pub fn score(private: Card, common1: Card, common2: Card) -> u8 {
    let card = private.rank();
    let (c1, c2) = (common1.rank(), common2.rank());

    let mut s = [card, c1, c2];
    s.sort_unstable();
    match s {
        [1, 9, 10] => return WRAP_STRAIGHT_HIGH,
        [1, 2, 10] => return WRAP_STRAIGHT_LOW,
        _ => {}
    }
    if s[1] == next_rank(s[0]) && s[2] == next_rank(s[1]) {
        return 20 + s[2];
    }

    if card == c1 && c1 == c2 {
        return 20 + card;
    }

    if card == c1 || card == c2 {
        return 10 + card;
    }

    card
}

/// Compare two private cards against the same community cards.
pub fn compare_hands(a: Card, b: Card, common: [Card; 2]) -> Ordering {
    score(a, common[0], common[1]).cmp(&score(b, common[0], common[1]))
}

fn next_rank(rank: u8) -> u8 {
    (rank % MAX_RANK) + 1
}
