use std::collections::HashMap;

use indian_poker_engine::cards::{full_deck, Card, COPIES_PER_RANK, DECK_SIZE};
use indian_poker_engine::deck::{Deal, Deck};

fn cards_of(d: &Deal) -> [Card; 4] {
    [d.a_card, d.b_card, d.common[0], d.common[1]]
}

#[test]
fn full_deck_has_four_copies_of_each_rank() {
    let deck = full_deck();
    assert_eq!(deck.len(), DECK_SIZE);
    let mut counts: HashMap<u8, usize> = HashMap::new();
    for c in &deck {
        *counts.entry(c.rank()).or_default() += 1;
    }
    assert_eq!(counts.len(), 10);
    assert!(counts.values().all(|&n| n == COPIES_PER_RANK));
}

#[test]
fn deal_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    let a: Vec<Deal> = (0..20).map(|_| d1.deal()).collect();
    let b: Vec<Deal> = (0..20).map(|_| d2.deal()).collect();
    assert_eq!(a, b, "same seed must yield identical deals");
}

#[test]
fn deal_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    let a: Vec<Deal> = (0..20).map(|_| d1.deal()).collect();
    let b: Vec<Deal> = (0..20).map(|_| d2.deal()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different deals (high probability)"
    );
}

#[test]
fn cards_are_returned_between_rounds() {
    // 400 rounds draw 1600 cards from a 40-card deck, which only works if
    // every round samples from the full multiset.
    let mut deck = Deck::new_with_seed(777);
    let mut seen: HashMap<u8, usize> = HashMap::new();
    for _ in 0..400 {
        let deal = deck.deal();
        let mut per_round: HashMap<u8, usize> = HashMap::new();
        for c in cards_of(&deal) {
            *per_round.entry(c.rank()).or_default() += 1;
            *seen.entry(c.rank()).or_default() += 1;
        }
        assert!(per_round.values().all(|&n| n <= COPIES_PER_RANK));
    }
    assert_eq!(seen.len(), 10, "every rank should appear over 400 rounds");
}
