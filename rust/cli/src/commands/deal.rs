//! `deal` command: show what a seed deals.
//!
//! Uses the same deck a game with that seed would use, so the printed rows
//! are the exact cards of that game's opening rounds.

use std::io::Write;

use indian_poker_engine::deck::Deck;
use indian_poker_engine::hand::score;

use crate::error::CliError;
use crate::formatters::{format_board, format_hand};

pub fn handle_deal_command(seed: u64, rounds: u32, out: &mut dyn Write) -> Result<(), CliError> {
    let mut deck = Deck::new_with_seed(seed);
    writeln!(out, "Seed: {}", seed)?;
    for round in 0..rounds {
        let deal = deck.deal();
        let [c1, c2] = deal.common;
        writeln!(
            out,
            "Round {}: A={} B={} Board={}  A scores {}, B scores {}",
            round,
            deal.a_card,
            deal.b_card,
            format_board(&deal.common),
            format_hand(score(deal.a_card, c1, c2)),
            format_hand(score(deal.b_card, c1, c2)),
        )?;
    }
    Ok(())
}
