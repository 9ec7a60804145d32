//! `score` command: evaluate one hand.

use std::io::Write;

use indian_poker_engine::cards::Card;
use indian_poker_engine::hand::score;

use crate::error::CliError;
use crate::formatters::format_hand;

pub fn handle_score_command(
    card: u8,
    common1: u8,
    common2: u8,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hand = score(Card::new(card)?, Card::new(common1)?, Card::new(common2)?);
    writeln!(out, "Score: {}", format_hand(hand))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indian_poker_engine::errors::GameError;

    fn run(card: u8, c1: u8, c2: u8) -> Result<String, CliError> {
        let mut out = Vec::new();
        handle_score_command(card, c1, c2, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_score_and_band() {
        assert_eq!(run(5, 5, 9).unwrap(), "Score: 15 (pair)\n");
        assert_eq!(run(1, 9, 10).unwrap(), "Score: 21 (straight 9-10-1)\n");
        assert_eq!(run(3, 8, 6).unwrap(), "Score: 3 (high card)\n");
    }

    #[test]
    fn rejects_out_of_range_rank() {
        assert!(matches!(
            run(0, 2, 3),
            Err(CliError::Engine(GameError::InvalidCard { rank: 0 }))
        ));
    }
}
