//! `game` command: play one game and optionally record it.

use std::io::Write;
use std::path::Path;

use indian_poker_engine::config::GameConfig;
use indian_poker_engine::game::Game;
use indian_poker_engine::logger::RoundLogger;
use indian_poker_engine::player::Seat;

use super::build_pair;
use crate::error::CliError;
use crate::formatters::{format_board, format_outcome, format_resolution};

/// Plays a single seeded game between `ai_a` and `ai_b`.
///
/// When `output` is given every round is appended to it as one JSON line
/// (see [`indian_poker_engine::logger::RoundRecord`]). `verbose` prints one
/// line per round before the result.
#[allow(clippy::too_many_arguments)]
pub fn handle_game_command(
    ai_a: &str,
    ai_b: &str,
    seed: u64,
    first: Seat,
    config: GameConfig,
    output: Option<&Path>,
    verbose: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let [mut a, mut b] = build_pair(ai_a, ai_b, seed)?;
    writeln!(
        out,
        "Game seed {}: {} (A) vs {} (B), {} acts first",
        seed,
        a.name(),
        b.name(),
        first
    )?;

    let (outcome, history) = {
        let mut game = Game::new(seed, a.as_mut(), b.as_mut(), first == Seat::A, config)?;
        if output.is_some() || verbose {
            game = game.with_history();
        }
        let outcome = game.play_game();
        (outcome, game.take_history())
    };

    if verbose {
        for record in &history {
            writeln!(
                out,
                "Round {}: {} A={} B={}, {}",
                record.round + 1,
                format_board(&record.deal.common),
                record.deal.a_card,
                record.deal.b_card,
                format_resolution(&record.outcome.resolution)
            )?;
        }
    }

    writeln!(out, "Result: {}", format_outcome(&outcome))?;
    writeln!(out, "Chips: A={} B={}", outcome.chips[0], outcome.chips[1])?;
    writeln!(out, "Points: A={:?} B={:?}", outcome.points.a, outcome.points.b)?;

    if let Some(path) = output {
        let mut logger = RoundLogger::create(path)?;
        for record in &history {
            logger.write(record)?;
        }
        logger.flush()?;
        writeln!(
            out,
            "Rounds written: {} to {}",
            logger.written(),
            path.display()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(ai_a: &str, ai_b: &str, seed: u64, config: GameConfig) -> String {
        let mut out = Vec::new();
        handle_game_command(ai_a, ai_b, seed, Seat::A, config, None, false, &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn round_cap_of_one_reports_a_draw() {
        let config = GameConfig {
            max_length: 1,
            ..GameConfig::default()
        };
        let text = play("calling", "calling", 3, config);
        assert!(text.contains("Result: draw, round limit of 1 reached"));
        assert!(text.contains("Points: A=0.5 B=0.5"));
    }

    #[test]
    fn verbose_lists_every_round() {
        let config = GameConfig {
            max_length: 3,
            ..GameConfig::default()
        };
        let mut out = Vec::new();
        handle_game_command("calling", "calling", 4, Seat::A, config, None, true, &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        let rounds: Vec<&str> = text.lines().filter(|l| l.starts_with("Round ")).collect();
        assert_eq!(rounds.len(), 3);
        assert!(rounds[0].starts_with("Round 1: ["));
        // Two callers never fold, so every round is a showdown for the blind.
        assert!(rounds.iter().all(|l| l.contains("showdown") && l.ends_with(" 1")));
    }

    #[test]
    fn chips_are_conserved() {
        let text = play("baseline", "random", 11, GameConfig::default());
        let line = text.lines().find(|l| l.starts_with("Chips:")).unwrap();
        let total: i64 = line
            .trim_start_matches("Chips: ")
            .split(' ')
            .map(|part| part[2..].parse::<i64>().unwrap())
            .sum();
        assert_eq!(total, 40);
    }

    #[test]
    fn invalid_table_is_an_engine_error() {
        let config = GameConfig {
            blind: 0,
            ..GameConfig::default()
        };
        let mut out = Vec::new();
        let result = handle_game_command(
            "calling",
            "calling",
            1,
            Seat::A,
            config,
            None,
            false,
            &mut out,
        );
        assert!(matches!(result, Err(CliError::Engine(_))));
    }
}
