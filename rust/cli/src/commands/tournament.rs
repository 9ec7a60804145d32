//! `tournament` command: a seeded series of games between two agents.

use std::io::Write;
use std::path::Path;

use indian_poker_engine::config::TournamentConfig;
use indian_poker_engine::player::Seat;
use indian_poker_engine::tournament::Tournament;

use super::build_pair;
use crate::error::CliError;
use crate::io_utils::write_json_file;
use crate::ui;

/// Runs `config.num_games` games and prints the accumulated points.
///
/// Seat A acts first in games with an even seed, so an odd number of games
/// hands one seat an extra opening; a warning goes to `err` when that
/// happens. With `output` the full [`indian_poker_engine::tournament::TournamentReport`]
/// is written as JSON.
pub fn handle_tournament_command(
    ai_a: &str,
    ai_b: &str,
    config: TournamentConfig,
    output: Option<&Path>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let [a, b] = build_pair(ai_a, ai_b, config.seed)?;
    let mut tournament = Tournament::new(a, b, config)?;
    let report = tournament.play_tournament()?;

    let (name_a, name_b) = tournament.player_names();
    writeln!(out, "Tournament: {} (A) vs {} (B)", name_a, name_b)?;
    writeln!(out, "Games: {} from seed {}", report.games.len(), config.seed)?;
    writeln!(out, "{}", tournament)?;
    writeln!(
        out,
        "Wins: A={} B={} Draws={}",
        report.wins(Seat::A),
        report.wins(Seat::B),
        report.draws()
    )?;

    let a_first = report.games.iter().filter(|g| g.first == Seat::A).count();
    if a_first * 2 != report.games.len() {
        ui::display_warning(
            err,
            &format!(
                "seat A acted first in {} of {} games",
                a_first,
                report.games.len()
            ),
        )?;
    }

    if let Some(path) = output {
        write_json_file(path, &report)?;
        writeln!(out, "Report written to {}", path.display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(num_games: u64, seed: u64) -> TournamentConfig {
        TournamentConfig {
            num_games,
            seed,
            ..TournamentConfig::default()
        }
    }

    #[test]
    fn prints_points_line() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_tournament_command("baseline", "calling", config(4, 1), None, &mut out, &mut err)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Tournament: baseline (A) vs calling (B)"));
        assert!(text.contains("Games: 4 from seed 1"));
        assert!(text.lines().any(|l| l.starts_with("Player A: ")));
        assert!(err.is_empty());
    }

    #[test]
    fn odd_game_count_warns() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_tournament_command("calling", "calling", config(3, 2), None, &mut out, &mut err)
            .unwrap();
        // seeds 2, 3, 4: A opens twice
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "WARNING: seat A acted first in 2 of 3 games\n"
        );
    }

    #[test]
    fn unknown_agent_is_rejected_before_playing() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result =
            handle_tournament_command("psychic", "calling", config(2, 1), None, &mut out, &mut err);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(out.is_empty());
    }
}
