use serde::{Deserialize, Serialize};
use tracing::info;

use crate::agent::Agent;
use crate::config::TournamentConfig;
use crate::errors::GameError;
use crate::game::{Game, GameOutcome};
use crate::player::{Points, Seat};

/// Summary of one game within a tournament.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub seed: u64,
    pub first: Seat,
    pub outcome: GameOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TournamentReport {
    pub games: Vec<GameSummary>,
    /// Points accumulated since the last reset, including these games
    pub points: Points,
}

impl TournamentReport {
    /// Games won by elimination for `seat`.
    pub fn wins(&self, seat: Seat) -> usize {
        self.games
            .iter()
            .filter(|g| g.outcome.points == Points::win_for(seat))
            .count()
    }

    /// Games that hit the round cap.
    pub fn draws(&self) -> usize {
        self.games
            .iter()
            .filter(|g| g.outcome.points == Points::DRAW)
            .count()
    }
}

/// A series of seeded games between the same two agents.
///
/// Game `i` is seeded with `seed + i`; seat A acts first in games with an
/// even seed.
pub struct Tournament {
    player_a: Box<dyn Agent>,
    player_b: Box<dyn Agent>,
    config: TournamentConfig,
    points: Points,
}

impl Tournament {
    pub fn new(
        player_a: Box<dyn Agent>,
        player_b: Box<dyn Agent>,
        config: TournamentConfig,
    ) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            player_a,
            player_b,
            config,
            points: Points::default(),
        })
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    pub fn points(&self) -> Points {
        self.points
    }

    pub fn player_names(&self) -> (&str, &str) {
        (self.player_a.name(), self.player_b.name())
    }

    /// Clear accumulated points and reset both agents.
    pub fn reset(&mut self) {
        self.player_a.reset();
        self.player_b.reset();
        self.points = Points::default();
    }

    pub fn play_tournament(&mut self) -> Result<TournamentReport, GameError> {
        let config = self.config;
        let mut games = Vec::with_capacity(reserved_games(config.num_games));

        for seed in config.seeds() {
            let a_first = seed % 2 == 0;
            let outcome = {
                let mut game = Game::new(
                    seed,
                    self.player_a.as_mut(),
                    self.player_b.as_mut(),
                    a_first,
                    config.game,
                )?;
                game.play_game()
            };
            self.points += outcome.points;
            games.push(GameSummary {
                seed,
                first: Seat::from_a_first(a_first),
                outcome,
            });
        }

        info!(
            games = games.len(),
            player_a = self.player_a.name(),
            player_b = self.player_b.name(),
            points_a = self.points.a,
            points_b = self.points.b,
            "tournament finished"
        );
        Ok(TournamentReport {
            games,
            points: self.points,
        })
    }
}

/// Up-front report capacity; `num_games` is user input and may be huge.
fn reserved_games(num_games: u64) -> usize {
    const RESERVE_LIMIT: u64 = 1024;
    num_games.min(RESERVE_LIMIT) as usize
}

impl std::fmt::Display for Tournament {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player A: {:?}, Player B: {:?}", self.points.a, self.points.b)
    }
}
