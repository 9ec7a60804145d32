use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::Chips;

pub const DEFAULT_STARTING_CHIPS: Chips = 20;
pub const DEFAULT_BLIND: Chips = 1;
pub const DEFAULT_MAX_LENGTH: u64 = 100_000;
pub const DEFAULT_NUM_GAMES: u64 = 100;
pub const DEFAULT_SEED: u64 = 1;
/// Upper bound for `starting_chips` and `blind`. Both stacks plus the
/// largest single transfer stay below `i64::MAX`.
pub const MAX_TABLE_CHIPS: Chips = i64::MAX / 4;

/// Per-game parameters shared by every game of a tournament.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Chips each seat starts a game with
    pub starting_chips: Chips,
    /// Opening bet both seats post every round
    pub blind: Chips,
    /// Round cap; reaching it ends the game as a draw
    pub max_length: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_chips: DEFAULT_STARTING_CHIPS,
            blind: DEFAULT_BLIND,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.starting_chips <= 0 {
            return Err(GameError::InvalidConfig {
                field: "starting_chips",
                reason: "must be > 0",
            });
        }
        if self.blind <= 0 {
            return Err(GameError::InvalidConfig {
                field: "blind",
                reason: "must be > 0",
            });
        }
        if self.starting_chips > MAX_TABLE_CHIPS {
            return Err(GameError::InvalidConfig {
                field: "starting_chips",
                reason: "exceeds the chip limit",
            });
        }
        if self.blind > MAX_TABLE_CHIPS {
            return Err(GameError::InvalidConfig {
                field: "blind",
                reason: "exceeds the chip limit",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub num_games: u64,
    /// Seed of the first game; game `i` uses `seed + i`
    pub seed: u64,
    pub game: GameConfig,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            num_games: DEFAULT_NUM_GAMES,
            seed: DEFAULT_SEED,
            game: GameConfig::default(),
        }
    }
}

impl TournamentConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.num_games == 0 {
            return Err(GameError::InvalidConfig {
                field: "num_games",
                reason: "must be > 0",
            });
        }
        self.game.validate()
    }

    /// Seeds of every game in play order.
    pub fn seeds(&self) -> impl Iterator<Item = u64> + '_ {
        (0..self.num_games).map(move |i| self.seed.wrapping_add(i))
    }
}
