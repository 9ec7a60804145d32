//! Layered configuration for the `ipoker` binary.
//!
//! Values resolve in order: built-in defaults, then the TOML file named by
//! `IPOKER_CONFIG`, then `IPOKER_*` environment variables, then command-line
//! flags. Every value remembers which layer it came from so `ipoker cfg` can
//! report it.

use std::fs;
use std::str::FromStr;

use indian_poker_engine::config::{
    DEFAULT_BLIND, DEFAULT_MAX_LENGTH, DEFAULT_NUM_GAMES, DEFAULT_SEED, DEFAULT_STARTING_CHIPS,
    GameConfig, TournamentConfig,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::TableArgs;

pub const CONFIG_PATH_VAR: &str = "IPOKER_CONFIG";
pub const SEED_VAR: &str = "IPOKER_SEED";
pub const GAMES_VAR: &str = "IPOKER_GAMES";
pub const STARTING_CHIPS_VAR: &str = "IPOKER_STARTING_CHIPS";
pub const BLIND_VAR: &str = "IPOKER_BLIND";
pub const MAX_LENGTH_VAR: &str = "IPOKER_MAX_LENGTH";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub seed: u64,
    pub games: u64,
    pub starting_chips: i64,
    pub blind: i64,
    pub max_length: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            games: DEFAULT_NUM_GAMES,
            starting_chips: DEFAULT_STARTING_CHIPS,
            blind: DEFAULT_BLIND,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl Config {
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            starting_chips: self.starting_chips,
            blind: self.blind,
            max_length: self.max_length,
        }
    }

    pub fn tournament_config(&self) -> TournamentConfig {
        TournamentConfig {
            num_games: self.games,
            seed: self.seed,
            game: self.game_config(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub games: ValueSource,
    pub starting_chips: ValueSource,
    pub blind: ValueSource,
    pub max_length: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            games: ValueSource::Default,
            starting_chips: ValueSource::Default,
            blind: ValueSource::Default,
            max_length: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl ConfigResolved {
    pub fn apply_seed(&mut self, seed: Option<u64>) {
        set_value(&mut self.config.seed, &mut self.sources.seed, seed, ValueSource::Cli);
    }

    pub fn apply_games(&mut self, games: Option<u64>) {
        set_value(
            &mut self.config.games,
            &mut self.sources.games,
            games,
            ValueSource::Cli,
        );
    }

    pub fn apply_table(&mut self, table: &TableArgs) {
        let layer = FileConfig {
            starting_chips: table.starting_chips,
            blind: table.blind,
            max_length: table.max_length,
            ..FileConfig::default()
        };
        apply_layer(self, layer, ValueSource::Cli);
    }

    /// Check the merged values. Call once every layer, flags included, is in.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.config
            .tournament_config()
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

fn set_value<T>(
    slot: &mut T,
    slot_source: &mut ValueSource,
    value: Option<T>,
    source: ValueSource,
) {
    if let Some(v) = value {
        *slot = v;
        *slot_source = source;
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    games: Option<u64>,
    #[serde(default)]
    starting_chips: Option<i64>,
    #[serde(default)]
    blind: Option<i64>,
    #[serde(default)]
    max_length: Option<u64>,
}

/// Resolve configuration from the process environment.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_with_lookup(|key| std::env::var(key).ok())
}

/// Resolve configuration, reading variables through `env`.
pub fn load_with_lookup<F>(env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut resolved = ConfigResolved::default();

    if let Some(path) = env(CONFIG_PATH_VAR).filter(|p| !p.is_empty()) {
        let text = fs::read_to_string(path)?;
        let file: FileConfig = toml::from_str(&text)?;
        apply_layer(&mut resolved, file, ValueSource::File);
    }

    let from_env = FileConfig {
        seed: env_value(&env, SEED_VAR)?,
        games: env_value(&env, GAMES_VAR)?,
        starting_chips: env_value(&env, STARTING_CHIPS_VAR)?,
        blind: env_value(&env, BLIND_VAR)?,
        max_length: env_value(&env, MAX_LENGTH_VAR)?,
    };
    apply_layer(&mut resolved, from_env, ValueSource::Env);
    Ok(resolved)
}

fn apply_layer(resolved: &mut ConfigResolved, layer: FileConfig, source: ValueSource) {
    let ConfigResolved { config, sources } = resolved;
    set_value(&mut config.seed, &mut sources.seed, layer.seed, source);
    set_value(&mut config.games, &mut sources.games, layer.games, source);
    set_value(
        &mut config.starting_chips,
        &mut sources.starting_chips,
        layer.starting_chips,
        source,
    );
    set_value(&mut config.blind, &mut sources.blind, layer.blind, source);
    set_value(
        &mut config.max_length,
        &mut sources.max_length,
        layer.max_length,
        source,
    );
}

fn env_value<F, T>(env: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match env(key) {
        Some(raw) if !raw.is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: '{}'", key, raw))),
        _ => Ok(None),
    }
}
