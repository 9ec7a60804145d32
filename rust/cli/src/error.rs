//! Error types for the CLI application.

use indian_poker_engine::errors::GameError;
use thiserror::Error;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
///
/// Every command handler returns `Result<(), CliError>`, so failures
/// propagate with `?` and map to exit code `2` in [`crate::run`].
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rejected by the engine (bad card, bad table parameters)
    #[error("Engine error: {0}")]
    Engine(#[from] GameError),
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        CliError::Io(std::io::Error::other(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_keep_their_message() {
        let err: CliError = GameError::InvalidCard { rank: 11 }.into();
        assert_eq!(
            err.to_string(),
            "Engine error: Invalid card rank: 11 (expected 1-10)"
        );
    }

    #[test]
    fn io_errors_expose_source() {
        use std::error::Error as _;
        let err: CliError = std::io::Error::other("disk full").into();
        assert!(err.source().is_some());
    }
}
