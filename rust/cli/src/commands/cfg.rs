//! `cfg` command: print the resolved configuration.
//!
//! # Example Output
//!
//! ```json
//! {
//!   "seed": {
//!     "value": 1,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use std::io::Write;

use crate::config::ConfigResolved;
use crate::error::CliError;

/// Writes each setting with its value and the layer it came from as pretty JSON.
pub fn handle_cfg_command(
    resolved: &ConfigResolved,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "games": {
            "value": config.games,
            "source": sources.games,
        },
        "starting_chips": {
            "value": config.starting_chips,
            "source": sources.starting_chips,
        },
        "blind": {
            "value": config.blind,
            "source": sources.blind,
        },
        "max_length": {
            "value": config.max_length,
            "source": sources.max_length,
        },
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&display)?)?;
    Ok(())
}
