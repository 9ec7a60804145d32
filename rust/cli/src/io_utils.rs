//! File output helpers shared by commands that write results to disk.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

// Same directory rule as the engine's round logger.
pub use indian_poker_engine::logger::ensure_parent_dir;

/// Writes `value` as pretty-printed JSON followed by a newline.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> std::io::Result<()> {
    ensure_parent_dir(path)?;
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value).map_err(std::io::Error::other)?;
    writer.write_all(b"\n")?;
    writer.flush()
}
