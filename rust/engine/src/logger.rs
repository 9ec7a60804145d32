use serde::{Deserialize, Serialize};

use crate::deck::Deal;
use crate::player::{Chips, Seat};

/// One bet decision made during a round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct BetRecord {
    /// Seat that acted
    pub seat: Seat,
    /// Amount returned by the agent
    pub proposed: Chips,
    /// Amount after all-in clamping
    pub effective: Chips,
}

/// Showdown verdict by score. A draw pays out exactly like a win for B.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowdownResult {
    AWin,
    Draw,
    BWin,
}

/// How a round ended and which chips moved.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    Fold {
        folder: Seat,
        /// Bet level at the moment of the fold
        bet: Chips,
        /// 0, 5 or 10 on top of `bet`
        penalty: Chips,
    },
    Showdown {
        result: ShowdownResult,
        /// Matched bet paid by the loser
        amount: Chips,
    },
}

/// Result of a single betting round, as produced by the round engine.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Chronological list of bet decisions
    pub actions: Vec<BetRecord>,
    pub resolution: Resolution,
    /// Hand scores of seat A and seat B
    pub scores: [u8; 2],
    /// Seat that acts first in the next round (the seat that was paid)
    pub next_first: Seat,
}

impl RoundOutcome {
    /// Seat that received chips.
    pub fn payee(&self) -> Seat {
        self.next_first
    }

    /// Chips moved from the paying seat to the payee.
    pub fn transferred(&self) -> Chips {
        match self.resolution {
            Resolution::Fold { bet, penalty, .. } => bet + penalty,
            Resolution::Showdown { amount, .. } => amount,
        }
    }

    pub fn penalty(&self) -> Chips {
        match self.resolution {
            Resolution::Fold { penalty, .. } => penalty,
            Resolution::Showdown { .. } => 0,
        }
    }
}

/// Complete record of a round within a game. Serialized as one JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Seed of the game the round belongs to
    pub seed: u64,
    /// Zero-based round index within the game
    pub round: u64,
    /// Seat that acted first
    pub first: Seat,
    pub deal: Deal,
    #[serde(flatten)]
    pub outcome: RoundOutcome,
    /// Stacks of A and B after settlement
    pub chips_after: [Chips; 2],
    /// Timestamp when the record was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Create the parent directory of `path` if needed. A bare file name has an
/// empty parent and needs nothing.
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Writes [`RoundRecord`]s as JSON lines.
pub struct RoundLogger<W: Write> {
    writer: W,
    written: u64,
}

impl RoundLogger<BufWriter<File>> {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        ensure_parent_dir(path.as_ref())?;
        let f = File::create(path)?;
        Ok(Self::new(BufWriter::new(f)))
    }
}

impl<W: Write> RoundLogger<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
