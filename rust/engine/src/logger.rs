use serde::{Deserialize, Serialize};

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};

use crate::cards::Card;
use crate::table::{AppliedAction, Street};

/// Records a single applied action during a hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: usize,
    pub street: Street,
    pub action: AppliedAction,
}

/// Complete record of one hand: every action, the board, and the outcome.
/// Serialized to JSONL for hand-history storage and later analysis.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    pub hand_no: u32,
    /// RNG seed for the session, when known (enables deterministic replay).
    pub seed: Option<u64>,
    pub actions: Vec<ActionRecord>,
    pub board: Vec<Card>,
    pub pot: u32,
    pub winners: Vec<usize>,
    pub showdown: bool,
    /// Timestamp when the hand finished (RFC3339).
    #[serde(default)]
    pub ts: Option<String>,
}

/// Appends one JSON line per hand to a history file.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
        })
    }

    /// A logger that validates and drops records instead of writing them.
    pub fn sink() -> Self {
        Self { writer: None }
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
