use serde::{Deserialize, Serialize};

use crate::engine::Settlement;
use crate::hand::HandView;
use crate::rules::Outcome;

/// Record of one settled round, stored one JSON object per line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Shoe seed of the session that played the round
    pub seed: Option<u64>,
    pub player: HandView,
    pub dealer: HandView,
    pub outcome: Outcome,
    /// Timestamp when the round was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    pub fn from_settlement(round_id: String, seed: Option<u64>, settlement: &Settlement) -> Self {
        Self {
            round_id,
            seed,
            player: settlement.player.clone(),
            dealer: settlement.dealer.clone(),
            outcome: settlement.outcome,
            ts: None,
        }
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

/// Appends [`RoundRecord`]s to a JSONL file.
///
/// Records already in the file are kept. Round ids continue after the
/// highest sequence number logged for the current date, so repeated
/// sessions on one file never reuse an id.
pub struct RoundLogger {
    writer: BufWriter<File>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let date = Utc::now().format("%Y%m%d").to_string();
        let existing = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e),
        };
        let seq = last_seq_for(&existing, &date);

        let f = OpenOptions::new().create(true).append(true).open(path)?;
        let mut writer = BufWriter::new(f);
        // An interrupted write leaves no trailing newline; keep the next record on its own line.
        if !existing.is_empty() && !existing.ends_with('\n') {
            writer.write_all(b"\n")?;
        }
        Ok(Self { writer, date, seq })
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

/// Highest sequence number among `date`'s round ids in JSONL `content`.
fn last_seq_for(content: &str, date: &str) -> u32 {
    let prefix = format!("{}-", date);
    content
        .lines()
        .filter_map(|l| serde_json::from_str::<RoundRecord>(l).ok())
        .filter_map(|r| {
            r.round_id
                .strip_prefix(&prefix)
                .and_then(|n| n.parse::<u32>().ok())
        })
        .max()
        .unwrap_or(0)
}
