use serde::{Deserialize, Serialize};

use crate::game::GameResult;
use crate::round::RoundOutcome;

/// Complete transcript of one game: seats, every resolved round and the result.
/// Serialized to JSONL format, one game per line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier for this game (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// Seed used for the shuffle and in-game draws
    pub seed: Option<u64>,
    /// Seat names in registration order; moves refer to seats by index
    pub seats: Vec<String>,
    /// Resolved rounds, oldest first
    pub rounds: Vec<RoundOutcome>,
    /// Loser and reason, once the game is over
    #[serde(default)]
    pub result: Option<GameResult>,
    /// Timestamp when the game was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl GameRecord {
    /// Seat name for an index found in a move, or `"?"` for a corrupt record.
    pub fn seat_name(&self, index: usize) -> &str {
        self.seats.get(index).map(String::as_str).unwrap_or("?")
    }
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, read_to_string, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

pub struct GameLogger {
    writer: Option<BufWriter<std::fs::File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    /// Opens `path` for appending, creating parent directories as needed.
    ///
    /// Ids continue after the highest of today's ids already in the file.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Self::create_for_date(path, &Utc::now().format("%Y%m%d").to_string())
    }

    /// Like [`GameLogger::create`] with a fixed `yyyymmdd` date.
    pub fn create_for_date<P: AsRef<Path>>(path: P, date: &str) -> std::io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let seq = match read_to_string(path) {
            Ok(existing) => last_seq(&existing, date),
            Err(e) if e.kind() == ErrorKind::NotFound => 0,
            Err(e) => return Err(e),
        };
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: date.to_string(),
            seq,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
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

/// Highest sequence number among `date`'s game ids in a JSONL transcript.
/// Lines that are not records are ignored.
fn last_seq(transcript: &str, date: &str) -> u32 {
    let prefix = format!("{}-", date);
    transcript
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .filter_map(|v| {
            v.get("game_id")?
                .as_str()?
                .strip_prefix(&prefix)?
                .parse::<u32>()
                .ok()
        })
        .max()
        .unwrap_or(0)
}
