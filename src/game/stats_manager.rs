use log::{debug, trace};
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use crate::model::{AttemptRecord, StatisticsLog};

/// Flat-file statistics, one `<attempts>,<duration_seconds>` line per game.
#[derive(Debug, Clone)]
pub struct StatsManager {
    path: PathBuf,
}

impl StatsManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole log. A missing file is an empty log and lines that do
    /// not parse, including lines that are not valid UTF-8, are skipped.
    pub fn load(&self) -> io::Result<StatisticsLog> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(target: "stats", "No stats file at {}", self.path.display());
                return Ok(StatisticsLog::default());
            }
            Err(e) => return Err(e),
        };

        let records = contents
            .split(|&b| b == b'\n')
            .enumerate()
            .filter_map(|(index, bytes)| {
                let line = match std::str::from_utf8(bytes) {
                    Ok(line) => line,
                    Err(e) => {
                        debug!(target: "stats", "Skipping line {}: {}", index + 1, e);
                        return None;
                    }
                };
                if line.trim().is_empty() {
                    return None;
                }
                match line.parse::<AttemptRecord>() {
                    Ok(record) => Some(record),
                    Err(e) => {
                        debug!(target: "stats", "Skipping line {}: {}", index + 1, e);
                        None
                    }
                }
            })
            .collect::<Vec<_>>();
        trace!(target: "stats", "Loaded {} records", records.len());

        Ok(StatisticsLog::new(records))
    }

    /// Overwrites the file with every record in `log`.
    pub fn save(&self, log: &StatisticsLog) -> io::Result<()> {
        let contents: String = log
            .records()
            .iter()
            .map(|record| format!("{}\n", record))
            .collect();
        fs::write(&self.path, contents)
    }

    /// Appends `record` to `log` and persists the result. The record stays in
    /// `log` even when writing fails.
    pub fn record_game(&self, log: &mut StatisticsLog, record: AttemptRecord) -> io::Result<()> {
        log.push(record);
        self.save(log)
    }
}
