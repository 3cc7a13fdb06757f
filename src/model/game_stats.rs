use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use crate::error::RecordParseError;
use crate::helpers::format_duration;

/// Outcome of one finished game. Fields are readable everywhere but only
/// this module can change them.
///
/// The duration is kept as the stored `f64` seconds so a load/save cycle
/// writes back exactly what was read.
#[readonly::make]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttemptRecord {
    pub attempts: u32,
    pub duration_secs: f64,
}

impl AttemptRecord {
    pub fn new(attempts: u32, duration: Duration) -> Self {
        Self {
            attempts,
            duration_secs: duration.as_secs_f64(),
        }
    }
}

/// The on-disk form: `<attempts>,<duration_seconds>`.
impl Display for AttemptRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.attempts, self.duration_secs)
    }
}

impl FromStr for AttemptRecord {
    type Err = RecordParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.trim().split(',').collect();
        let [attempts, duration] = fields.as_slice() else {
            return Err(RecordParseError::FieldCount(fields.len()));
        };

        let attempts = attempts
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| RecordParseError::Attempts(attempts.to_string()))?;

        let duration_secs = duration
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|secs| secs.is_finite() && *secs >= 0.0)
            .ok_or_else(|| RecordParseError::Duration(duration.to_string()))?;

        Ok(Self {
            attempts,
            duration_secs,
        })
    }
}

/// Every recorded game in play order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsLog {
    records: Vec<AttemptRecord>,
}

impl StatisticsLog {
    pub fn new(records: Vec<AttemptRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: AttemptRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[AttemptRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Aggregates over the whole log, `None` before the first game.
    pub fn global_stats(&self) -> Option<GlobalStats> {
        let best_attempts = self.records.iter().map(|r| r.attempts).min()?;
        let fastest_game_secs = self.records.iter().map(|r| r.duration_secs).reduce(f64::min)?;

        let total_games = self.records.len();
        let total_attempts: u64 = self.records.iter().map(|r| r.attempts as u64).sum();
        let total_time: f64 = self.records.iter().map(|r| r.duration_secs).sum();

        Some(GlobalStats {
            total_games,
            best_attempts,
            fastest_game_secs,
            average_attempts: total_attempts as f64 / total_games as f64,
            average_duration_secs: total_time / total_games as f64,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlobalStats {
    pub total_games: usize,
    pub best_attempts: u32,
    pub fastest_game_secs: f64,
    pub average_attempts: f64,
    pub average_duration_secs: f64,
}

impl Display for GlobalStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total games played: {}", self.total_games)?;
        writeln!(f, "Best score (least guesses): {}", self.best_attempts)?;
        writeln!(
            f,
            "Fastest game: {}",
            format_duration(self.fastest_game_secs)
        )?;
        writeln!(f, "Average guesses per game: {:.2}", self.average_attempts)?;
        write!(
            f,
            "Average time per game: {}",
            format_duration(self.average_duration_secs)
        )
    }
}
