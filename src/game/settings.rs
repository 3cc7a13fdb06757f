use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::model::MAX_DIGIT_COUNT;

pub const DEFAULT_DIGIT_COUNT: usize = 4;
pub const STATS_FILENAME: &str = "bulls_and_cows_stats.txt";

const SEPARATOR_WIDTH: usize = 47;

/// Startup configuration handed to the session loop and the game sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    digit_count: usize,
    pub separator_line: String,
    pub stats_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            digit_count: DEFAULT_DIGIT_COUNT,
            separator_line: "-".repeat(SEPARATOR_WIDTH),
            stats_path: Self::default_stats_path(),
        }
    }
}

impl Settings {
    pub fn new(digit_count: usize) -> Result<Self, ConfigError> {
        Self::default().with_digit_count(digit_count)
    }

    pub fn with_digit_count(mut self, digit_count: usize) -> Result<Self, ConfigError> {
        if digit_count == 0 || digit_count > MAX_DIGIT_COUNT {
            return Err(ConfigError::InvalidDigitCount(digit_count));
        }
        self.digit_count = digit_count;
        Ok(self)
    }

    pub fn with_stats_path(mut self, stats_path: impl Into<PathBuf>) -> Self {
        self.stats_path = stats_path.into();
        self
    }

    pub fn digit_count(&self) -> usize {
        self.digit_count
    }

    /// The statistics file sits next to the executable; the working
    /// directory is used when that location is unknown.
    fn default_stats_path() -> PathBuf {
        env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
            .unwrap_or_default()
            .join(STATS_FILENAME)
    }
}
