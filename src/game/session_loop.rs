use std::io::{BufRead, Write};

use log::{debug, error};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use super::console::Console;
use super::game_session::GameSession;
use super::settings::Settings;
use super::stats_manager::StatsManager;
use crate::error::GameError;
use crate::model::{SecretNumber, StatisticsLog};

pub const PLAY_AGAIN_PROMPT: &str = "\nPlay again? (y/n): ";

/// Plays games back to back, keeping the statistics file current, until the
/// player stops answering `y`.
pub struct SessionLoop {
    settings: Settings,
    stats_manager: StatsManager,
    rng: StdRng,
}

impl SessionLoop {
    pub fn new(settings: Settings, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().next_u64());
        debug!(target: "session", "Session loop seed: {}", seed);
        let stats_manager = StatsManager::new(settings.stats_path.clone());
        Self {
            settings,
            stats_manager,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Runs until the player declines another game; returns the final log.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<StatisticsLog, GameError> {
        console.say("\nWelcome to Bulls and Cows!")?;

        let mut log = self.stats_manager.load()?;
        display_stats(console, &log)?;

        loop {
            let secret = SecretNumber::generate(self.settings.digit_count(), &mut self.rng)?;
            let record = GameSession::new(secret).play(console, &self.settings)?;

            if let Err(e) = self.stats_manager.record_game(&mut log, record) {
                error!(
                    target: "stats",
                    "Failed to save stats to {}: {}",
                    self.stats_manager.path().display(),
                    e
                );
                console.say(format!("Could not save statistics: {}", e))?;
            }

            display_stats(console, &log)?;

            let answer = console.prompt(PLAY_AGAIN_PROMPT)?;
            if !wants_another_game(answer.as_deref()) {
                console.say("Thanks for playing!")?;
                return Ok(log);
            }
        }
    }
}

/// Only a `y` or `Y` keeps the loop going; end of input stops it.
pub fn wants_another_game(answer: Option<&str>) -> bool {
    answer.is_some_and(|a| a.trim().eq_ignore_ascii_case("y"))
}

pub fn display_stats<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    log: &StatisticsLog,
) -> Result<(), GameError> {
    console.say("\n--- Game Statistics ---")?;
    match log.global_stats() {
        None => console.say("No games played yet.")?,
        Some(stats) => {
            console.say(stats.to_string())?;
            console.say("-----------------------")?;
        }
    }
    Ok(())
}
