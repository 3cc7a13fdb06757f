mod game_stats;
mod guess;
mod score;
mod secret_number;
mod timer_state;

pub use game_stats::{AttemptRecord, GlobalStats, StatisticsLog};
pub use guess::Guess;
pub use score::ScoreResult;
pub use secret_number::{SecretNumber, MAX_DIGIT_COUNT};
pub use timer_state::TimerState;
