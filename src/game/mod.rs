pub mod console;
pub mod game_session;
pub mod session_loop;
pub mod settings;
pub mod stats_manager;

pub use console::Console;
pub use game_session::{GameSession, GuessOutcome, SessionState};
pub use session_loop::SessionLoop;
pub use settings::Settings;
pub use stats_manager::StatsManager;
