use std::io;

use anyhow::Context;
use bulls_and_cows::game::settings::DEFAULT_DIGIT_COUNT;
use bulls_and_cows::game::{Console, SessionLoop, Settings};

fn init_logging() {
    env_logger::init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let settings = Settings::new(DEFAULT_DIGIT_COUNT).context("invalid game configuration")?;
    log::debug!(target: "main", "Stats file: {}", settings.stats_path.display());

    let mut console = Console::new(io::stdin().lock(), io::stdout());
    SessionLoop::new(settings, None)
        .run(&mut console)
        .context("game aborted")?;

    Ok(())
}
