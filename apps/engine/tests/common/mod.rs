#![allow(dead_code)]

// tests/common/mod.rs
use engine::{Action, AppError, Game, ScoreSection};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    engine_test_support::logging::init();
}

/// Roll once, then pick `(section, name)` for the current player.
pub async fn roll_and_pick(game: &mut Game, section: ScoreSection, name: &str) -> Result<(), AppError> {
    game.dispatch(Action::Roll).await?;
    game.dispatch(Action::pick(section, name)).await?;
    Ok(())
}
