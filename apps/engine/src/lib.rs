#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod telemetry;


// Re-exports for public API
pub use config::rules::rules_from_env;
pub use domain::{
    Action, ActionOutcome, Category, Cup, DiceCup, Die, Game, GameSnapshot, NonResettableCup,
    Player, RandomSource, Rules, ScoreSection, ScoreSheet, ScoreSheetSnapshot,
};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use telemetry::init_tracing;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
