//! Domain layer: pure game logic types and helpers.

pub mod actions;
pub mod cup;
pub mod dice;
pub mod game;
pub mod player;
pub mod random;
pub mod rules;
pub mod score_serde;
pub mod score_sheet;
pub mod score_types;
pub mod scorer;
pub mod snapshot;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_game;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use actions::{Action, ActionOutcome};
pub use cup::{Cup, DiceCup, NonResettableCup};
pub use dice::Die;
pub use game::Game;
pub use player::Player;
pub use random::{face_from_unit, ChaChaRandom, RandomSource};
pub use rules::{Rules, FACES, MAX_ROLLS, N_DICE, UPPER_BONUS, UPPER_BONUS_THRESHOLD};
pub use score_sheet::{ScoreSheet, ScoreTable, ScoreUsed};
pub use score_types::{Category, ScoreCandidate, ScoreSection};
pub use snapshot::{GameSnapshot, PlayerSnapshot, ScoreSheetSnapshot};
