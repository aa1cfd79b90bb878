//! Error codes exposed by the engine.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and are the strings outer layers
//! (HTTP handlers, persistence, UIs) should match on.

use core::fmt;

/// Centralized error codes for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Game setup
    /// Game constructed with an empty roster
    InvalidPlayers,

    // Action validation
    /// Hold/release index outside the cup
    InvalidDieIndex,
    /// Category already used for the section
    ScoreUsed,
    /// Category not among the current candidates
    ScoreDoesNotExist,

    // System Errors
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidPlayers => "INVALID_PLAYERS",

            Self::InvalidDieIndex => "INVALID_DIE_INDEX",
            Self::ScoreUsed => "SCORE_USED",
            Self::ScoreDoesNotExist => "SCORE_DOES_NOT_EXIST",

            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
