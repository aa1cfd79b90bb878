//! Domain-level error type raised by the game engine.
//!
//! This error type is transport- and storage-agnostic. Outer layers that
//! need a stable identifier should use [`DomainError::code`], and callers that
//! mix engine and configuration failures can convert into
//! `crate::error::AppError` through the provided `From` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::ScoreSection;
use crate::errors::ErrorCode;

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A game was constructed without any players
    InvalidPlayers,
    /// Hold/release targeted a die outside `0..n_dice`
    InvalidDieIndex { index: usize, n_dice: usize },
    /// The category was already used in this section
    ScoreUsed { section: ScoreSection, name: String },
    /// The category is not a candidate in this section
    ScoreDoesNotExist {
        section: ScoreSection,
        name: String,
        valid: Vec<String>,
    },
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidPlayers => write!(f, "a game needs at least one player"),
            DomainError::InvalidDieIndex { index, n_dice } => {
                write!(f, "die index {index} is out of range 0..{n_dice}")
            }
            DomainError::ScoreUsed { section, name } => {
                write!(f, "score {name} in section '{section}' has already been used")
            }
            DomainError::ScoreDoesNotExist {
                section,
                name,
                valid,
            } => write!(
                f,
                "score {name} does not exist in section '{section}'. Valid names: {}",
                valid.join(", ")
            ),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn invalid_die_index(index: usize, n_dice: usize) -> Self {
        Self::InvalidDieIndex { index, n_dice }
    }

    pub fn score_used(section: ScoreSection, name: impl Into<String>) -> Self {
        Self::ScoreUsed {
            section,
            name: name.into(),
        }
    }

    pub fn score_does_not_exist(
        section: ScoreSection,
        name: impl Into<String>,
        valid: Vec<String>,
    ) -> Self {
        Self::ScoreDoesNotExist {
            section,
            name: name.into(),
            valid,
        }
    }

    /// Stable code for this error kind.
    pub const fn code(&self) -> ErrorCode {
        match self {
            DomainError::InvalidPlayers => ErrorCode::InvalidPlayers,
            DomainError::InvalidDieIndex { .. } => ErrorCode::InvalidDieIndex,
            DomainError::ScoreUsed { .. } => ErrorCode::ScoreUsed,
            DomainError::ScoreDoesNotExist { .. } => ErrorCode::ScoreDoesNotExist,
        }
    }
}
