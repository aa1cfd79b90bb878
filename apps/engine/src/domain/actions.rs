//! The action surface: the only way outer layers mutate a game.

use serde::{Deserialize, Serialize};

use crate::domain::score_types::{Category, ScoreSection};

/// A discrete player action, dispatched against the player whose turn it is.
///
/// Serialized adjacently to its arguments, e.g.
/// `{"action":"pick score","section":"upper","name":"Aces"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum Action {
    #[serde(rename = "roll")]
    Roll,
    #[serde(rename = "hold die")]
    HoldDie { index: usize },
    #[serde(rename = "release die")]
    ReleaseDie { index: usize },
    #[serde(rename = "pick score")]
    PickScore { section: ScoreSection, name: String },
}

impl Action {
    pub fn pick(section: ScoreSection, name: impl Into<String>) -> Self {
        Action::PickScore {
            section,
            name: name.into(),
        }
    }

    pub fn pick_category(category: Category) -> Self {
        Self::pick(category.section(), category.name())
    }

    /// Wire name of the action.
    pub const fn name(&self) -> &'static str {
        match self {
            Action::Roll => "roll",
            Action::HoldDie { .. } => "hold die",
            Action::ReleaseDie { .. } => "release die",
            Action::PickScore { .. } => "pick score",
        }
    }
}

/// What a successfully dispatched action did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    Rolled {
        rolls: u8,
    },
    DieHeld {
        index: usize,
    },
    DieReleased {
        index: usize,
    },
    ScorePicked {
        section: ScoreSection,
        category: Category,
        value: u32,
        next_player: usize,
        turn: u32,
    },
}
