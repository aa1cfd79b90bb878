//! Public snapshot API for observing game state without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::cup::DiceCup;
use crate::domain::dice::Die;
use crate::domain::game::Game;
use crate::domain::player::Player;
use crate::domain::score_sheet::ScoreTable;

/// The externally consumed view of one score sheet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSheetSnapshot {
    pub used_scores: ScoreTable,
    pub scores: ScoreTable,
    pub can_play: bool,
    pub points: u32,
}

/// Public info about a single player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub dice: Vec<Die>,
    pub rolls: u8,
    pub sheet: ScoreSheetSnapshot,
}

/// Top-level snapshot: turn header plus every player in seat order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub turn: u32,
    pub current_player: usize,
    pub players: Vec<PlayerSnapshot>,
}

/// Entry point: produce a snapshot of the current game state.
pub fn snapshot(game: &Game) -> GameSnapshot {
    GameSnapshot {
        turn: game.turn(),
        current_player: game.current_player_index(),
        players: game.players().iter().map(player_snapshot).collect(),
    }
}

pub fn player_snapshot(player: &Player) -> PlayerSnapshot {
    PlayerSnapshot {
        name: player.name().to_string(),
        dice: player.cup().dice(),
        rolls: player.cup().rolls(),
        sheet: player.score_sheet().serialize(),
    }
}
