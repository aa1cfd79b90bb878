//! Multi-player turn state machine.
//!
//! State is the `(current player, turn)` pair plus each player's cup and
//! sheet. The only transition entry point is [`Game::dispatch`]; a turn ends
//! on a successful score pick, and the turn counter advances when play
//! wraps back to the first player.

use tracing::{debug, instrument, warn};

use crate::domain::actions::{Action, ActionOutcome};
use crate::domain::player::Player;
use crate::domain::snapshot::{self, GameSnapshot};
use crate::errors::domain::DomainError;

#[derive(Debug)]
pub struct Game {
    players: Vec<Player>,
    current: usize,
    turn: u32,
}

impl Game {
    /// Start a match with a fixed roster; the first player acts on turn 1.
    pub fn new(players: Vec<Player>) -> Result<Self, DomainError> {
        if players.is_empty() {
            return Err(DomainError::InvalidPlayers);
        }
        Ok(Self {
            players,
            current: 0,
            turn: 1,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn now_playing(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn current_player_index(&self) -> usize {
        self.current
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// True while any player still has an unused category.
    pub fn any_player_can_play(&self) -> bool {
        self.players.iter().any(|p| p.score_sheet().can_play())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        snapshot::snapshot(self)
    }

    /// Dispatch an action for the player whose turn it is.
    ///
    /// Asynchronous only so I/O-driven callers can await it; the action runs
    /// to completion without suspending. Errors from the cup or sheet are
    /// returned unchanged and leave the turn state untouched.
    #[instrument(skip(self, action), fields(turn = self.turn, player = self.current, action = action.name()))]
    pub async fn dispatch(&mut self, action: Action) -> Result<ActionOutcome, DomainError> {
        self.apply(action).inspect_err(|err| {
            warn!(error = %err, code = %err.code(), "action rejected");
        })
    }

    /// Synchronous core of [`Game::dispatch`].
    pub(crate) fn apply(&mut self, action: Action) -> Result<ActionOutcome, DomainError> {
        let player = &mut self.players[self.current];
        match action {
            Action::Roll => {
                let rolls = player.cup_mut().roll();
                Ok(ActionOutcome::Rolled { rolls })
            }
            Action::HoldDie { index } => {
                player.cup_mut().hold(&[index])?;
                Ok(ActionOutcome::DieHeld { index })
            }
            Action::ReleaseDie { index } => {
                player.cup_mut().release(&[index])?;
                Ok(ActionOutcome::DieReleased { index })
            }
            Action::PickScore { section, name } => {
                let used = player.score_sheet_mut().use_score(section, &name)?;
                player.end_turn();
                self.advance();
                Ok(ActionOutcome::ScorePicked {
                    section: used.section,
                    category: used.category,
                    value: used.value,
                    next_player: self.current,
                    turn: self.turn,
                })
            }
        }
    }

    fn advance(&mut self) {
        self.current = (self.current + 1) % self.players.len();
        if self.current == 0 {
            self.turn += 1;
        }
        debug!(player = self.current, turn = self.turn, "turn advanced");
    }
}
