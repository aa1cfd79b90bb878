//! The dice cup: fixed set of dice, reroll budget and hold policy.
//!
//! Dice and the roll counter live behind a shared handle so that
//! [`Cup::as_not_resettable`] can hand out a view that mirrors the cup live
//! without being able to reset it.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::domain::dice::Die;
use crate::domain::random::{face_from_unit, ChaChaRandom, RandomSource};
use crate::domain::rules::{Rules, N_DICE};
use crate::errors::domain::DomainError;

type RollListener = Box<dyn FnMut(&[Die]) + Send>;

#[derive(Debug)]
struct CupState {
    dice: Vec<Die>,
    rolls: u8,
}

/// Read surface shared by a cup and its restricted views.
pub trait DiceCup {
    /// Dice with their held state, in cup order.
    fn dice(&self) -> Vec<Die>;

    /// Rolls taken since the last reset.
    fn rolls(&self) -> u8;

    /// Reset the roll counter, when this handle is allowed to.
    fn reset_rolls(&mut self);

    /// Face values only, in cup order.
    fn dice_values(&self) -> Vec<u8> {
        self.dice().iter().map(Die::value).collect()
    }
}

pub struct Cup {
    state: Arc<Mutex<CupState>>,
    random: Box<dyn RandomSource>,
    listeners: Vec<RollListener>,
    max_rolls: u8,
    resettable: bool,
}

impl Cup {
    /// New cup with default rules. Initial faces are random but do not count as a roll.
    pub fn new(random: impl RandomSource + 'static) -> Self {
        Self::with_rules(random, Rules::default())
    }

    pub fn with_rules(random: impl RandomSource + 'static, rules: Rules) -> Self {
        let mut random: Box<dyn RandomSource> = Box::new(random);
        let dice = (0..N_DICE)
            .map(|_| Die::new(face_from_unit(random.next_unit())))
            .collect();
        Self {
            state: Arc::new(Mutex::new(CupState { dice, rolls: 0 })),
            random,
            listeners: Vec::new(),
            max_rolls: rules.max_rolls,
            resettable: true,
        }
    }

    /// Reproducible cup backed by a seeded ChaCha stream.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaChaRandom::seed_from_u64(seed))
    }

    pub fn with_resettable(mut self, resettable: bool) -> Self {
        self.resettable = resettable;
        self
    }

    pub fn max_rolls(&self) -> u8 {
        self.max_rolls
    }

    pub fn is_resettable(&self) -> bool {
        self.resettable
    }

    pub fn rolls_left(&self) -> u8 {
        self.max_rolls.saturating_sub(self.rolls())
    }

    /// Subscribe to roll events.
    ///
    /// Listeners run synchronously, in registration order, after the new
    /// faces are committed and before `roll` returns.
    pub fn on_roll<F>(&mut self, listener: F)
    where
        F: FnMut(&[Die]) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Re-randomize every non-held die and return the new roll count.
    ///
    /// Once the budget is spent this is a no-op returning the current count.
    pub fn roll(&mut self) -> u8 {
        let (rolls, dice) = {
            let mut state = self.state.lock();
            if state.rolls >= self.max_rolls {
                debug!(rolls = state.rolls, "roll budget exhausted");
                return state.rolls;
            }
            state.rolls += 1;
            for die in state.dice.iter_mut().filter(|d| !d.is_held()) {
                die.set_value(face_from_unit(self.random.next_unit()));
            }
            (state.rolls, state.dice.clone())
        };

        debug!(rolls, dice = ?dice.iter().map(Die::value).collect::<Vec<_>>(), "cup rolled");
        for listener in self.listeners.iter_mut() {
            listener(&dice);
        }
        rolls
    }

    pub fn hold(&mut self, indices: &[usize]) -> Result<(), DomainError> {
        self.set_held(indices, true)
    }

    pub fn release(&mut self, indices: &[usize]) -> Result<(), DomainError> {
        self.set_held(indices, false)
    }

    /// Clear every held flag.
    pub fn release_all(&mut self) {
        for die in self.state.lock().dice.iter_mut() {
            die.release();
        }
    }

    /// View sharing this cup's dice and counter whose reset is a no-op.
    pub fn as_not_resettable(&self) -> NonResettableCup {
        NonResettableCup {
            state: Arc::clone(&self.state),
        }
    }

    fn set_held(&mut self, indices: &[usize], held: bool) -> Result<(), DomainError> {
        let mut state = self.state.lock();
        let n_dice = state.dice.len();
        if let Some(&index) = indices.iter().find(|&&i| i >= n_dice) {
            return Err(DomainError::invalid_die_index(index, n_dice));
        }
        for &index in indices {
            let die = &mut state.dice[index];
            if held {
                die.hold();
            } else {
                die.release();
            }
        }
        debug!(?indices, held, "dice hold state updated");
        Ok(())
    }
}

impl Default for Cup {
    fn default() -> Self {
        Self::new(ChaChaRandom::from_os_rng())
    }
}

impl DiceCup for Cup {
    fn dice(&self) -> Vec<Die> {
        self.state.lock().dice.clone()
    }

    fn rolls(&self) -> u8 {
        self.state.lock().rolls
    }

    fn reset_rolls(&mut self) {
        if self.resettable {
            self.state.lock().rolls = 0;
        }
    }
}

impl fmt::Debug for Cup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Cup")
            .field("dice", &state.dice)
            .field("rolls", &state.rolls)
            .field("max_rolls", &self.max_rolls)
            .field("resettable", &self.resettable)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

/// Restricted view over a [`Cup`]: live reads, no-op reset.
#[derive(Debug, Clone)]
pub struct NonResettableCup {
    state: Arc<Mutex<CupState>>,
}

impl DiceCup for NonResettableCup {
    fn dice(&self) -> Vec<Die> {
        self.state.lock().dice.clone()
    }

    fn rolls(&self) -> u8 {
        self.state.lock().rolls
    }

    fn reset_rolls(&mut self) {}
}
