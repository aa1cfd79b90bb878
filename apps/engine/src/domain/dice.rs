use serde::{Deserialize, Serialize};

use crate::domain::rules::FACES;

/// A single die: face value plus held flag.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDie")]
pub struct Die {
    value: u8,
    held: bool,
}

#[derive(Deserialize)]
struct RawDie {
    value: u8,
    held: bool,
}

impl TryFrom<RawDie> for Die {
    type Error = String;

    fn try_from(raw: RawDie) -> Result<Self, Self::Error> {
        if !(1..=FACES).contains(&raw.value) {
            return Err(format!("Invalid die value: {}", raw.value));
        }
        Ok(Self {
            value: raw.value,
            held: raw.held,
        })
    }
}

impl Die {
    pub(crate) fn new(value: u8) -> Self {
        Self { value, held: false }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    pub(crate) fn hold(&mut self) {
        self.held = true;
    }

    pub(crate) fn release(&mut self) {
        self.held = false;
    }

    pub(crate) fn set_value(&mut self, value: u8) {
        self.value = value;
    }
}
