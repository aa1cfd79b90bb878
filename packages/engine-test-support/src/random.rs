//! Deterministic random sources for driving cups in tests.

use std::collections::VecDeque;
use std::sync::Arc;

use engine::RandomSource;
use parking_lot::Mutex;

/// Largest value below 1.0; maps to a six.
pub const JUST_BELOW_ONE: f64 = 1.0 - f64::EPSILON;

/// Unit value that maps onto `face` (1..=6).
pub fn unit_for(face: u8) -> f64 {
    (face as f64 - 0.5) / 6.0
}

/// A source pinned to one value, re-pinnable through any clone.
///
/// Hand one clone to a cup and keep another to change what the next roll
/// produces, e.g. `0.0` (all ones) then [`JUST_BELOW_ONE`] (all sixes).
#[derive(Debug, Clone)]
pub struct PinnedRandom {
    value: Arc<Mutex<f64>>,
}

impl PinnedRandom {
    pub fn new(value: f64) -> Self {
        Self {
            value: Arc::new(Mutex::new(value)),
        }
    }

    pub fn set(&self, value: f64) {
        *self.value.lock() = value;
    }
}

impl RandomSource for PinnedRandom {
    fn next_unit(&mut self) -> f64 {
        *self.value.lock()
    }
}

/// A source replaying queued faces in order; yields ones once drained.
#[derive(Debug, Clone, Default)]
pub struct SequenceRandom {
    queue: Arc<Mutex<VecDeque<f64>>>,
}

impl SequenceRandom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the faces for the next `faces.len()` dice draws.
    pub fn push_faces(&self, faces: &[u8]) {
        self.queue
            .lock()
            .extend(faces.iter().map(|&f| unit_for(f)));
    }

    pub fn remaining(&self) -> usize {
        self.queue.lock().len()
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        self.queue.lock().pop_front().unwrap_or(0.0)
    }
}
