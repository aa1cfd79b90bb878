//! Injectable uniform random source for dice.
//!
//! Cups never touch a global RNG: every cup owns a [`RandomSource`] that
//! yields values in `[0, 1)`, mapped to faces with `floor(x * 6) + 1`.
//! Tests pin the source to fixed values to force specific outcomes.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::rules::FACES;

/// Uniform generator over `[0, 1)`.
pub trait RandomSource: Send {
    fn next_unit(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64 + Send,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// ChaCha-backed source; OS-seeded by default, reproducible from a `u64`.
#[derive(Debug, Clone)]
pub struct ChaChaRandom {
    rng: ChaCha8Rng,
}

impl ChaChaRandom {
    pub fn from_os_rng() -> Self {
        Self {
            rng: ChaCha8Rng::from_os_rng(),
        }
    }

    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for ChaChaRandom {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl RandomSource for ChaChaRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Map a unit value to a die face.
///
/// Out-of-range inputs from misbehaving sources are clamped into `1..=6`.
pub fn face_from_unit(x: f64) -> u8 {
    let scaled = (x * FACES as f64).floor();
    if scaled.is_nan() || scaled < 0.0 {
        return 1;
    }
    (scaled as u8).min(FACES - 1) + 1
}
