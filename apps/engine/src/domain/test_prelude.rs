//! Shared helpers for domain unit tests.

use std::collections::VecDeque;
use std::env;
use std::sync::Arc;

use parking_lot::Mutex;
use proptest::prelude::ProptestConfig;

use crate::domain::cup::Cup;
use crate::domain::player::Player;
use crate::domain::random::RandomSource;

/// Proptest config with the case count taken from `PROPTEST_CASES`.
pub fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(32);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

/// Unit value that maps onto `face`.
pub fn unit_for(face: u8) -> f64 {
    (face as f64 - 0.5) / 6.0
}

/// Random source whose value can be re-pinned after a cup owns it.
pub fn pinned(value: f64) -> (Arc<Mutex<f64>>, impl RandomSource) {
    let handle = Arc::new(Mutex::new(value));
    let source = {
        let handle = Arc::clone(&handle);
        move || *handle.lock()
    };
    (handle, source)
}

/// Random source replaying queued values; falls back to 0 (a one) when empty.
pub fn queued() -> (Arc<Mutex<VecDeque<f64>>>, impl RandomSource) {
    let queue = Arc::new(Mutex::new(VecDeque::new()));
    let source = {
        let queue = Arc::clone(&queue);
        move || queue.lock().pop_front().unwrap_or(0.0)
    };
    (queue, source)
}

/// `count` players named "Tester 1".."Tester N" with seeded cups.
pub fn generate_players(count: usize) -> Vec<Player> {
    (0..count)
        .map(|i| Player::new(format!("Tester {}", i + 1), Cup::seeded(i as u64)))
        .collect()
}
