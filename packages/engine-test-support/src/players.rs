//! Player factories for game-level tests.

use engine::domain::ChaChaRandom;
use engine::{Cup, Player, RandomSource};

/// `count` players named "Tester 1".."Tester N", each with a seeded cup.
pub fn generate_players(count: usize) -> Vec<Player> {
    (0..count)
        .map(|i| {
            Player::new(
                format!("Tester {}", i + 1),
                Cup::new(ChaChaRandom::seed_from_u64(i as u64)),
            )
        })
        .collect()
}

/// A single player whose cup draws from `source`.
pub fn player_with(name: &str, source: impl RandomSource + 'static) -> Player {
    Player::new(name, Cup::new(source))
}
