/// Dice per cup.
pub const N_DICE: usize = 5;
/// Faces on a die; values are `1..=FACES`.
pub const FACES: u8 = 6;
/// Default roll budget per turn.
pub const MAX_ROLLS: u8 = 3;
/// Upper-section subtotal that earns the bonus.
pub const UPPER_BONUS_THRESHOLD: u32 = 63;
/// Points added once the upper subtotal reaches the threshold.
pub const UPPER_BONUS: u32 = 35;

/// Tunable rule constants shared by cups and score sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub max_rolls: u8,
    pub upper_bonus_threshold: u32,
    pub upper_bonus: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_rolls: MAX_ROLLS,
            upper_bonus_threshold: UPPER_BONUS_THRESHOLD,
            upper_bonus: UPPER_BONUS,
        }
    }
}

impl Rules {
    /// Bonus owed for an upper-section subtotal.
    pub fn upper_bonus_for(&self, upper_subtotal: u32) -> u32 {
        if upper_subtotal >= self.upper_bonus_threshold {
            self.upper_bonus
        } else {
            0
        }
    }
}
