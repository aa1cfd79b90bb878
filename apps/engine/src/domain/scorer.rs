//! Pure dice → candidate-score derivation.
//!
//! Every category yields a value for every configuration; a category that
//! does not apply scores 0 rather than disappearing.

use crate::domain::rules::FACES;
use crate::domain::score_types::{Category, ScoreCandidate};

pub const FULL_HOUSE_POINTS: u32 = 25;
pub const SMALL_STRAIGHT_POINTS: u32 = 30;
pub const LARGE_STRAIGHT_POINTS: u32 = 40;
pub const YAHTZEE_POINTS: u32 = 50;

/// Candidate for every category, in sheet order.
pub fn score(dice: &[u8]) -> Vec<ScoreCandidate> {
    let counts = face_counts(dice);
    let total: u32 = dice.iter().map(|&d| d as u32).sum();
    Category::ALL
        .into_iter()
        .map(|category| ScoreCandidate {
            category,
            value: score_category(category, &counts, total),
        })
        .collect()
}

/// Value of a single category for `dice`.
pub fn score_one(category: Category, dice: &[u8]) -> u32 {
    let counts = face_counts(dice);
    let total: u32 = dice.iter().map(|&d| d as u32).sum();
    score_category(category, &counts, total)
}

fn score_category(category: Category, counts: &[u8; FACES as usize], total: u32) -> u32 {
    match category {
        Category::Aces
        | Category::Twos
        | Category::Threes
        | Category::Fours
        | Category::Fives
        | Category::Sixes => category
            .face()
            .map(|face| counts[(face - 1) as usize] as u32 * face as u32)
            .unwrap_or(0),
        Category::ThreeOfAKind => of_a_kind(counts, 3, total),
        Category::FourOfAKind => of_a_kind(counts, 4, total),
        Category::FullHouse => {
            let has3 = counts.iter().any(|&c| c == 3);
            let has2 = counts.iter().any(|&c| c == 2);
            if has3 && has2 {
                FULL_HOUSE_POINTS
            } else {
                0
            }
        }
        Category::SmallStraight => {
            if longest_run(counts) >= 4 {
                SMALL_STRAIGHT_POINTS
            } else {
                0
            }
        }
        Category::LargeStraight => {
            if longest_run(counts) >= 5 {
                LARGE_STRAIGHT_POINTS
            } else {
                0
            }
        }
        Category::Yahtzee => {
            let n = counts.iter().map(|&c| c as usize).sum::<usize>();
            if n > 0 && counts.iter().any(|&c| c as usize == n) {
                YAHTZEE_POINTS
            } else {
                0
            }
        }
        Category::Chance => total,
    }
}

fn face_counts(dice: &[u8]) -> [u8; FACES as usize] {
    let mut counts = [0u8; FACES as usize];
    for &d in dice {
        if (1..=FACES).contains(&d) {
            counts[(d - 1) as usize] += 1;
        }
    }
    counts
}

fn of_a_kind(counts: &[u8; FACES as usize], n: u8, total: u32) -> u32 {
    if counts.iter().any(|&c| c >= n) {
        total
    } else {
        0
    }
}

/// Length of the longest run of consecutive faces present.
fn longest_run(counts: &[u8; FACES as usize]) -> usize {
    let mut best = 0;
    let mut run = 0;
    for &c in counts {
        if c > 0 {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}
