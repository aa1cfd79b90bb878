//! Core scoring types: ScoreSection, Category, ScoreCandidate

use std::fmt;

/// Upper (face-value) vs. lower (combination) half of the score sheet.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ScoreSection {
    Upper,
    Lower,
}

impl ScoreSection {
    pub const ALL: [ScoreSection; 2] = [ScoreSection::Upper, ScoreSection::Lower];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ScoreSection::Upper => "upper",
            ScoreSection::Lower => "lower",
        }
    }
}

impl fmt::Display for ScoreSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed set of scoring boxes.
///
/// Declaration order is sheet order: it drives `Ord`, and therefore the
/// order categories appear in snapshots.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Category {
    Aces,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
    Chance,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Category::Aces,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yahtzee,
        Category::Chance,
    ];

    pub const fn section(&self) -> ScoreSection {
        match self {
            Category::Aces
            | Category::Twos
            | Category::Threes
            | Category::Fours
            | Category::Fives
            | Category::Sixes => ScoreSection::Upper,
            Category::ThreeOfAKind
            | Category::FourOfAKind
            | Category::FullHouse
            | Category::SmallStraight
            | Category::LargeStraight
            | Category::Yahtzee
            | Category::Chance => ScoreSection::Lower,
        }
    }

    /// Name as it appears on the sheet and at the action surface.
    pub const fn name(&self) -> &'static str {
        match self {
            Category::Aces => "Aces",
            Category::Twos => "Twos",
            Category::Threes => "Threes",
            Category::Fours => "Fours",
            Category::Fives => "Fives",
            Category::Sixes => "Sixes",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::SmallStraight => "Small Straight",
            Category::LargeStraight => "Large Straight",
            Category::Yahtzee => "Yahtzee",
            Category::Chance => "Chance",
        }
    }

    /// Exact, case-sensitive lookup by sheet name.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Face counted by an upper-section category.
    pub const fn face(&self) -> Option<u8> {
        match self {
            Category::Aces => Some(1),
            Category::Twos => Some(2),
            Category::Threes => Some(3),
            Category::Fours => Some(4),
            Category::Fives => Some(5),
            Category::Sixes => Some(6),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value a player would receive right now for `category`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ScoreCandidate {
    pub category: Category,
    pub value: u32,
}

impl ScoreCandidate {
    pub fn section(&self) -> ScoreSection {
        self.category.section()
    }

    pub fn name(&self) -> &'static str {
        self.category.name()
    }
}
