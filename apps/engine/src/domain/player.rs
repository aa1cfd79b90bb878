use crate::domain::cup::{Cup, DiceCup};
use crate::domain::dice::Die;
use crate::domain::random::RandomSource;
use crate::domain::rules::Rules;
use crate::domain::score_sheet::{ScoreSheet, ScoreUsed};

/// A named seat: one cup and the score sheet bound to it.
#[derive(Debug)]
pub struct Player {
    name: String,
    cup: Cup,
    score_sheet: ScoreSheet,
}

impl Player {
    /// Seat around an existing cup; the sheet scores with the default rules.
    pub fn new(name: impl Into<String>, cup: Cup) -> Self {
        Self::assemble(name, cup, Rules::default())
    }

    /// Build the cup and sheet from one rule set.
    pub fn with_rules(
        name: impl Into<String>,
        random: impl RandomSource + 'static,
        rules: Rules,
    ) -> Self {
        Self::assemble(name, Cup::with_rules(random, rules), rules)
    }

    fn assemble(name: impl Into<String>, mut cup: Cup, rules: Rules) -> Self {
        let score_sheet = ScoreSheet::with_rules(&mut cup, rules);
        Self {
            name: name.into(),
            cup,
            score_sheet,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cup(&self) -> &Cup {
        &self.cup
    }

    pub fn score_sheet(&self) -> &ScoreSheet {
        &self.score_sheet
    }

    /// Observe this player's rolls; runs after the sheet has refreshed.
    pub fn on_roll<F>(&mut self, listener: F)
    where
        F: FnMut(&[Die]) + Send + 'static,
    {
        self.cup.on_roll(listener);
    }

    pub fn on_score_used<F>(&mut self, listener: F)
    where
        F: FnMut(&ScoreUsed) + Send + 'static,
    {
        self.score_sheet.on_score_used(listener);
    }

    pub(crate) fn cup_mut(&mut self) -> &mut Cup {
        &mut self.cup
    }

    pub(crate) fn score_sheet_mut(&mut self) -> &mut ScoreSheet {
        &mut self.score_sheet
    }

    /// Give the cup back its full roll budget with every die released.
    pub(crate) fn end_turn(&mut self) {
        self.cup.reset_rolls();
        self.cup.release_all();
    }
}
