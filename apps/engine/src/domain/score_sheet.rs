//! Per-player ledger of candidate and chosen scores.
//!
//! The sheet subscribes to its cup at construction: every roll overwrites
//! the candidate values, while `used` is append-only and keeps the value a
//! category had at the moment it was picked.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::domain::cup::{Cup, DiceCup};
use crate::domain::dice::Die;
use crate::domain::rules::Rules;
use crate::domain::score_types::{Category, ScoreSection};
use crate::domain::scorer;
use crate::domain::snapshot::ScoreSheetSnapshot;
use crate::errors::domain::DomainError;

/// Section → category → value.
pub type ScoreTable = BTreeMap<ScoreSection, BTreeMap<Category, u32>>;

/// Payload of the "score used" event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreUsed {
    pub section: ScoreSection,
    pub category: Category,
    pub value: u32,
}

type ScoreUsedListener = Box<dyn FnMut(&ScoreUsed) + Send>;

#[derive(Debug)]
struct Ledger {
    scores: ScoreTable,
    used: ScoreTable,
}

impl Ledger {
    fn empty() -> Self {
        let table = || {
            ScoreSection::ALL
                .into_iter()
                .map(|section| (section, BTreeMap::new()))
                .collect::<ScoreTable>()
        };
        Self {
            scores: table(),
            used: table(),
        }
    }

    fn record_candidates(&mut self, dice: &[u8]) {
        for candidate in scorer::score(dice) {
            self.scores
                .entry(candidate.section())
                .or_default()
                .insert(candidate.category, candidate.value);
        }
    }

    fn is_used(&self, section: ScoreSection, category: Category) -> bool {
        self.used
            .get(&section)
            .is_some_and(|used| used.contains_key(&category))
    }

    fn candidate_names(&self, section: ScoreSection) -> Vec<String> {
        self.scores
            .get(&section)
            .map(|scores| scores.keys().map(|c| c.name().to_string()).collect())
            .unwrap_or_default()
    }
}

pub struct ScoreSheet {
    ledger: Arc<Mutex<Ledger>>,
    listeners: Vec<ScoreUsedListener>,
    rules: Rules,
}

impl ScoreSheet {
    /// Bind a sheet to `cup`, seeded from the cup's current dice.
    pub fn new(cup: &mut Cup) -> Self {
        Self::with_rules(cup, Rules::default())
    }

    pub fn with_rules(cup: &mut Cup, rules: Rules) -> Self {
        let ledger = Arc::new(Mutex::new(Ledger::empty()));
        ledger.lock().record_candidates(&cup.dice_values());

        let subscribed = Arc::clone(&ledger);
        cup.on_roll(move |dice: &[Die]| {
            let values: Vec<u8> = dice.iter().map(Die::value).collect();
            subscribed.lock().record_candidates(&values);
        });

        Self {
            ledger,
            listeners: Vec::new(),
            rules,
        }
    }

    /// Subscribe to "score used" events; listeners run in registration order.
    pub fn on_score_used<F>(&mut self, listener: F)
    where
        F: FnMut(&ScoreUsed) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Pick a category by its sheet name, freezing its current value.
    ///
    /// Returns the emitted "score used" event.
    ///
    /// Fails with `ScoreUsed` if the category was already picked and with
    /// `ScoreDoesNotExist` if `name` is not a candidate in `section`.
    pub fn use_score(
        &mut self,
        section: ScoreSection,
        name: &str,
    ) -> Result<ScoreUsed, DomainError> {
        let category = Category::from_name(name).filter(|c| c.section() == section);
        let event = {
            let mut ledger = self.ledger.lock();
            if let Some(category) = category {
                if ledger.is_used(section, category) {
                    return Err(DomainError::score_used(section, name));
                }
            }
            let Some((category, value)) = category.and_then(|category| {
                ledger
                    .scores
                    .get(&section)
                    .and_then(|scores| scores.get(&category))
                    .map(|&value| (category, value))
            }) else {
                return Err(DomainError::score_does_not_exist(
                    section,
                    name,
                    ledger.candidate_names(section),
                ));
            };
            ledger
                .used
                .entry(section)
                .or_default()
                .insert(category, value);
            ScoreUsed {
                section,
                category,
                value,
            }
        };

        debug!(%section, category = %event.category, value = event.value, "score used");
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
        Ok(event)
    }

    /// Typed variant of [`ScoreSheet::use_score`].
    pub fn use_category(&mut self, category: Category) -> Result<ScoreUsed, DomainError> {
        self.use_score(category.section(), category.name())
    }

    /// Latest candidate values.
    pub fn scores(&self) -> ScoreTable {
        self.ledger.lock().scores.clone()
    }

    /// Values frozen at pick time.
    pub fn used_scores(&self) -> ScoreTable {
        self.ledger.lock().used.clone()
    }

    pub fn candidate(&self, category: Category) -> Option<u32> {
        self.ledger
            .lock()
            .scores
            .get(&category.section())
            .and_then(|scores| scores.get(&category).copied())
    }

    pub fn is_used(&self, category: Category) -> bool {
        self.ledger.lock().is_used(category.section(), category)
    }

    /// True while some candidate has not been used.
    pub fn can_play(&self) -> bool {
        let ledger = self.ledger.lock();
        ledger.scores.iter().any(|(&section, scores)| {
            scores
                .keys()
                .any(|&category| !ledger.is_used(section, category))
        })
    }

    pub fn section_subtotal(&self, section: ScoreSection) -> u32 {
        self.ledger
            .lock()
            .used
            .get(&section)
            .map(|used| used.values().sum())
            .unwrap_or(0)
    }

    pub fn upper_subtotal(&self) -> u32 {
        self.section_subtotal(ScoreSection::Upper)
    }

    pub fn lower_subtotal(&self) -> u32 {
        self.section_subtotal(ScoreSection::Lower)
    }

    /// Sum of used scores plus the upper bonus when it is earned.
    pub fn total_score(&self) -> u32 {
        let upper = self.upper_subtotal();
        upper + self.rules.upper_bonus_for(upper) + self.lower_subtotal()
    }

    /// Snapshot consumed by presentation and persistence layers.
    pub fn serialize(&self) -> ScoreSheetSnapshot {
        ScoreSheetSnapshot {
            used_scores: self.used_scores(),
            scores: self.scores(),
            can_play: self.can_play(),
            points: self.total_score(),
        }
    }
}

impl fmt::Debug for ScoreSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoreSheet")
            .field("ledger", &*self.ledger.lock())
            .field("rules", &self.rules)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
