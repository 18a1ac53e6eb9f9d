//! Conditions - status effects that modify derived stats.
//!
//! Conditions are applied after stored values, manual adjustments and traits
//! have been stacked.

use super::bonus::{Bonus, BonusSource, BonusStack};
use crate::state::BaseAttributes;

/// Strategy for a condition that modifies derived stats.
///
/// # Implementation Rules
/// 1. Conditions read stored state only, never other derived values
/// 2. Conditions add labelled bonuses; they never overwrite a total
/// 3. Multiple conditions stack in the order they were added
pub trait Condition: Send + Sync {
    /// Get the condition's name (for breakdowns and logs)
    fn name(&self) -> &str;

    /// Add this condition's effect to the generic attack bonus.
    ///
    /// Returns true if anything was added.
    fn apply_to_attack(&self, _attack: &mut BonusStack) -> bool {
        false
    }
}

/// Exhaustion: −1 to attack per point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exhaustion {
    pub points: u8,
}

impl Exhaustion {
    pub fn new(points: u8) -> Self {
        Self { points }
    }
}

impl Condition for Exhaustion {
    fn name(&self) -> &str {
        "Exhaustion"
    }

    fn apply_to_attack(&self, attack: &mut BonusStack) -> bool {
        if self.points == 0 {
            return false;
        }
        attack.add(Bonus::new(
            BonusSource::Condition(self.name().to_string()),
            -i32::from(self.points),
        ));
        true
    }
}

/// A collection of active conditions.
///
/// Conditions are applied in the order they are added.
#[derive(Default)]
pub struct ConditionSet {
    conditions: Vec<Box<dyn Condition>>,
}

impl ConditionSet {
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
        }
    }

    /// Conditions recorded on the stored attributes.
    pub fn from_base(base: &BaseAttributes) -> Self {
        let mut set = Self::new();
        if base.exhaustion > 0 {
            set.add(Box::new(Exhaustion::new(base.exhaustion)));
        }
        set
    }

    pub fn add(&mut self, condition: Box<dyn Condition>) {
        self.conditions.push(condition);
    }

    pub fn apply_all_to_attack(&self, attack: &mut BonusStack) {
        for condition in &self.conditions {
            if condition.apply_to_attack(attack) {
                tracing::trace!(condition = condition.name(), "attack modified");
            }
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.conditions.iter().map(|condition| condition.name())
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }
}

impl core::fmt::Debug for ConditionSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
