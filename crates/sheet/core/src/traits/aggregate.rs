//! Trait Adjustment Aggregator.
//!
//! Walks active adjustment traits and produces two maps keyed by attribute
//! path: additive static sums and skill overrides. Roll options and info
//! adjustments never enter these maps.

use core::str::FromStr;
use std::collections::BTreeMap;

use super::definition::AdjustmentType;
use super::path::AttributePath;
use super::resolver::ActiveTrait;

/// Character state the adjustment gates are evaluated against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraitContext {
    pub level: u8,
    /// Medium or heavy body armor is equipped.
    pub heavy_armor: bool,
}

impl TraitContext {
    pub const fn new(level: u8, heavy_armor: bool) -> Self {
        Self { level, heavy_armor }
    }

    /// Level and armor gates both pass.
    pub fn admits(&self, active: &ActiveTrait<'_>) -> bool {
        let definition = active.definition;
        definition.is_unlocked(self.level)
            && !(definition.requires_no_heavy_armor && self.heavy_armor)
    }
}

/// A single trait's contribution to a static sum, kept for breakdowns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraitContribution {
    pub trait_id: String,
    pub name: String,
    pub value: i32,
}

/// Aggregated trait adjustments for one derivation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraitAdjustments {
    statics: BTreeMap<AttributePath, Vec<TraitContribution>>,
    overrides: BTreeMap<AttributePath, i32>,
}

impl TraitAdjustments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregates every admitted adjustment trait in `active`.
    pub fn collect(active: &[ActiveTrait<'_>], context: TraitContext) -> Self {
        let mut adjustments = Self::new();

        for entry in active {
            let definition = entry.definition;
            if !context.admits(entry) {
                continue;
            }

            if let Some(adjustment) = definition.adjustment_of(AdjustmentType::Static) {
                let value = adjustment.value.resolve(context.level);
                match adjustment.target.as_deref().map(AttributePath::from_str) {
                    Some(Ok(path)) => adjustments.add_static(
                        path,
                        TraitContribution {
                            trait_id: definition.id.clone(),
                            name: definition.name.clone(),
                            value,
                        },
                    ),
                    Some(Err(error)) => {
                        tracing::debug!(
                            trait_id = %definition.id,
                            %error,
                            "ignoring static adjustment"
                        );
                    }
                    None => {
                        tracing::debug!(
                            trait_id = %definition.id,
                            "static adjustment has no target"
                        );
                    }
                }
            } else if let Some(adjustment) =
                definition.adjustment_of(AdjustmentType::SkillOverride)
            {
                let value = adjustment.value.resolve(context.level);
                for target in &adjustment.targets {
                    match target.parse::<AttributePath>() {
                        Ok(path) => adjustments.add_override(path, value),
                        Err(error) => {
                            tracing::debug!(
                                trait_id = %definition.id,
                                %error,
                                "ignoring override target"
                            );
                        }
                    }
                }
            }
        }

        adjustments
    }

    pub fn add_static(&mut self, path: AttributePath, contribution: TraitContribution) {
        self.statics.entry(path).or_default().push(contribution);
    }

    /// Records an override unless a lower one is already recorded.
    ///
    /// Lowest wins: override targets are lower-is-better, so the smallest
    /// value is the most generous one. Do not flip this to highest-wins.
    pub fn add_override(&mut self, path: AttributePath, value: i32) {
        match self.overrides.get(&path) {
            Some(&current) if current <= value => {
                tracing::debug!(%path, current, superseded = value, "keeping lower override");
            }
            _ => {
                self.overrides.insert(path, value);
            }
        }
    }

    /// Sum of static adjustments for exactly `path`.
    pub fn static_total(&self, path: &AttributePath) -> i32 {
        self.contributions(path).iter().map(|c| c.value).sum()
    }

    /// Individual static contributions for `path`, in trait order.
    pub fn contributions(&self, path: &AttributePath) -> &[TraitContribution] {
        self.statics.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn override_for(&self, path: &AttributePath) -> Option<i32> {
        self.overrides.get(path).copied()
    }

    /// Winning override per path.
    pub fn overrides(&self) -> impl Iterator<Item = (&AttributePath, i32)> {
        self.overrides.iter().map(|(path, value)| (path, *value))
    }

    pub fn is_empty(&self) -> bool {
        self.statics.is_empty() && self.overrides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TraitSelections;
    use crate::traits::definition::{Adjustment, BuildItem, TraitCategory, TraitDefinition};
    use crate::traits::resolver::ActiveTraitResolver;
    use crate::traits::value::{AdjustmentValue, LevelSteps};

    fn collect(items: &[&BuildItem], level: u8, heavy_armor: bool) -> TraitAdjustments {
        let selections = TraitSelections::new();
        let active = ActiveTraitResolver::new(&selections, level).resolve(items.iter().copied());
        TraitAdjustments::collect(&active, TraitContext::new(level, heavy_armor))
    }

    fn static_trait(id: &str, target: &str, value: i32) -> TraitDefinition {
        let adjustment = Adjustment::new(AdjustmentType::Static, target, value);
        TraitDefinition::adjustment(id, id, adjustment)
    }

    fn override_trait(id: &str, value: i32) -> TraitDefinition {
        let adjustment = Adjustment::skill_override(["skills.survival"], value);
        TraitDefinition::adjustment(id, id, adjustment)
    }

    #[test]
    fn statics_on_same_path_accumulate() {
        let item = BuildItem::class("fighter", "Fighter")
            .with_trait(TraitCategory::Passive, static_trait("a", "saves.doom", 1))
            .with_trait(TraitCategory::Passive, static_trait("b", "saves.doom", 2));

        let adjustments = collect(&[&item], 1, false);
        let doom = "saves.doom".parse().unwrap();
        assert_eq!(adjustments.static_total(&doom), 3);
        assert_eq!(adjustments.contributions(&doom).len(), 2);
    }

    #[test]
    fn lowest_override_wins() {
        let item = BuildItem::class("hunter", "Hunter")
            .with_trait(TraitCategory::Passive, override_trait("a", 5))
            .with_trait(TraitCategory::Passive, override_trait("b", 3))
            .with_trait(TraitCategory::Passive, override_trait("c", 4));

        let adjustments = collect(&[&item], 1, false);
        let survival = AttributePath::skill("survival");
        assert_eq!(adjustments.override_for(&survival), Some(3));
    }

    #[test]
    fn min_level_gates_contribution() {
        let item = BuildItem::class("knight", "Knight").with_trait(
            TraitCategory::Passive,
            static_trait("late-ac", "ac", 1).with_min_level(5),
        );

        let ac_at = |level| collect(&[&item], level, false).static_total(&AttributePath::Ac);
        assert_eq!(ac_at(4), 0);
        assert_eq!(ac_at(5), 1);
    }

    #[test]
    fn heavy_armor_suppresses_gated_traits() {
        let item = BuildItem::kindred("grimalkin", "Grimalkin").with_trait(
            TraitCategory::Passive,
            static_trait("defensive", "ac", 2).without_heavy_armor(),
        );

        let ac = |heavy| collect(&[&item], 1, heavy).static_total(&AttributePath::Ac);
        assert_eq!(ac(false), 2);
        assert_eq!(ac(true), 0);
    }

    #[test]
    fn duplicate_trait_applies_once() {
        let shared = static_trait("hardy", "hp.max", 2);
        let kindred = BuildItem::kindred("dwarf", "Dwarf")
            .with_trait(TraitCategory::Passive, shared.clone());
        let class = BuildItem::class("fighter", "Fighter")
            .with_trait(TraitCategory::Passive, shared);

        let adjustments = collect(&[&kindred, &class], 1, false);
        assert_eq!(adjustments.static_total(&AttributePath::HpMax), 2);
    }

    #[test]
    fn level_scaled_values_resolve() {
        let item = BuildItem::class("thief", "Thief").with_trait(
            TraitCategory::Passive,
            TraitDefinition::adjustment(
                "backstab",
                "Backstab",
                Adjustment::new(
                    AdjustmentType::Static,
                    "attack.melee",
                    AdjustmentValue::ByLevel(LevelSteps::new([(1, 1), (5, 2)])),
                ),
            ),
        );

        let melee = AttributePath::AttackMelee;
        assert_eq!(collect(&[&item], 3, false).static_total(&melee), 1);
        assert_eq!(collect(&[&item], 6, false).static_total(&melee), 2);
    }

    #[test]
    fn unresolvable_targets_and_other_kinds_are_ignored() {
        let item = BuildItem::class("bard", "Bard")
            .with_trait(
                TraitCategory::Passive,
                static_trait("bogus", "abilities.luck", 4),
            )
            .with_trait(
                TraitCategory::Passive,
                TraitDefinition::adjustment(
                    "lucky",
                    "Lucky",
                    Adjustment::new(AdjustmentType::RollOption, "saves.all", 1),
                ),
            )
            .with_trait(
                TraitCategory::Info,
                TraitDefinition::adjustment(
                    "reminder",
                    "Reminder",
                    Adjustment::new(AdjustmentType::Info, "ac", 1),
                ),
            );

        let adjustments = collect(&[&item], 1, false);
        assert!(adjustments.is_empty());
    }
}
