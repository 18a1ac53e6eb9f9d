//! Roll-time options.
//!
//! `rollOption` adjustments never touch the passive snapshot. They are offered
//! to the roller as opt-in toggles for one roll, matched against the dotted
//! roll path.

use super::definition::AdjustmentType;
use super::resolver::ActiveTrait;
use crate::state::AbilityScore;

/// Highest score a roll-time boost can raise an ability to.
pub const ROLL_SCORE_CAP: i32 = 18;

/// An opt-in bonus offered for a single roll.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollOption {
    pub id: String,
    pub name: String,
    pub bonus: i32,
}

/// True if a trait targeting `target` applies to a roll on `path`.
///
/// Matches the exact path, any sub-path (`"saves"` matches `"saves.doom"`),
/// `saves.all` against every save, and `attack` against melee and missile.
pub fn target_matches(target: &str, path: &str) -> bool {
    if target == path {
        return true;
    }
    if let Some(rest) = path.strip_prefix(target)
        && rest.starts_with('.')
    {
        return true;
    }
    match target {
        "saves.all" => path.starts_with("saves."),
        "attack" => path == "attack.melee" || path == "attack.missile",
        _ => false,
    }
}

/// Eligible roll options for `roll_path`, in active-trait order.
pub fn roll_options(active: &[ActiveTrait<'_>], level: u8, roll_path: &str) -> Vec<RollOption> {
    active
        .iter()
        .filter_map(|entry| {
            let definition = entry.definition;
            let adjustment = definition.adjustment_of(AdjustmentType::RollOption)?;
            let target = adjustment.target.as_deref()?;
            if !definition.is_unlocked(level) || !target_matches(target, roll_path) {
                return None;
            }
            Some(RollOption {
                id: definition.id.clone(),
                name: definition.name.clone(),
                bonus: adjustment.value.resolve(level),
            })
        })
        .collect()
}

/// Applies the selected options to an ability score for one check.
///
/// The boosted score is capped at [`ROLL_SCORE_CAP`] (a score already above
/// the cap is left where it is) and the modifier is recomputed from the
/// result, never summed onto the stored modifier.
pub fn apply_ability_options(score: i32, selected: &[RollOption]) -> AbilityScore {
    let bonus: i32 = selected.iter().map(|option| option.bonus).sum();
    let boosted = (score + bonus).min(ROLL_SCORE_CAP.max(score));
    AbilityScore::new(boosted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TraitSelections;
    use crate::traits::definition::{Adjustment, BuildItem, TraitCategory, TraitDefinition};
    use crate::traits::resolver::ActiveTraitResolver;

    fn option_trait(id: &str, target: &str, bonus: i32) -> TraitDefinition {
        let adjustment = Adjustment::new(AdjustmentType::RollOption, target, bonus);
        TraitDefinition::adjustment(id, id, adjustment)
    }

    #[test]
    fn target_matching_rules() {
        assert!(target_matches("saves.doom", "saves.doom"));
        assert!(target_matches("saves", "saves.doom"));
        assert!(target_matches("saves.all", "saves.spell"));
        assert!(target_matches("attack", "attack.melee"));
        assert!(target_matches("attack", "attack.missile"));
        assert!(target_matches("skills", "skills.listen"));

        assert!(!target_matches("saves.doom", "saves.ray"));
        assert!(!target_matches("save", "saves.doom"));
        assert!(!target_matches("attack.melee", "attack.missile"));
        assert!(!target_matches("saves.all", "skills.listen"));
    }

    #[test]
    fn options_respect_min_level() {
        let item = BuildItem::class("cleric", "Cleric")
            .with_trait(
                TraitCategory::Passive,
                option_trait("blessed", "saves.all", 2),
            )
            .with_trait(
                TraitCategory::Passive,
                option_trait("steadfast", "saves.hold", 1).with_min_level(5),
            )
            .with_trait(
                TraitCategory::Passive,
                option_trait("keen", "skills.listen", 1),
            );

        let selections = TraitSelections::new();
        let active = ActiveTraitResolver::new(&selections, 3).resolve([&item]);

        let hold = roll_options(&active, 3, "saves.hold");
        assert_eq!(hold.len(), 1);
        assert_eq!(hold[0].id, "blessed");
        assert_eq!(hold[0].bonus, 2);

        let hold = roll_options(&active, 5, "saves.hold");
        let ids: Vec<_> = hold.iter().map(|option| option.id.as_str()).collect();
        assert_eq!(ids, ["blessed", "steadfast"]);
    }

    #[test]
    fn static_adjustments_are_not_options() {
        let drilled = Adjustment::new(AdjustmentType::Static, "attack", 1);
        let item = BuildItem::class("fighter", "Fighter").with_trait(
            TraitCategory::Passive,
            TraitDefinition::adjustment("drilled", "Drilled", drilled),
        );
        let selections = TraitSelections::new();
        let active = ActiveTraitResolver::new(&selections, 1).resolve([&item]);
        assert!(roll_options(&active, 1, "attack.melee").is_empty());
    }

    #[test]
    fn ability_boost_caps_and_recomputes() {
        let plus = |bonus| RollOption {
            id: "boost".into(),
            name: "Boost".into(),
            bonus,
        };

        // 12 -> 13 crosses a breakpoint: modifier goes 0 -> +1.
        assert_eq!(apply_ability_options(12, &[plus(1)]), AbilityScore::new(13));
        // 17 + 4 caps at 18.
        let capped = apply_ability_options(17, &[plus(4)]);
        assert_eq!((capped.score, capped.modifier), (18, 3));
        // Already above the cap stays put.
        assert_eq!(apply_ability_options(19, &[plus(2)]).score, 19);
        assert_eq!(apply_ability_options(9, &[]), AbilityScore::new(9));
    }
}
