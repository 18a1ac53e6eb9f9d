//! Skill targets.
//!
//! Target = stored + manual + static traits, unless an override exists for the
//! skill: then the override replaces the stored base, static traits are
//! ignored, and only the manual adjustment is added on top.

use std::collections::BTreeMap;

use super::bonus::{BonusStack, StatLayer};
use crate::state::{Character, Skills};
use crate::traits::{AttributePath, TraitAdjustments};

/// Bonuses for one skill.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillBonus {
    /// Replaces the stored base when present.
    pub override_base: Option<i32>,
    pub manual: i32,
    pub traits: BonusStack,
}

impl SkillBonus {
    pub fn apply(&self, stored: i32) -> i32 {
        match self.override_base {
            Some(base) => base + self.manual,
            None => self.traits.apply(stored) + self.manual,
        }
    }
}

/// Per-skill bonuses keyed by skill id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillBonuses {
    skills: BTreeMap<String, SkillBonus>,
}

impl SkillBonuses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bonuses for every stored skill and every skill an override targets.
    pub fn collect(character: &Character, traits: &TraitAdjustments) -> Self {
        let mut bonuses = Self::new();

        for (id, _) in character.base.skills.iter() {
            let path = AttributePath::skill(id);
            let mut stack = BonusStack::new();
            stack.add_traits(traits.contributions(&path));
            bonuses.skills.insert(
                id.to_string(),
                SkillBonus {
                    override_base: traits.override_for(&path),
                    manual: character.adjustments.skill(id),
                    traits: stack,
                },
            );
        }

        for (path, value) in traits.overrides() {
            if let AttributePath::Skill(id) = path {
                bonuses.skills.entry(id.clone()).or_insert_with(|| SkillBonus {
                    override_base: Some(value),
                    manual: character.adjustments.skill(id),
                    traits: BonusStack::new(),
                });
            }
        }

        bonuses
    }

    pub fn get(&self, id: &str) -> Option<&SkillBonus> {
        self.skills.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SkillBonus)> {
        self.skills.iter().map(|(id, bonus)| (id.as_str(), bonus))
    }
}

/// Skill target layer.
#[derive(Clone, Copy, Debug)]
pub struct SkillLayer;

impl StatLayer for SkillLayer {
    type Base = Skills;
    type Bonuses = SkillBonuses;
    type Final = Skills;

    fn compute(base: &Self::Base, bonuses: &Self::Bonuses) -> Self::Final {
        let mut skills = base.clone();

        for (id, stored) in base.iter() {
            if let Some(bonus) = bonuses.get(id) {
                skills.set(id, bonus.apply(stored));
            }
        }

        // Skills granted purely by an override have no stored value.
        for (id, bonus) in bonuses.iter() {
            if base.get(id).is_none()
                && let Some(value) = bonus.override_base
            {
                skills.set(id, value + bonus.manual);
            }
        }

        skills
    }

    fn empty_bonuses() -> Self::Bonuses {
        SkillBonuses::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::TraitContribution;

    fn traits_with(statics: &[(&str, i32)], overrides: &[(&str, i32)]) -> TraitAdjustments {
        let mut traits = TraitAdjustments::new();
        for (id, value) in statics {
            traits.add_static(
                AttributePath::skill(*id),
                TraitContribution {
                    trait_id: format!("static-{id}"),
                    name: "Static".into(),
                    value: *value,
                },
            );
        }
        for (id, value) in overrides {
            traits.add_override(AttributePath::skill(*id), *value);
        }
        traits
    }

    #[test]
    fn override_replaces_base_and_ignores_statics() {
        let mut character = Character::default();
        character.adjustments.skills.survival = -1;

        let statics = [("survival", -2), ("listen", -1)];
        let traits = traits_with(&statics, &[("survival", 3), ("survival", 5)]);
        let skills = SkillLayer::compute(
            &character.base.skills,
            &SkillBonuses::collect(&character, &traits),
        );

        // Override 3 wins, static -2 ignored, manual -1 kept.
        assert_eq!(skills.survival, 2);
        assert_eq!(skills.listen, 5);
        assert_eq!(skills.search, 6);
    }

    #[test]
    fn override_grants_missing_skill() {
        let character = Character::default();
        let traits = traits_with(&[("tracking", 1)], &[("tracking", 4)]);
        let skills = SkillLayer::compute(
            &character.base.skills,
            &SkillBonuses::collect(&character, &traits),
        );

        assert_eq!(skills.get("tracking"), Some(4));
    }

    #[test]
    fn statics_for_missing_skills_are_dropped() {
        let character = Character::default();
        let traits = traits_with(&[("alertness", 1)], &[]);
        let skills = SkillLayer::compute(
            &character.base.skills,
            &SkillBonuses::collect(&character, &traits),
        );
        assert_eq!(skills.get("alertness"), None);
    }
}
