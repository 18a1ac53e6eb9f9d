//! Attack bonus.
//!
//! The generic bonus is stored attack + manual + static `attack` traits +
//! conditions. Melee and missile trait bonuses are kept apart and only folded
//! in when the matching roll is made.

use super::bonus::{BonusStack, StatLayer};
use super::conditions::ConditionSet;
use crate::state::Character;
use crate::traits::{AttributePath, TraitAdjustments};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttackBonuses {
    pub generic: BonusStack,
    pub melee: BonusStack,
    pub missile: BonusStack,
}

impl AttackBonuses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collect(
        character: &Character,
        traits: &TraitAdjustments,
        conditions: &ConditionSet,
    ) -> Self {
        let mut generic = BonusStack::new().with_manual(character.adjustments.attack);
        generic.add_traits(traits.contributions(&AttributePath::Attack));
        conditions.apply_all_to_attack(&mut generic);

        let mut melee = BonusStack::new();
        melee.add_traits(traits.contributions(&AttributePath::AttackMelee));
        let mut missile = BonusStack::new();
        missile.add_traits(traits.contributions(&AttributePath::AttackMissile));

        Self {
            generic,
            melee,
            missile,
        }
    }
}

/// Generic attack bonus plus the melee/missile sub-totals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackBonus {
    pub value: i32,
    /// Added only to melee rolls.
    pub melee: i32,
    /// Added only to missile rolls.
    pub missile: i32,
}

impl AttackBonus {
    pub fn melee_total(&self) -> i32 {
        self.value + self.melee
    }

    pub fn missile_total(&self) -> i32 {
        self.value + self.missile
    }
}

impl StatLayer for AttackBonus {
    type Base = i32;
    type Bonuses = AttackBonuses;
    type Final = Self;

    fn compute(base: &Self::Base, bonuses: &Self::Bonuses) -> Self::Final {
        Self {
            value: bonuses.generic.apply(*base),
            melee: bonuses.melee.total(),
            missile: bonuses.missile.total(),
        }
    }

    fn empty_bonuses() -> Self::Bonuses {
        AttackBonuses::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::TraitContribution;

    fn contribution(value: i32) -> TraitContribution {
        TraitContribution {
            trait_id: "t".into(),
            name: "T".into(),
            value,
        }
    }

    #[test]
    fn sub_totals_stay_out_of_generic_attack() {
        let mut character = Character::default();
        character.base.attack = 1;
        character.base.exhaustion = 1;
        character.adjustments.attack = 2;

        let mut traits = TraitAdjustments::new();
        traits.add_static(AttributePath::Attack, contribution(1));
        traits.add_static(AttributePath::AttackMissile, contribution(2));

        let conditions = ConditionSet::from_base(&character.base);
        let bonuses = AttackBonuses::collect(&character, &traits, &conditions);
        let attack = AttackBonus::compute(&character.base.attack, &bonuses);

        assert_eq!(attack.value, 1 + 2 + 1 - 1);
        assert_eq!(attack.melee, 0);
        assert_eq!(attack.missile, 2);
        assert_eq!(attack.missile_total(), 5);
    }
}
