//! Armor class.
//!
//! AC is the best body armor (or unarmored AC) plus the DEX modifier, the best
//! shield, static `ac` traits and the manual adjustment. The breakdown lists
//! the base entry first, so its values always sum to the final AC.

use super::bonus::{Bonus, BonusSource, BonusStack, StatLayer};
use crate::state::{Abilities, AbilityKind, AbilityScore, Character};
use crate::traits::{AttributePath, TraitAdjustments};

/// Starting point of the AC sum: the best equipped body armor, or the
/// unarmored AC.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArmorBase {
    pub source: BonusSource,
    pub value: i32,
}

impl ArmorBase {
    pub fn for_character(character: &Character) -> Self {
        match character.best_body_armor() {
            Some((name, ac)) => Self {
                source: BonusSource::Armor(name.to_string()),
                value: ac,
            },
            None => Self {
                source: BonusSource::Unarmored,
                value: character.base.ac,
            },
        }
    }
}

/// Final AC with a labelled breakdown for display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorClass {
    pub value: i32,
    pub breakdown: Vec<Bonus>,
}

impl ArmorClass {
    /// Sum of the breakdown entries; always equal to `value`.
    pub fn breakdown_total(&self) -> i32 {
        self.breakdown.iter().map(|entry| entry.value).sum()
    }
}

impl ArmorClass {
    /// DEX modifier, best shield, traits and manual adjustment, in that order.
    pub fn bonuses(
        character: &Character,
        abilities: &Abilities<AbilityScore>,
        traits: &TraitAdjustments,
    ) -> BonusStack {
        let mut stack = BonusStack::new().with(
            BonusSource::Ability(AbilityKind::Dex),
            abilities.get(AbilityKind::Dex).modifier,
        );
        if let Some((name, bonus)) = character.best_shield() {
            stack.add(Bonus::new(BonusSource::Shield(name.to_string()), bonus));
        }
        stack.add_traits(traits.contributions(&AttributePath::Ac));
        stack.with_manual(character.adjustments.ac)
    }
}

impl StatLayer for ArmorClass {
    type Base = ArmorBase;
    type Bonuses = BonusStack;
    type Final = Self;

    fn compute(base: &Self::Base, bonuses: &Self::Bonuses) -> Self::Final {
        let mut breakdown = Vec::with_capacity(bonuses.len() + 1);
        breakdown.push(Bonus::new(base.source.clone(), base.value));
        breakdown.extend(bonuses.entries().iter().cloned());

        Self {
            value: bonuses.apply(base.value),
            breakdown,
        }
    }

    fn empty_bonuses() -> Self::Bonuses {
        BonusStack::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ArmorBulk, BaseAttributes, Item};
    use crate::stats::abilities::AbilityLayer;

    fn armor_class(character: &Character) -> ArmorClass {
        let traits = TraitAdjustments::new();
        let abilities = AbilityLayer::from_base(&character.base.abilities);
        let bonuses = ArmorClass::bonuses(character, &abilities, &traits);
        ArmorClass::compute(&ArmorBase::for_character(character), &bonuses)
    }

    #[test]
    fn unarmored_uses_stored_ac() {
        let base = BaseAttributes::default().with_abilities(Abilities::new(10, 10, 10, 16, 10, 10));
        let ac = armor_class(&Character::new(base));

        assert_eq!(ac.value, 12);
        assert_eq!(ac.breakdown[0], Bonus::new(BonusSource::Unarmored, 10));
        assert_eq!(ac.breakdown_total(), ac.value);
    }

    #[test]
    fn best_armor_and_shield_apply_once() {
        let leather = Item::armor("leather", "Leather", 12, ArmorBulk::Light).equipped();
        let chain = Item::armor("chain", "Chainmail", 14, ArmorBulk::Medium).equipped();
        let mut character = Character::default()
            .with_item(leather)
            .with_item(chain)
            .with_item(Item::shield("buckler", "Buckler", 1).equipped())
            .with_item(Item::shield("tower", "Tower Shield", 2).equipped());
        character.adjustments.ac = -1;

        let ac = armor_class(&character);
        assert_eq!(ac.value, 14 + 2 - 1);
        let chainmail = BonusSource::Armor("Chainmail".into());
        assert_eq!(ac.breakdown[0].source, chainmail);
        assert_eq!(ac.breakdown_total(), ac.value);
    }
}
