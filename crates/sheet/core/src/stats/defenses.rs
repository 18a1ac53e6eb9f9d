//! Saving throws and magic resistance.
//!
//! Each is stored value + manual + static traits on that exact path. Save
//! targets are lower-is-better but are never clamped.

use super::bonus::{BonusStack, StatLayer};
use crate::state::{Character, SaveKind, Saves};
use crate::traits::{AttributePath, TraitAdjustments};

pub type SaveBonuses = Saves<BonusStack>;

/// Saving throw layer.
#[derive(Clone, Copy, Debug)]
pub struct SaveLayer;

impl SaveLayer {
    pub fn bonuses(character: &Character, traits: &TraitAdjustments) -> SaveBonuses {
        Saves::from_fn(|kind: SaveKind| {
            let mut stack = BonusStack::new().with_manual(*character.adjustments.saves.get(kind));
            stack.add_traits(traits.contributions(&AttributePath::Save(kind)));
            stack
        })
    }
}

impl StatLayer for SaveLayer {
    type Base = Saves<i32>;
    type Bonuses = SaveBonuses;
    type Final = Saves<i32>;

    fn compute(base: &Self::Base, bonuses: &Self::Bonuses) -> Self::Final {
        Saves::from_fn(|kind| bonuses.get(kind).apply(*base.get(kind)))
    }

    fn empty_bonuses() -> Self::Bonuses {
        Saves::default()
    }
}

/// Magic resistance for `character`.
pub fn magic_resistance(character: &Character, traits: &TraitAdjustments) -> i32 {
    let mut stack = BonusStack::new().with_manual(character.adjustments.magic_resistance);
    stack.add_traits(traits.contributions(&AttributePath::MagicResistance));
    stack.apply(character.base.magic_resistance)
}
