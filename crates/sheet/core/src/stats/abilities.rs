//! Adjusted ability scores.
//!
//! AdjustedScore = stored score + manual + traits; the modifier is recomputed
//! from the adjusted score.

use super::bonus::{BonusStack, StatLayer};
use crate::state::{Abilities, AbilityKind, AbilityScore};
use crate::traits::{AttributePath, TraitAdjustments};

/// Per-ability bonus stacks.
pub type AbilityBonuses = Abilities<BonusStack>;

/// Adjusted abilities layer.
///
/// Base: stored scores
/// Bonuses: manual adjustments and static traits per ability
/// Final: adjusted scores with recomputed modifiers
#[derive(Clone, Copy, Debug)]
pub struct AbilityLayer;

impl AbilityLayer {
    pub fn bonuses(manual: &Abilities<i32>, traits: &TraitAdjustments) -> AbilityBonuses {
        Abilities::from_fn(|kind: AbilityKind| {
            let mut stack = BonusStack::new().with_manual(*manual.get(kind));
            stack.add_traits(traits.contributions(&AttributePath::Ability(kind)));
            stack
        })
    }
}

impl StatLayer for AbilityLayer {
    type Base = Abilities<i32>;
    type Bonuses = AbilityBonuses;
    type Final = Abilities<AbilityScore>;

    fn compute(base: &Self::Base, bonuses: &Self::Bonuses) -> Self::Final {
        Abilities::from_fn(|kind| {
            let score = bonuses.get(kind).apply(*base.get(kind));
            AbilityScore::new(score)
        })
    }

    fn empty_bonuses() -> Self::Bonuses {
        Abilities::default()
    }
}
