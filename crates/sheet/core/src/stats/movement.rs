//! Speed and movement rates.
//!
//! - Speed = speed base (encumbrance tier or stored speed) + manual + traits
//! - Exploring = speed × 3 feet per turn + manual + traits
//! - Overland = ⌊speed / 5⌋ travel points per day + manual + traits

use super::bonus::{BonusStack, StatLayer};
use crate::state::Character;
use crate::traits::{AttributePath, TraitAdjustments};

/// Feet per exploration turn for each foot of speed.
pub const EXPLORING_MULTIPLIER: i32 = 3;
/// Feet of speed per overland travel point.
pub const OVERLAND_DIVISOR: i32 = 5;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MovementBonuses {
    pub speed: BonusStack,
    pub exploring: BonusStack,
    pub overland: BonusStack,
}

impl MovementBonuses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collect(character: &Character, traits: &TraitAdjustments) -> Self {
        let manual = &character.adjustments;

        let mut speed = BonusStack::new().with_manual(manual.speed);
        speed.add_traits(traits.contributions(&AttributePath::Speed));

        let mut exploring = BonusStack::new().with_manual(manual.movement.exploring);
        exploring.add_traits(traits.contributions(&AttributePath::MovementExploring));

        let mut overland = BonusStack::new().with_manual(manual.movement.overland);
        overland.add_traits(traits.contributions(&AttributePath::MovementOverland));

        Self {
            speed,
            exploring,
            overland,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Movement {
    /// Feet per round.
    pub speed: i32,
    /// Feet per exploration turn.
    pub exploring: i32,
    /// Travel points per day.
    pub overland: i32,
}

impl StatLayer for Movement {
    type Base = i32;
    type Bonuses = MovementBonuses;
    type Final = Self;

    fn compute(base: &Self::Base, bonuses: &Self::Bonuses) -> Self::Final {
        let speed = bonuses.speed.apply(*base);
        Self {
            speed,
            exploring: bonuses.exploring.apply(speed * EXPLORING_MULTIPLIER),
            overland: bonuses.overland.apply(speed.div_euclid(OVERLAND_DIVISOR)),
        }
    }

    fn empty_bonuses() -> Self::Bonuses {
        MovementBonuses::new()
    }
}
