//! Player-entered adjustments. Every leaf is a signed integer that is added
//! on top of the stored value during derivation.

use super::abilities::Abilities;
use super::base::{Saves, Skills};
use crate::spells::MagicTradition;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MovementAdjustments {
    pub exploring: i32,
    pub overland: i32,
}

/// Per-rank slot adjustments for one magic tradition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TraditionAdjustments {
    /// Forces the tradition on even if neither build item grants it.
    pub enabled: bool,
    /// Added to the progression value of each rank (index 0 = rank 1).
    pub ranks: [i32; MagicTradition::MAX_RANKS],
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MagicAdjustments {
    pub arcane: TraditionAdjustments,
    pub holy: TraditionAdjustments,
}

impl MagicAdjustments {
    pub fn get(&self, tradition: MagicTradition) -> &TraditionAdjustments {
        match tradition {
            MagicTradition::Arcane => &self.arcane,
            MagicTradition::Holy => &self.holy,
        }
    }

    pub fn get_mut(&mut self, tradition: MagicTradition) -> &mut TraditionAdjustments {
        match tradition {
            MagicTradition::Arcane => &mut self.arcane,
            MagicTradition::Holy => &mut self.holy,
        }
    }
}

/// Mirror of [`super::BaseAttributes`] holding additive manual adjustments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ManualAdjustments {
    pub abilities: Abilities<i32>,
    pub hp_max: i32,
    pub ac: i32,
    pub attack: i32,
    pub saves: Saves,
    pub magic_resistance: i32,
    pub skills: Skills,
    pub speed: i32,
    pub movement: MovementAdjustments,
    pub magic: MagicAdjustments,
    pub xp_modifier: i32,
}

impl ManualAdjustments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adjustment for a skill id; absent skills contribute 0.
    pub fn skill(&self, id: &str) -> i32 {
        self.skills.get(id).unwrap_or(0)
    }
}
