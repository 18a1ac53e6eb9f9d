//! Encumbrance Calculator.
//!
//! Turns carried inventory into a speed tier under one of three weighing
//! methods. The resulting speed replaces the stored base speed in the
//! derivation; manual and trait adjustments to speed still apply on top.

pub mod slots;
pub mod weight;

use crate::state::Character;

pub use slots::{EQUIPPED_SLOT_MAX, STOWED_SLOT_MAX, equipped_slots, stowed_slots};
pub use weight::{FULL_CAPACITY, carried_weight, treasure_load};

/// Weighing method selected by the rules configuration.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EncumbranceMethod {
    /// Every carried item and coin counts against a fixed capacity.
    #[default]
    FullWeight,
    /// Only treasure and coins count; armor bulk sets the speed table row.
    Treasure,
    /// Abstract gear slots, equipped and stowed counted separately.
    Slots,
}

/// Current load against its maximum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadMeter {
    pub current: u32,
    pub max: u32,
}

impl LoadMeter {
    pub const fn new(current: u32, max: u32) -> Self {
        Self { current, max }
    }

    pub const fn is_over(&self) -> bool {
        self.current > self.max
    }
}

/// Outcome of an encumbrance calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "method", rename_all = "snake_case"))]
pub enum EncumbranceState {
    FullWeight {
        load: LoadMeter,
        speed: i32,
    },
    Treasure {
        load: LoadMeter,
        /// Load reached the significant-load threshold.
        significant: bool,
        /// Medium or heavy body armor is equipped.
        heavy_armor: bool,
        speed: i32,
    },
    Slots {
        equipped: LoadMeter,
        stowed: LoadMeter,
        /// Minimum of the equipped and stowed tiers.
        speed: i32,
    },
}

impl EncumbranceState {
    pub const fn speed(&self) -> i32 {
        match self {
            EncumbranceState::FullWeight { speed, .. }
            | EncumbranceState::Treasure { speed, .. }
            | EncumbranceState::Slots { speed, .. } => *speed,
        }
    }

    pub const fn method(&self) -> EncumbranceMethod {
        match self {
            EncumbranceState::FullWeight { .. } => EncumbranceMethod::FullWeight,
            EncumbranceState::Treasure { .. } => EncumbranceMethod::Treasure,
            EncumbranceState::Slots { .. } => EncumbranceMethod::Slots,
        }
    }
}

/// Computes the load and speed tier of `character` under `method`.
///
/// `significant_load_percent` is only read by the treasure method.
pub fn compute_encumbrance(
    character: &Character,
    method: EncumbranceMethod,
    significant_load_percent: u32,
) -> EncumbranceState {
    let state = match method {
        EncumbranceMethod::FullWeight => {
            let load = carried_weight(character);
            EncumbranceState::FullWeight {
                load: LoadMeter::new(load, FULL_CAPACITY),
                speed: weight::full_weight_speed(load),
            }
        }
        EncumbranceMethod::Treasure => {
            let load = treasure_load(character);
            let significant = weight::is_significant_load(load, significant_load_percent);
            let heavy_armor = character.wears_heavy_armor();
            EncumbranceState::Treasure {
                load: LoadMeter::new(load, FULL_CAPACITY),
                significant,
                heavy_armor,
                speed: weight::treasure_speed(load, significant, heavy_armor),
            }
        }
        EncumbranceMethod::Slots => {
            let equipped = equipped_slots(character);
            let stowed = stowed_slots(character);
            EncumbranceState::Slots {
                equipped: LoadMeter::new(equipped, EQUIPPED_SLOT_MAX),
                stowed: LoadMeter::new(stowed, STOWED_SLOT_MAX),
                speed: slots::equipped_speed(equipped).min(slots::stowed_speed(stowed)),
            }
        }
    };

    tracing::debug!(%method, speed = state.speed(), "computed encumbrance");
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EncumbranceConfig;
    use crate::state::{ArmorBulk, Item, ItemKind};

    fn sack(weight: u32) -> Item {
        Item::new("sack", "Sack", ItemKind::Gear).with_weight(weight)
    }

    fn gems(weight: u32) -> Item {
        Item::new("gems", "Gems", ItemKind::Treasure)
            .with_weight(weight)
    }

    fn carrying(weight: u32) -> Character {
        Character::default().with_item(sack(weight))
    }

    #[test]
    fn full_weight_tiers() {
        let method = EncumbranceMethod::FullWeight;
        assert_eq!(compute_encumbrance(&carrying(400), method, 50).speed(), 40);
        assert_eq!(compute_encumbrance(&carrying(450), method, 50).speed(), 30);
        assert_eq!(compute_encumbrance(&carrying(800), method, 50).speed(), 20);
        assert_eq!(compute_encumbrance(&carrying(1600), method, 50).speed(), 10);
        assert_eq!(compute_encumbrance(&carrying(1601), method, 50).speed(), 0);
    }

    #[test]
    fn coins_count_as_weight() {
        let character = carrying(300).with_coins(150);
        let state = compute_encumbrance(&character, EncumbranceMethod::FullWeight, 50);
        assert_eq!(
            state,
            EncumbranceState::FullWeight {
                load: LoadMeter::new(450, FULL_CAPACITY),
                speed: 30,
            }
        );
    }

    #[test]
    fn stored_items_never_count() {
        let character = Character::default().with_item(sack(2000).stored());
        let state = compute_encumbrance(&character, EncumbranceMethod::FullWeight, 50);
        assert_eq!(state.speed(), 40);
    }

    #[test]
    fn treasure_table_by_armor_and_load() {
        let chain = Item::armor("chain", "Chainmail", 14, ArmorBulk::Medium).equipped();
        let method = EncumbranceMethod::Treasure;

        let light = Character::default().with_item(gems(100));
        assert_eq!(compute_encumbrance(&light, method, 50).speed(), 40);

        let loaded = Character::default().with_item(gems(800));
        assert_eq!(compute_encumbrance(&loaded, method, 50).speed(), 30);

        let armored = Character::default()
            .with_item(gems(100))
            .with_item(chain.clone());
        assert_eq!(compute_encumbrance(&armored, method, 50).speed(), 20);

        let both = Character::default().with_item(gems(900)).with_item(chain);
        assert_eq!(compute_encumbrance(&both, method, 50).speed(), 10);

        let over = Character::default().with_item(gems(1601));
        assert_eq!(compute_encumbrance(&over, method, 50).speed(), 0);
    }

    #[test]
    fn light_armor_uses_unarmored_treasure_row() {
        let leather = Item::armor("leather", "Leather", 12, ArmorBulk::Light).equipped();
        let method = EncumbranceMethod::Treasure;

        let unloaded = Character::default()
            .with_item(gems(100))
            .with_item(leather.clone());
        let state = compute_encumbrance(&unloaded, method, 50);
        assert_eq!(state.speed(), 40);

        let loaded = Character::default().with_item(gems(900)).with_item(leather);
        let state = compute_encumbrance(&loaded, method, 50);
        assert_eq!(
            state,
            EncumbranceState::Treasure {
                load: LoadMeter::new(900, FULL_CAPACITY),
                significant: true,
                heavy_armor: false,
                speed: 30,
            }
        );
    }

    #[test]
    fn treasure_ignores_ordinary_gear() {
        let character = carrying(1500);
        let state = compute_encumbrance(&character, EncumbranceMethod::Treasure, 50);
        assert_eq!(state.speed(), 40);
    }

    #[test]
    fn threshold_is_configurable() {
        let character = Character::default().with_item(gems(400));
        let config = EncumbranceConfig::new(EncumbranceMethod::Treasure)
            .with_significant_load_percent(25);
        let percent = config.significant_load_percent;
        let state = compute_encumbrance(&character, config.method, percent);
        assert_eq!(state.speed(), 30);
    }

    #[test]
    fn slot_speed_is_minimum_of_both_tiers() {
        let mut character = Character::default();
        for index in 0..4 {
            let gear = Item::new(format!("gear-{index}"), "Gear", ItemKind::Gear);
            character.items.push(gear.equipped());
        }
        let state = compute_encumbrance(&character, EncumbranceMethod::Slots, 50);
        assert_eq!(state.speed(), 30);

        // 1,001 coins need 11 stowed slots.
        let character = character.with_coins(1001);
        let state = compute_encumbrance(&character, EncumbranceMethod::Slots, 50);
        match state {
            EncumbranceState::Slots {
                equipped,
                stowed,
                speed,
            } => {
                assert_eq!(equipped.current, 4);
                assert_eq!(stowed.current, 11);
                assert_eq!(speed, 30);
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn method_names_parse() {
        assert_eq!("full_weight".parse(), Ok(EncumbranceMethod::FullWeight));
        assert_eq!("Slots".parse(), Ok(EncumbranceMethod::Slots));
        assert_eq!(EncumbranceMethod::Treasure.to_string(), "treasure");
    }
}
