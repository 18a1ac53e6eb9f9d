//! Slot-based method.
//!
//! Equipped and stowed gear fill separate slot pools. Coins take one stowed
//! slot per 100, rounded up.

use crate::state::{Character, ItemLocation};

pub const EQUIPPED_SLOT_MAX: u32 = 10;
pub const STOWED_SLOT_MAX: u32 = 16;
pub const COINS_PER_SLOT: u32 = 100;

/// `(max slots, speed)` tiers; above the last tier speed is 10.
const EQUIPPED_TIERS: [(u32, i32); 3] = [(3, 40), (5, 30), (7, 20)];
const STOWED_TIERS: [(u32, i32); 3] = [(10, 40), (12, 30), (14, 20)];
const OVERLOADED_SPEED: i32 = 10;

fn slots_at(character: &Character, location: ItemLocation) -> u32 {
    character
        .items
        .iter()
        .filter(|item| item.location == location)
        .map(|item| item.total_slots())
        .fold(0, u32::saturating_add)
}

pub fn equipped_slots(character: &Character) -> u32 {
    slots_at(character, ItemLocation::Equipped)
}

pub fn stowed_slots(character: &Character) -> u32 {
    slots_at(character, ItemLocation::Stowed)
        .saturating_add(character.coins.div_ceil(COINS_PER_SLOT))
}

fn tier_speed(tiers: &[(u32, i32)], slots: u32) -> i32 {
    tiers
        .iter()
        .find(|(max, _)| slots <= *max)
        .map_or(OVERLOADED_SPEED, |(_, speed)| *speed)
}

pub fn equipped_speed(slots: u32) -> i32 {
    tier_speed(&EQUIPPED_TIERS, slots)
}

pub fn stowed_speed(slots: u32) -> i32 {
    tier_speed(&STOWED_TIERS, slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Item, ItemKind};

    #[test]
    fn tiers() {
        assert_eq!(equipped_speed(3), 40);
        assert_eq!(equipped_speed(5), 30);
        assert_eq!(equipped_speed(7), 20);
        assert_eq!(equipped_speed(8), 10);
        assert_eq!(stowed_speed(10), 40);
        assert_eq!(stowed_speed(14), 20);
        assert_eq!(stowed_speed(30), 10);
    }

    #[test]
    fn stacks_round_up() {
        let character = Character::default()
            .with_item(
                Item::new("arrows", "Arrows", ItemKind::Gear)
                    .with_quantity(25)
                    .stackable(20),
            )
            .with_item(
                Item::new("rope", "Rope", ItemKind::Gear)
                    .with_slots(2)
                    .stowed(),
            )
            .with_item(Item::new("lantern", "Lantern", ItemKind::Gear).stored())
            .with_coins(1);

        // 2 stacks of arrows + 2 for rope + 1 for the coins.
        assert_eq!(stowed_slots(&character), 5);
        assert_eq!(equipped_slots(&character), 0);
    }
}
