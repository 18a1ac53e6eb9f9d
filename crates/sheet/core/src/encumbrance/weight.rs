//! Weight-based methods: full weight and treasure significant load.

use crate::state::Character;

/// Fixed carrying capacity in coin-weight units.
pub const FULL_CAPACITY: u32 = 1600;

/// `(max load, speed)` tiers of the full-weight method; above the last tier
/// speed is 0.
const WEIGHT_TIERS: [(u32, i32); 4] = [(400, 40), (600, 30), (800, 20), (FULL_CAPACITY, 10)];

/// Treasure method speeds, indexed by `[heavy_armor][significant]`.
const TREASURE_TABLE: [[i32; 2]; 2] = [[40, 30], [20, 10]];

/// Weight of every carried item plus one unit per coin.
pub fn carried_weight(character: &Character) -> u32 {
    character
        .items
        .iter()
        .filter(|item| item.is_carried())
        .map(|item| item.total_weight())
        .fold(character.coins, u32::saturating_add)
}

/// Weight of carried treasure plus one unit per coin.
pub fn treasure_load(character: &Character) -> u32 {
    character
        .items
        .iter()
        .filter(|item| item.is_carried() && item.is_treasure())
        .map(|item| item.total_weight())
        .fold(character.coins, u32::saturating_add)
}

pub fn full_weight_speed(load: u32) -> i32 {
    WEIGHT_TIERS
        .iter()
        .find(|(max, _)| load <= *max)
        .map_or(0, |(_, speed)| *speed)
}

/// True once `load` reaches `percent` of [`FULL_CAPACITY`].
pub fn is_significant_load(load: u32, percent: u32) -> bool {
    u64::from(load) * 100 >= u64::from(FULL_CAPACITY) * u64::from(percent)
}

/// Exceeding full capacity forces speed 0 regardless of the table.
pub fn treasure_speed(load: u32, significant: bool, heavy_armor: bool) -> i32 {
    if load > FULL_CAPACITY {
        return 0;
    }
    TREASURE_TABLE[usize::from(heavy_armor)][usize::from(significant)]
}
