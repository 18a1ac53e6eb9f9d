//! Inventory items as seen by the derivation engine.
//!
//! Only the fields that influence AC, the heavy-armor gate, and encumbrance
//! are modelled; everything else about an item belongs to the surrounding
//! application.

/// Bulk tier of a piece of body armor.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ArmorBulk {
    #[default]
    None,
    Light,
    Medium,
    Heavy,
}

impl ArmorBulk {
    /// Medium and heavy armor switch off `requires_no_heavy_armor` traits.
    pub const fn is_heavy(self) -> bool {
        matches!(self, ArmorBulk::Medium | ArmorBulk::Heavy)
    }
}

/// Body armor data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorData {
    /// AC while wearing this armor (replaces the unarmored AC).
    pub ac: i32,
    pub bulk: ArmorBulk,
}

/// Shield data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShieldData {
    /// Bonus added on top of body armor.
    pub bonus: i32,
}

/// Item type with type-specific data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Armor(ArmorData),
    Shield(ShieldData),
    Weapon,
    /// Gems, art objects and other valuables; the only items the treasure
    /// encumbrance method weighs.
    Treasure,
    #[default]
    Gear,
}

/// Where an item currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemLocation {
    /// Worn or held.
    Equipped,
    /// Carried in a pack or container.
    #[default]
    Stowed,
    /// Left behind; never counts toward encumbrance.
    Stored,
}

/// An inventory entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Item {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    pub location: ItemLocation,
    pub quantity: u32,
    /// Weight of a single unit, in coin-weight units.
    pub weight: u32,
    /// Gear slots taken by one unit, or by one full stack if stackable.
    pub slots: u32,
    /// Units per stack; `None` for items that do not stack.
    pub stack_size: Option<u32>,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            ..Self::default()
        }
    }

    pub fn armor(id: impl Into<String>, name: impl Into<String>, ac: i32, bulk: ArmorBulk) -> Self {
        Self::new(id, name, ItemKind::Armor(ArmorData { ac, bulk }))
    }

    pub fn shield(id: impl Into<String>, name: impl Into<String>, bonus: i32) -> Self {
        Self::new(id, name, ItemKind::Shield(ShieldData { bonus }))
    }

    pub fn equipped(mut self) -> Self {
        self.location = ItemLocation::Equipped;
        self
    }

    pub fn stowed(mut self) -> Self {
        self.location = ItemLocation::Stowed;
        self
    }

    pub fn stored(mut self) -> Self {
        self.location = ItemLocation::Stored;
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_slots(mut self, slots: u32) -> Self {
        self.slots = slots;
        self
    }

    pub fn stackable(mut self, stack_size: u32) -> Self {
        self.stack_size = Some(stack_size);
        self
    }

    pub fn is_equipped(&self) -> bool {
        self.location == ItemLocation::Equipped
    }

    pub fn is_carried(&self) -> bool {
        self.location != ItemLocation::Stored
    }

    pub fn is_treasure(&self) -> bool {
        matches!(self.kind, ItemKind::Treasure)
    }

    /// Total weight of the entry (unit weight × quantity).
    pub fn total_weight(&self) -> u32 {
        self.weight.saturating_mul(self.quantity)
    }

    /// Gear slots taken by the entry.
    ///
    /// Stackable items round up to whole stacks; a partial stack costs a full one.
    pub fn total_slots(&self) -> u32 {
        match self.stack_size {
            Some(stack_size) if stack_size > 0 => {
                self.quantity
                    .div_ceil(stack_size)
                    .saturating_mul(self.slots)
            }
            _ => self.slots.saturating_mul(self.quantity),
        }
    }
}

impl Default for Item {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            kind: ItemKind::default(),
            location: ItemLocation::default(),
            quantity: 1,
            weight: 0,
            slots: 1,
            stack_size: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stackable_items_round_up_per_stack() {
        let arrows = Item::new("arrows", "Arrows", ItemKind::Gear)
            .stackable(20)
            .with_quantity(21);
        assert_eq!(arrows.total_slots(), 2);

        let torches = Item::new("torch", "Torch", ItemKind::Gear).with_quantity(3);
        assert_eq!(torches.total_slots(), 3);

        let empty_quiver = Item::new("arrows", "Arrows", ItemKind::Gear)
            .stackable(20)
            .with_quantity(0);
        assert_eq!(empty_quiver.total_slots(), 0);
    }

    #[test]
    fn bulk_tiers_split_at_medium() {
        assert!(!ArmorBulk::None.is_heavy());
        assert!(!ArmorBulk::Light.is_heavy());
        assert!(ArmorBulk::Medium.is_heavy());
        assert!(ArmorBulk::Heavy.is_heavy());
    }
}
