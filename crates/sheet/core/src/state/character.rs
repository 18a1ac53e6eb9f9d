//! The character record the engine reads from.

use std::collections::BTreeMap;

use super::adjustments::ManualAdjustments;
use super::base::BaseAttributes;
use super::item::{ArmorBulk, Item, ItemKind};
use crate::traits::{BuildItem, BuildKind};

/// Child traits the player has picked under a selection-gated parent trait
/// (e.g. the combat talents chosen under a class's "Combat Talents" trait).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TraitSelections {
    selected: BTreeMap<String, Vec<String>>,
}

impl TraitSelections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, parent: impl Into<String>, child: impl Into<String>) {
        let children = self.selected.entry(parent.into()).or_default();
        let child = child.into();
        if !children.contains(&child) {
            children.push(child);
        }
    }

    pub fn deselect(&mut self, parent: &str, child: &str) {
        if let Some(children) = self.selected.get_mut(parent) {
            children.retain(|id| id != child);
        }
    }

    pub fn is_selected(&self, parent: &str, child: &str) -> bool {
        self.selected
            .get(parent)
            .is_some_and(|children| children.iter().any(|id| id == child))
    }

    pub fn selected(&self, parent: &str) -> &[String] {
        self.selected.get(parent).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Everything the derivation engine needs to know about one character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Character {
    pub base: BaseAttributes,
    pub adjustments: ManualAdjustments,
    pub items: Vec<Item>,
    /// Total number of coins carried, across all denominations.
    pub coins: u32,
    /// Kindred item, or the fused kindred-class item.
    pub kindred: Option<BuildItem>,
    pub class: Option<BuildItem>,
    pub selections: TraitSelections,
}

impl Character {
    pub fn new(base: BaseAttributes) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    pub fn with_kindred(mut self, kindred: BuildItem) -> Self {
        self.kindred = Some(kindred);
        self
    }

    pub fn with_class(mut self, class: BuildItem) -> Self {
        self.class = Some(class);
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_coins(mut self, coins: u32) -> Self {
        self.coins = coins;
        self
    }

    pub fn level(&self) -> u8 {
        self.base.level
    }

    /// Build items in evaluation order: kindred first, then class.
    pub fn build_items(&self) -> impl Iterator<Item = &BuildItem> {
        self.kindred.iter().chain(self.class.iter())
    }

    /// The item whose id keys the spell progression lookup.
    ///
    /// A fused kindred-class item stands in for the class.
    pub fn class_item(&self) -> Option<&BuildItem> {
        self.class.as_ref().or_else(|| {
            self.kindred
                .as_ref()
                .filter(|item| item.kind == BuildKind::KindredClass)
        })
    }

    pub fn equipped_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.is_equipped())
    }

    /// Best equipped body armor as `(name, ac)`. Armor does not stack.
    pub fn best_body_armor(&self) -> Option<(&str, i32)> {
        self.equipped_items()
            .filter_map(|item| match item.kind {
                ItemKind::Armor(armor) => Some((item.name.as_str(), armor.ac)),
                _ => None,
            })
            .fold(None, |best: Option<(&str, i32)>, candidate| match best {
                Some(current) if current.1 >= candidate.1 => Some(current),
                _ => Some(candidate),
            })
    }

    /// Best equipped shield as `(name, bonus)`.
    pub fn best_shield(&self) -> Option<(&str, i32)> {
        self.equipped_items()
            .filter_map(|item| match item.kind {
                ItemKind::Shield(shield) => Some((item.name.as_str(), shield.bonus)),
                _ => None,
            })
            .fold(None, |best: Option<(&str, i32)>, candidate| match best {
                Some(current) if current.1 >= candidate.1 => Some(current),
                _ => Some(candidate),
            })
    }

    /// Heaviest bulk tier among equipped body armor.
    pub fn heaviest_armor_bulk(&self) -> ArmorBulk {
        self.equipped_items()
            .filter_map(|item| match item.kind {
                ItemKind::Armor(armor) => Some(armor.bulk),
                _ => None,
            })
            .max()
            .unwrap_or(ArmorBulk::None)
    }

    /// True while any equipped body armor is medium or heavy.
    pub fn wears_heavy_armor(&self) -> bool {
        self.heaviest_armor_bulk().is_heavy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_best_equipped_armor_counts() {
        let leather = Item::armor("leather", "Leather", 12, ArmorBulk::Light).equipped();
        let chain = Item::armor("chain", "Chainmail", 14, ArmorBulk::Medium).equipped();
        let plate = Item::armor("plate", "Plate", 16, ArmorBulk::Heavy).stowed();
        let character = Character::default()
            .with_item(leather)
            .with_item(chain)
            .with_item(plate);

        assert_eq!(character.best_body_armor(), Some(("Chainmail", 14)));
        assert_eq!(character.heaviest_armor_bulk(), ArmorBulk::Medium);
        assert!(character.wears_heavy_armor());
        assert_eq!(character.best_shield(), None);
    }

    #[test]
    fn selections_gate_children() {
        let mut selections = TraitSelections::new();
        selections.select("combat-talents", "cleave");
        selections.select("combat-talents", "cleave");
        assert_eq!(selections.selected("combat-talents").len(), 1);
        assert!(selections.is_selected("combat-talents", "cleave"));
        assert!(!selections.is_selected("combat-talents", "defender"));

        selections.deselect("combat-talents", "cleave");
        assert!(!selections.is_selected("combat-talents", "cleave"));
    }
}
