//! Player-facing trait list.

use super::definition::{BuildKind, TraitCategory, TraitType};
use super::resolver::{ActiveTrait, active_traits};
use crate::state::Character;

/// One row of the trait list on a character sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraitDisplay {
    pub id: String,
    pub name: String,
    pub category: TraitCategory,
    pub trait_type: TraitType,
    pub source: BuildKind,
    /// Below `min_level`: shown, but never applied.
    pub locked: bool,
    /// Adjustment value at the current level, if the trait carries one.
    pub value: Option<i32>,
    /// Limited-use count at the current level.
    pub uses: Option<i32>,
    pub period: Option<String>,
}

impl TraitDisplay {
    pub fn from_active(active: &ActiveTrait<'_>, level: u8) -> Self {
        let definition = active.definition;
        Self {
            id: definition.id.clone(),
            name: definition.name.clone(),
            category: active.category,
            trait_type: definition.trait_type,
            source: active.source,
            locked: active.locked,
            value: definition
                .adjustment
                .as_ref()
                .map(|adjustment| adjustment.value.resolve(level)),
            uses: definition.uses.as_ref().map(|uses| uses.max.resolve(level)),
            period: definition
                .uses
                .as_ref()
                .map(|uses| uses.period.clone())
                .filter(|period| !period.is_empty()),
        }
    }
}

/// Every active trait of `character`, locked ones included.
pub fn display_traits(character: &Character) -> Vec<TraitDisplay> {
    let level = character.level();
    active_traits(character)
        .iter()
        .map(|active| TraitDisplay::from_active(active, level))
        .collect()
}
