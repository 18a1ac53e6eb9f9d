//! Deterministic character-sheet rules shared by every front end.
//!
//! `sheet-core` turns a character's stored attributes, manual adjustments,
//! inventory and kindred/class traits into the derived snapshot the rest of an
//! application treats as ground truth. It performs no I/O and holds no global
//! state; rules settings and spell progressions are passed in through
//! [`engine::SheetEngine`].
pub mod config;
pub mod encumbrance;
pub mod engine;
pub mod error;
pub mod spells;
pub mod state;
pub mod stats;
pub mod traits;

pub use config::{EncumbranceConfig, RulesConfig};
pub use encumbrance::{EncumbranceMethod, EncumbranceState, LoadMeter, compute_encumbrance};
pub use engine::SheetEngine;
pub use error::{ErrorSeverity, PathError, ProgressionError, SheetError};
pub use spells::{
    MagicTradition, ProgressionRegistry, ProgressionTable, SpellSlot, SpellSlotTable,
    resolve_spell_slots, tradition_enabled,
};
pub use state::{
    Abilities, AbilityKind, AbilityScore, ArmorBulk, BaseAttributes, Character, HitPoints, Item,
    ItemKind, ItemLocation, ManualAdjustments, SaveKind, Saves, Skills, TraitSelections,
    ability_modifier,
};
pub use stats::{ArmorClass, AttackBonus, Condition, DerivationBuilder, DerivedAttributes, Movement};
pub use traits::{
    ActiveTrait, ActiveTraitResolver, Adjustment, AdjustmentType, AdjustmentValue, AttributePath,
    BuildItem, BuildKind, RollOption, TraitAdjustments, TraitCategory, TraitDefinition,
    TraitDisplay, TraitType, active_traits, apply_ability_options, display_traits, roll_options,
};
