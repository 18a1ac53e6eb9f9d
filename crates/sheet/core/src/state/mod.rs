//! Base Attribute Store - read-only inputs to the derivation engine.
//!
//! This module contains:
//! - Ability scores and the modifier table
//! - Stored base attributes (level, saves, skills, speed, ...)
//! - Manual adjustments entered by the player
//! - Inventory items and the character record tying everything together

pub mod abilities;
pub mod adjustments;
pub mod base;
pub mod character;
pub mod item;

pub use abilities::{Abilities, AbilityKind, AbilityScore, ability_modifier};
pub use adjustments::{
    MagicAdjustments, ManualAdjustments, MovementAdjustments, TraditionAdjustments,
};
pub use base::{BaseAttributes, ExtraSkill, HitPoints, SaveKind, Saves, SkillKind, Skills};
pub use character::{Character, TraitSelections};
pub use item::{ArmorBulk, ArmorData, Item, ItemKind, ItemLocation, ShieldData};
