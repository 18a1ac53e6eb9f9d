//! Attribute Derivation Engine - layered stat computation.
//!
//! # Architecture
//!
//! ```text
//! [ Stored attributes + manual adjustments + trait adjustments ]
//!      ↓
//! [ Abilities (adjusted score → modifier) ]
//!      ↓
//! [ AC / Attack / Saves / Skills ]
//!      ↓
//! [ Speed base (encumbrance) → Movement ]
//!      ↓
//! [ DerivedAttributes snapshot ]
//! ```
//!
//! ## Principles
//!
//! 1. **Read-only inputs**: the character record is never written
//! 2. **Additive stacks**: every layer is base + labelled bonuses, never clamped
//! 3. **Deterministic**: pure functions; deriving twice yields equal snapshots

pub mod abilities;
pub mod armor_class;
pub mod attack;
pub mod bonus;
pub mod conditions;
pub mod defenses;
pub mod movement;
pub mod skills;
pub mod snapshot;

pub use abilities::{AbilityBonuses, AbilityLayer};
pub use armor_class::{ArmorBase, ArmorClass};
pub use attack::{AttackBonus, AttackBonuses};
pub use bonus::{Bonus, BonusSource, BonusStack, StatLayer};
pub use conditions::{Condition, ConditionSet, Exhaustion};
pub use defenses::{SaveBonuses, SaveLayer, magic_resistance};
pub use movement::{Movement, MovementBonuses};
pub use skills::{SkillBonus, SkillBonuses, SkillLayer};
pub use snapshot::{DerivationBuilder, DerivedAttributes};
