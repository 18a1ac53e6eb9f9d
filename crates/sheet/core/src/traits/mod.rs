//! Trait system: definitions, activation and adjustment aggregation.
//!
//! This module contains:
//! - Trait definitions carried by kindred and class build items
//! - Typed attribute paths and level-scaled values
//! - The active trait resolver (dedup, selection gates, level locks)
//! - The adjustment aggregator feeding the derivation engine
//! - Roll-time options and the player-facing trait list

pub mod aggregate;
pub mod definition;
pub mod display;
pub mod path;
pub mod resolver;
pub mod roll;
pub mod value;

pub use aggregate::{TraitAdjustments, TraitContext, TraitContribution};
pub use definition::{
    Adjustment, AdjustmentType, BuildItem, BuildKind, TraitCategories, TraitCategory,
    TraitDefinition, TraitType, TraitUses,
};
pub use display::{TraitDisplay, display_traits};
pub use path::AttributePath;
pub use resolver::{ActiveTrait, ActiveTraitResolver, active_traits};
pub use roll::{ROLL_SCORE_CAP, RollOption, apply_ability_options, roll_options, target_matches};
pub use value::{AdjustmentValue, LevelFormula, LevelScaling, LevelStep, LevelSteps};
