//! Data-driven character-sheet content and loaders.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Kindred and class build items with their traits (RON)
//! - Spell progression tables per class and magic tradition (TOML)
//! - Rules configuration (TOML)
//!
//! All loaders use sheet-core types directly with serde for deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    BuildCatalog, BuildLoader, ConfigLoader, ContentFactory, LoadResult, ProgressionLoader,
    ProgressionSpec,
};
