//! Active Trait Resolver.
//!
//! Flattens the build items' trait collections into one ordered list,
//! deduplicated by trait id and filtered by selection gates. Level gating is
//! NOT applied here: each consumer (display, aggregation, roll options) checks
//! `min_level` itself, and the resolver only reports it through `locked`.

use std::collections::BTreeSet;

use super::definition::{BuildItem, BuildKind, TraitCategory, TraitDefinition};
use crate::state::{Character, TraitSelections};

/// A trait currently in force, with where it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveTrait<'a> {
    pub definition: &'a TraitDefinition,
    pub category: TraitCategory,
    pub source: BuildKind,
    /// Character level is below the trait's `min_level`.
    pub locked: bool,
}

impl ActiveTrait<'_> {
    pub fn id(&self) -> &str {
        &self.definition.id
    }
}

/// Resolves the active trait list for one level and set of selections.
#[derive(Clone, Copy, Debug)]
pub struct ActiveTraitResolver<'a> {
    selections: &'a TraitSelections,
    level: u8,
}

impl<'a> ActiveTraitResolver<'a> {
    pub fn new(selections: &'a TraitSelections, level: u8) -> Self {
        Self { selections, level }
    }

    /// Resolves active traits across `items`, in order.
    ///
    /// The first occurrence of an id wins; with kindred passed first, a trait
    /// carried by both build items is taken from the kindred.
    pub fn resolve<I>(&self, items: I) -> Vec<ActiveTrait<'a>>
    where
        I: IntoIterator<Item = &'a BuildItem>,
    {
        let mut seen: BTreeSet<&'a str> = BTreeSet::new();
        let mut active = Vec::new();

        for item in items {
            for (category, definition) in item.traits.iter() {
                if !seen.insert(definition.id.as_str()) {
                    tracing::debug!(
                        trait_id = %definition.id,
                        item = %item.id,
                        "dropping duplicate trait"
                    );
                    continue;
                }

                if let Some(parent) = definition.parent_trait.as_deref()
                    && !self.selections.is_selected(parent, &definition.id)
                {
                    tracing::debug!(
                        trait_id = %definition.id,
                        parent,
                        "dropping unselected trait"
                    );
                    continue;
                }

                active.push(ActiveTrait {
                    definition,
                    category,
                    source: item.kind,
                    locked: !definition.is_unlocked(self.level),
                });
            }
        }

        active
    }
}

/// Active traits for a character: kindred first, then class.
pub fn active_traits(character: &Character) -> Vec<ActiveTrait<'_>> {
    let resolver = ActiveTraitResolver::new(&character.selections, character.level());
    resolver.resolve(character.build_items())
}
