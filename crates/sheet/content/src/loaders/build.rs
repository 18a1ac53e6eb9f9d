//! Kindred and class catalog loader.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sheet_core::{BuildItem, BuildKind};

use crate::loaders::{LoadResult, read_file};

/// Build item catalog structure for RON files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildCatalog {
    pub items: Vec<BuildItem>,
}

impl BuildCatalog {
    pub fn get(&self, id: &str) -> Option<&BuildItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Loader for kindred and class catalogs from RON files.
pub struct BuildLoader;

impl BuildLoader {
    /// Load a kindred catalog.
    pub fn load_kindreds(path: &Path) -> LoadResult<BuildCatalog> {
        Self::load(path, BuildKind::Kindred)
    }

    /// Load a class catalog.
    ///
    /// Items that do not name their kind are classes; fused kindred-classes
    /// keep their kind.
    pub fn load_classes(path: &Path) -> LoadResult<BuildCatalog> {
        Self::load(path, BuildKind::Class)
    }

    fn load(path: &Path, kind: BuildKind) -> LoadResult<BuildCatalog> {
        let content = read_file(path)?;
        let mut catalog = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog {}: {}", path.display(), e))?;

        for item in &mut catalog.items {
            if item.kind != BuildKind::KindredClass {
                item.kind = kind;
            }
            warn_duplicate_traits(item);
        }

        tracing::debug!(
            path = %path.display(),
            %kind,
            items = catalog.len(),
            "loaded build catalog"
        );
        Ok(catalog)
    }

    /// Parse a catalog from a RON string without normalizing kinds.
    pub fn parse(content: &str) -> LoadResult<BuildCatalog> {
        let catalog: BuildCatalog = ron::from_str(content)?;
        Ok(catalog)
    }
}

/// Only the first trait with a given id ever applies.
fn warn_duplicate_traits(item: &BuildItem) {
    let mut seen = BTreeSet::new();
    for (_, definition) in item.traits.iter() {
        if !seen.insert(definition.id.as_str()) {
            tracing::warn!(
                item = %item.id,
                trait_id = %definition.id,
                "duplicate trait id in build item"
            );
        }
    }
}
