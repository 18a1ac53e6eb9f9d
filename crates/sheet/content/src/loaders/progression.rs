//! Spell progression table loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sheet_core::{MagicTradition, ProgressionRegistry, ProgressionTable};

use crate::loaders::{LoadResult, read_file};

/// One class's slot table for one tradition.
///
/// `rows[0]` is level 1; each row lists slots per rank starting at rank 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionSpec {
    pub class: String,
    pub tradition: MagicTradition,
    pub rows: Vec<Vec<u8>>,
}

/// Progression file structure for TOML files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ProgressionFile {
    #[serde(default)]
    table: Vec<ProgressionSpec>,
}

/// Loader for spell progression tables from TOML files.
pub struct ProgressionLoader;

impl ProgressionLoader {
    /// Load every table in a TOML file into a registry.
    ///
    /// Malformed tables are rejected with the class and tradition named.
    pub fn load(path: &Path) -> LoadResult<ProgressionRegistry> {
        let content = read_file(path)?;
        let registry = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tables {}: {}", path.display(), e))?;

        tracing::debug!(
            path = %path.display(),
            tables = registry.len(),
            "loaded spell progressions"
        );
        Ok(registry)
    }

    /// Parse tables from a TOML string.
    pub fn parse(content: &str) -> LoadResult<ProgressionRegistry> {
        let file: ProgressionFile = toml::from_str(content)?;

        let mut registry = ProgressionRegistry::new();
        for spec in file.table {
            let table = ProgressionTable::new(spec.tradition, spec.rows).map_err(|e| {
                anyhow::anyhow!(
                    "Invalid {} table for class '{}': {}",
                    spec.tradition,
                    spec.class,
                    e
                )
            })?;
            if registry.insert(&spec.class, table).is_some() {
                tracing::warn!(
                    class = %spec.class,
                    tradition = %spec.tradition,
                    "progression table defined twice, last one wins"
                );
            }
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tables_per_class_and_tradition() {
        let content = r#"
[[table]]
class = "cleric"
tradition = "holy"
rows = [
    [0, 0, 0, 0, 0],
    [1, 0, 0, 0, 0],
]

[[table]]
class = "magician"
tradition = "arcane"
rows = [[1, 0, 0, 0, 0, 0]]
"#;
        let registry = ProgressionLoader::parse(content).unwrap();
        assert_eq!(registry.len(), 2);

        let cleric = registry.get("cleric", MagicTradition::Holy).unwrap();
        assert_eq!(cleric.levels(), 2);
        assert_eq!(cleric.row(2), &[1, 0, 0, 0, 0]);
        assert!(registry.get("cleric", MagicTradition::Arcane).is_none());
    }

    #[test]
    fn rejects_wrong_row_width() {
        let content = r#"
[[table]]
class = "cleric"
tradition = "holy"
rows = [[1, 0, 0, 0, 0, 0]]
"#;
        let err = ProgressionLoader::parse(content).unwrap_err();
        assert!(err.to_string().contains("cleric"));
    }

    #[test]
    fn empty_file_gives_empty_registry() {
        assert!(ProgressionLoader::parse("").unwrap().is_empty());
    }
}
