//! Content factory for building a sheet engine from data files.

use std::path::{Path, PathBuf};

use sheet_core::{ProgressionRegistry, RulesConfig, SheetEngine};

use crate::loaders::{BuildCatalog, BuildLoader, ConfigLoader, LoadResult, ProgressionLoader};

/// Content factory that loads all sheet content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── progression.toml
/// ├── kindreds.ron
/// └── classes.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load rules configuration from `config.toml`.
    ///
    /// A missing file means default settings.
    pub fn load_config(&self) -> LoadResult<RulesConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(RulesConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load kindred catalog from `kindreds.ron`.
    pub fn load_kindreds(&self) -> LoadResult<BuildCatalog> {
        BuildLoader::load_kindreds(&self.data_dir.join("kindreds.ron"))
    }

    /// Load class catalog from `classes.ron`.
    pub fn load_classes(&self) -> LoadResult<BuildCatalog> {
        BuildLoader::load_classes(&self.data_dir.join("classes.ron"))
    }

    /// Load spell progressions from `progression.toml`.
    pub fn load_progressions(&self) -> LoadResult<ProgressionRegistry> {
        ProgressionLoader::load(&self.data_dir.join("progression.toml"))
    }

    /// Build an engine from `config.toml` and `progression.toml`.
    pub fn load_engine(&self) -> LoadResult<SheetEngine> {
        let config = self.load_config()?;
        let progressions = self.load_progressions()?;
        Ok(SheetEngine::new(config, progressions))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
