// bidmatrix/src/commands/mod.rs

pub mod analyze;
pub mod export;
pub mod score;
pub mod show;

use anyhow::Context;
use std::path::{Path, PathBuf};

use bidmatrix_core::domain::project::ProjectConfig;
use bidmatrix_core::infrastructure::adapters::CsvTableStore;
use bidmatrix_core::infrastructure::config::load_project_config;

/// A project directory with its configuration loaded.
pub struct Project {
    pub dir: PathBuf,
    pub config: ProjectConfig,
    pub store: CsvTableStore,
}

impl Project {
    pub fn open(dir: &Path) -> anyhow::Result<Self> {
        let config = load_project_config(dir)
            .with_context(|| format!("Failed to load configuration from {}", dir.display()))?;
        let store = CsvTableStore::new(config.table_path_in(dir));
        Ok(Self {
            dir: dir.to_path_buf(),
            config,
            store,
        })
    }
}
