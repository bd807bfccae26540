//! Configuration for locating and loading balance data

use std::path::{Path, PathBuf};

use crate::app::adapters::filesystem::FsResourceStore;
use crate::constants::DATA_DIR_NAME;
use crate::{Error, Result};

/// Where and how balance tables are loaded
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory containing the shipped table files
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Config {
    /// Create configuration with an explicit data directory
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Check that the configuration points at something loadable
    pub fn validate(&self) -> Result<()> {
        if !self.data_dir.exists() {
            return Err(Error::configuration(format!(
                "data directory does not exist: {}",
                self.data_dir.display()
            )));
        }
        if !self.data_dir.is_dir() {
            return Err(Error::configuration(format!(
                "data path is not a directory: {}",
                self.data_dir.display()
            )));
        }
        Ok(())
    }

    /// A resource store rooted at the configured data directory
    pub fn store(&self) -> FsResourceStore {
        FsResourceStore::new(&self.data_dir)
    }
}

/// Platform data directory for the shipped tables, falling back to a
/// relative `txtdata/` when the platform offers no data home
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("balancedat").join(DATA_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(DATA_DIR_NAME))
}

/// Resolve the effective data directory from an optional CLI override
pub fn resolve_data_dir(cli_override: Option<&Path>) -> PathBuf {
    cli_override.map_or_else(default_data_dir, Path::to_path_buf)
}
