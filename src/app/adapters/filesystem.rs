//! Filesystem-backed resource store

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::app::services::table_parser::ResourceStore;
use crate::{Error, Result};

/// Opens named resources as files under a root directory
#[derive(Debug, Clone)]
pub struct FsResourceStore {
    root: PathBuf,
}

impl FsResourceStore {
    /// Create a store rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory resources are resolved against
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceStore for FsResourceStore {
    fn open(&self, name: &str) -> Result<String> {
        let path = self.root.join(name);
        if !path.is_file() {
            return Err(Error::resource_not_found(name));
        }
        debug!("reading resource file {}", path.display());
        std::fs::read_to_string(&path)
            .map_err(|source| Error::io(format!("failed to read {}", path.display()), source))
    }
}
