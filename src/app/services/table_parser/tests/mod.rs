//! Test utilities shared across the table parser test modules

use std::collections::HashMap;

use crate::app::services::table_parser::ResourceStore;
use crate::{Error, Result};

// Test modules
mod columns_tests;

/// In-memory resource store for tests
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    resources: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion of a named resource
    pub fn with(mut self, name: &str, text: &str) -> Self {
        self.resources.insert(name.to_string(), text.to_string());
        self
    }
}

impl ResourceStore for MemoryStore {
    fn open(&self, name: &str) -> Result<String> {
        self.resources
            .get(name)
            .cloned()
            .ok_or_else(|| Error::resource_not_found(name))
    }
}
