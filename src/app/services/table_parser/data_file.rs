//! Tabular data file handling
//!
//! A [`DataFile`] owns the full text of one tab-separated resource for its
//! lifetime; the header row and every data row are borrowed views into that
//! buffer. I/O happens exactly once, at load; iteration afterwards is pure
//! computation.

use tracing::debug;

use super::columns::{ColumnDefinition, SchemaColumn, SchemaMode, map_columns};
use super::record::DataRecord;
use crate::Result;

/// Resource-loading collaborator: named text in, owned string out
///
/// The parser core never touches the filesystem itself; anything that can
/// produce the text of a named resource (a directory tree, an archive, a
/// test fixture map) plugs in here.
pub trait ResourceStore {
    /// Open a named resource and return its full text
    ///
    /// Returns [`Error::ResourceNotFound`](crate::Error::ResourceNotFound)
    /// when the name does not exist in the store.
    fn open(&self, name: &str) -> Result<String>;
}

/// One loaded tab-separated table: a header row plus data rows
#[derive(Debug, Clone)]
pub struct DataFile {
    resource: String,
    content: String,
    body_start: usize,
}

impl DataFile {
    /// Load a named resource from `store`
    pub fn load(store: &impl ResourceStore, name: &str) -> Result<Self> {
        let content = store.open(name)?;
        debug!("loaded resource '{}' ({} bytes)", name, content.len());
        Ok(Self::new(name, content))
    }

    /// Wrap already-loaded text
    pub fn new(resource: impl Into<String>, content: String) -> Self {
        // The first line is reserved for the header; data rows start after it.
        let body_start = content.find('\n').map_or(content.len(), |pos| pos + 1);
        Self {
            resource: resource.into(),
            content,
            body_start,
        }
    }

    /// The name this table was opened under
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// The header row
    pub fn header(&self) -> DataRecord<'_> {
        let line = self.content.lines().next().unwrap_or("");
        DataRecord::new(line, 0)
    }

    /// Map the header row onto schema `C`, rejecting unknown columns
    pub fn parse_header<C, F>(&self, map_name: F) -> Result<Vec<ColumnDefinition<C>>>
    where
        C: SchemaColumn,
        F: Fn(&str) -> Option<C>,
    {
        self.parse_header_with_mode(map_name, SchemaMode::Closed)
    }

    /// Map the header row onto schema `C` with an explicit unknown-column
    /// policy
    pub fn parse_header_with_mode<C, F>(
        &self,
        map_name: F,
        mode: SchemaMode,
    ) -> Result<Vec<ColumnDefinition<C>>>
    where
        C: SchemaColumn,
        F: Fn(&str) -> Option<C>,
    {
        map_columns(&self.resource, &self.header(), map_name, mode)
    }

    /// Iterate the data rows, in file order
    ///
    /// The iterator is restartable; call again for a fresh pass. Blank lines
    /// (including a trailing newline at end of file) are not data rows and
    /// are skipped.
    pub fn records(&self) -> Records<'_> {
        Records {
            lines: self.content[self.body_start..].lines(),
            next_row: 0,
        }
    }
}

/// Iterator over the data rows of a [`DataFile`]
#[derive(Debug, Clone)]
pub struct Records<'a> {
    lines: std::str::Lines<'a>,
    next_row: usize,
}

impl<'a> Iterator for Records<'a> {
    type Item = DataRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            if line.is_empty() {
                continue;
            }
            self.next_row += 1;
            return Some(DataRecord::new(line, self.next_row));
        }
    }
}
