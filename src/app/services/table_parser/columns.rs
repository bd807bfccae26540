//! Header-to-schema column mapping
//!
//! A table's header row is matched against a closed, caller-defined column
//! enumeration once per load. The result is a list of column definitions in
//! header-appearance order, each carrying the number of irrelevant cells a
//! row cursor must jump before reading that column's cell. A single forward
//! pass over any data row then visits every schema column exactly once, no
//! matter how the file physically orders them.

use tracing::debug;

use super::record::DataRecord;
use crate::{Error, Result};

/// A closed, caller-defined enumeration of the columns a table must provide
///
/// `index` and `from_index` follow declaration order; `name` is the canonical
/// header spelling, used for diagnostics when a declared column is absent
/// from a file.
pub trait SchemaColumn: Copy + Eq {
    /// Number of enumerators
    const COUNT: usize;

    /// Declaration-order position of this enumerator
    fn index(self) -> usize;

    /// Inverse of [`index`](Self::index)
    fn from_index(index: usize) -> Option<Self>;

    /// Canonical header name
    fn name(self) -> &'static str;
}

/// How to treat header cells the mapping function does not recognize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaMode {
    /// Reject unrecognized header names outright. Shipped balance tables use
    /// this: an unexpected column means a stale or mistyped data file, and
    /// guessing would misread every row after it.
    #[default]
    Closed,
    /// Count unrecognized columns into the preceding skip length
    Open,
}

/// One mapped header column and the cell distance to reach it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDefinition<C> {
    column: C,
    skip_length: usize,
}

impl<C: SchemaColumn> ColumnDefinition<C> {
    /// The schema column this definition binds
    pub fn column(&self) -> C {
        self.column
    }

    /// Cells to jump from the cursor's position before reading this column
    pub fn skip_length(&self) -> usize {
        self.skip_length
    }
}

/// Map a header row onto schema `C`
///
/// Walks the header cells left to right keeping a running count of unmapped
/// cells; each mapped cell captures the count as its skip length and resets
/// it. Errors: [`Error::UnknownColumn`] for an unrecognized name under
/// [`SchemaMode::Closed`], [`Error::DuplicateColumn`] when a name maps to an
/// already-seen enumerator, and [`Error::MissingColumn`] when the walk ends
/// with a declared column never having appeared.
pub fn map_columns<C, F>(
    resource: &str,
    header: &DataRecord<'_>,
    map_name: F,
    mode: SchemaMode,
) -> Result<Vec<ColumnDefinition<C>>>
where
    C: SchemaColumn,
    F: Fn(&str) -> Option<C>,
{
    let mut definitions = Vec::with_capacity(C::COUNT);
    let mut seen = vec![false; C::COUNT];

    let mut skip_length = 0;
    let mut cursor = header.fields();
    while let Some(cell) = cursor.current() {
        match map_name(cell.as_str()) {
            Some(column) => {
                if seen[column.index()] {
                    return Err(Error::duplicate_column(resource, cell.as_str()));
                }
                seen[column.index()] = true;
                definitions.push(ColumnDefinition {
                    column,
                    skip_length,
                });
                skip_length = 0;
            }
            None => match mode {
                SchemaMode::Closed => {
                    return Err(Error::unknown_column(resource, cell.as_str()));
                }
                SchemaMode::Open => skip_length += 1,
            },
        }
        cursor.advance();
    }

    for index in 0..C::COUNT {
        if !seen[index] {
            let name = C::from_index(index).map_or("<unnamed>", C::name);
            return Err(Error::missing_column(resource, name));
        }
    }

    debug!(
        "mapped {} of {} header cells for '{}'",
        definitions.len(),
        header.cell_count(),
        resource
    );
    Ok(definitions)
}
