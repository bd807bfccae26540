//! Data rows and the skip-length cursor that walks them

use super::field::Field;

/// One data row of a table, split into cells at tab characters
///
/// Records are ephemeral: one is produced per row during iteration and
/// discarded once its fields have been copied into a caller-owned struct.
#[derive(Debug, Clone)]
pub struct DataRecord<'a> {
    cells: Vec<&'a str>,
    row: usize,
}

impl<'a> DataRecord<'a> {
    pub(crate) fn new(line: &'a str, row: usize) -> Self {
        Self {
            cells: line.split('\t').collect(),
            row,
        }
    }

    /// 1-based position of this row in the data section, for diagnostics
    pub fn row_number(&self) -> usize {
        self.row
    }

    /// Number of physical cells in this row
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// A cursor positioned on the first cell
    pub fn fields(&self) -> FieldCursor<'_, 'a> {
        FieldCursor {
            cells: &self.cells,
            index: 0,
        }
    }
}

/// Forward-only cursor over the cells of one row
///
/// The cursor advances left to right, either one cell at a time or by a
/// skip length taken from a column definition. Past the last cell it sits on
/// an end sentinel where [`current`](Self::current) is `None`; advancing the
/// sentinel saturates rather than wrapping, so the out-of-bounds dereference
/// of a too-short row is unrepresentable: callers observe it as `None` and
/// report the row as structurally invalid.
#[derive(Debug, Clone)]
pub struct FieldCursor<'r, 'a> {
    cells: &'r [&'a str],
    index: usize,
}

impl<'r, 'a> FieldCursor<'r, 'a> {
    /// The cell under the cursor, or `None` at the end sentinel
    pub fn current(&self) -> Option<Field<'a>> {
        self.cells.get(self.index).map(|cell| Field::new(cell))
    }

    /// Whether the cursor has moved past the last cell
    pub fn at_end(&self) -> bool {
        self.index >= self.cells.len()
    }

    /// Step over one cell
    pub fn advance(&mut self) {
        self.skip(1);
    }

    /// Jump over `count` cells that the active schema does not care about
    pub fn skip(&mut self, count: usize) {
        self.index = self.index.saturating_add(count).min(self.cells.len());
    }
}
