//! Generic tab-separated table parsing engine
//!
//! This is the reusable core under every balance table: it knows how to map a
//! header row onto a caller-defined column schema, walk data rows with
//! skip-length cursors, and convert cells into bounded integers or 1/64
//! fixed-point values with bit-exact rounding. It knows nothing about what
//! the columns mean; consumers in
//! [`balance_tables`](crate::app::services::balance_tables) supply the
//! schemas and own the resulting typed records.
//!
//! ## Architecture
//!
//! - [`data_file`] - Owns a resource's text and exposes header and rows
//! - [`columns`] - Header-to-schema mapping and skip-length computation
//! - [`record`] - Row cells and the forward-only field cursor
//! - [`field`] - Typed extraction from a single cell
//! - [`parse_int`] - Bounded, panic-free integer parsing
//! - [`fixed`] - 1/64 fixed-point values and exact fraction rounding
//!
//! ## Usage
//!
//! ```rust
//! use balancedat::app::services::table_parser::{DataFile, SchemaColumn};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Column {
//!     Level,
//!     Experience,
//! }
//!
//! impl SchemaColumn for Column {
//!     const COUNT: usize = 2;
//!     fn index(self) -> usize {
//!         self as usize
//!     }
//!     fn from_index(index: usize) -> Option<Self> {
//!         [Column::Level, Column::Experience].get(index).copied()
//!     }
//!     fn name(self) -> &'static str {
//!         match self {
//!             Column::Level => "Level",
//!             Column::Experience => "Experience",
//!         }
//!     }
//! }
//!
//! # fn main() -> balancedat::Result<()> {
//! let file = DataFile::new("demo.tsv", "Level\tExperience\n1\t0\n2\t100\n".to_string());
//! let columns = file.parse_header(|name| match name {
//!     "Level" => Some(Column::Level),
//!     "Experience" => Some(Column::Experience),
//!     _ => None,
//! })?;
//!
//! for record in file.records() {
//!     let mut fields = record.fields();
//!     for definition in &columns {
//!         fields.skip(definition.skip_length());
//!         let field = fields
//!             .current()
//!             .ok_or_else(|| balancedat::Error::not_enough_columns("demo.tsv", record.row_number()))?;
//!         match definition.column() {
//!             Column::Level => {
//!                 let _ = field.parse_int::<u8>();
//!             }
//!             Column::Experience => {
//!                 let _ = field.parse_int::<u32>();
//!             }
//!         }
//!         fields.advance();
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod columns;
pub mod data_file;
pub mod field;
pub mod fixed;
pub mod parse_int;
pub mod record;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use columns::{ColumnDefinition, SchemaColumn, SchemaMode, map_columns};
pub use data_file::{DataFile, Records, ResourceStore};
pub use field::Field;
pub use fixed::{FIXED6_ONE, Fixed6, parse_fixed6_fraction};
pub use parse_int::{ParseIntError, ParsedValue, TableInt, parse_int, parse_int_prefix};
pub use record::{DataRecord, FieldCursor};
