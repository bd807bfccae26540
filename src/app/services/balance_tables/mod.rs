//! Loaders for the shipped balance tables
//!
//! Each table here pairs a closed column schema with the generic engine in
//! [`table_parser`](crate::app::services::table_parser) and produces a
//! caller-owned, fully-validated value. There is no partial success: a table
//! either loads completely or the load fails with a diagnostic naming the
//! resource, column, and offending cell.

pub mod class_stats;
pub mod experience;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use class_stats::ClassStatsTable;
pub use experience::ExperienceTable;
