//! Balance Data Loader Library
//!
//! A Rust library for loading fixed-schema, tab-separated game balance tables
//! (character class stats, experience curves) into strongly-typed in-memory
//! values.
//!
//! This library provides tools for:
//! - Parsing tab-separated data files with a header row mapped onto a closed,
//!   caller-defined column schema
//! - Exception-free integer parsing with range enforcement
//! - Exact decimal-to-1/64 fixed-point conversion with round-to-nearest
//! - Walking data rows with skip-length cursors so column order and
//!   interleaved irrelevant columns never misread data
//! - Fatal, contextual error reporting: balance tables are trusted build-time
//!   content, so a malformed cell aborts the load rather than degrading

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod balance_tables;
        pub mod table_parser;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ClassStats, HeroClass};
pub use app::services::balance_tables::{ClassStatsTable, ExperienceTable};
pub use app::services::table_parser::{DataFile, Field, Fixed6, ResourceStore};
pub use config::Config;

/// Result type alias for the balance data loader
pub type Result<T> = std::result::Result<T, Error>;

/// What went wrong inside a single cell
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// No numeric prefix could be parsed at all
    #[error("not a number")]
    ParseFailure,

    /// Parsed fine, but the value does not fit the target range
    #[error("out of range")]
    OutOfRange,

    /// Cell validated against a closed literal set and matched nothing
    #[error("not a recognized value")]
    InvalidValue,
}

/// Error types for balance data loading operations
///
/// Every structural or field error is fatal to the load that raised it: these
/// tables ship with the game, and substituting defaults for broken cells would
/// silently corrupt balance numbers.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Named resource does not exist in the store
    #[error("resource not found: {resource}")]
    ResourceNotFound { resource: String },

    /// Header cell not recognized by a closed schema
    #[error("unknown column '{column}' in '{resource}'")]
    UnknownColumn { resource: String, column: String },

    /// Schema column absent from the header
    #[error("missing column '{column}' in '{resource}'")]
    MissingColumn { resource: String, column: String },

    /// Header names the same schema column twice
    #[error("duplicate column '{column}' in '{resource}'")]
    DuplicateColumn { resource: String, column: String },

    /// Data row has fewer cells than the schema requires
    #[error("row {row} of '{resource}' has too few columns")]
    NotEnoughColumns { resource: String, row: usize },

    /// A required cell failed typed extraction
    #[error("invalid value '{value}' for column '{column}' in '{resource}': {kind}")]
    Field {
        resource: String,
        column: String,
        value: String,
        kind: FieldError,
    },

    /// Table loaded cleanly but a required record never appeared
    #[error("'{resource}' is missing a row for {missing}")]
    IncompleteTable { resource: String, missing: String },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a resource-not-found error
    pub fn resource_not_found(resource: impl Into<String>) -> Self {
        Self::ResourceNotFound {
            resource: resource.into(),
        }
    }

    /// Create an unknown-column error
    pub fn unknown_column(resource: impl Into<String>, column: impl Into<String>) -> Self {
        Self::UnknownColumn {
            resource: resource.into(),
            column: column.into(),
        }
    }

    /// Create a missing-column error
    pub fn missing_column(resource: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            resource: resource.into(),
            column: column.into(),
        }
    }

    /// Create a duplicate-column error
    pub fn duplicate_column(resource: impl Into<String>, column: impl Into<String>) -> Self {
        Self::DuplicateColumn {
            resource: resource.into(),
            column: column.into(),
        }
    }

    /// Create a not-enough-columns error for a 1-based data row
    pub fn not_enough_columns(resource: impl Into<String>, row: usize) -> Self {
        Self::NotEnoughColumns {
            resource: resource.into(),
            row,
        }
    }

    /// Create a field error carrying the offending cell text
    pub fn field(
        kind: FieldError,
        resource: impl Into<String>,
        column: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::Field {
            resource: resource.into(),
            column: column.into(),
            value: value.into(),
            kind,
        }
    }

    /// Create an incomplete-table error
    pub fn incomplete_table(resource: impl Into<String>, missing: impl Into<String>) -> Self {
        Self::IncompleteTable {
            resource: resource.into(),
            missing: missing.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
