//! Tests for header-to-schema column mapping

use crate::Error;
use crate::app::services::table_parser::columns::{SchemaColumn, SchemaMode, map_columns};
use crate::app::services::table_parser::record::DataRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TestColumn {
    Level,
    Experience,
}

impl SchemaColumn for TestColumn {
    const COUNT: usize = 2;

    fn index(self) -> usize {
        self as usize
    }

    fn from_index(index: usize) -> Option<Self> {
        [TestColumn::Level, TestColumn::Experience]
            .get(index)
            .copied()
    }

    fn name(self) -> &'static str {
        match self {
            TestColumn::Level => "Level",
            TestColumn::Experience => "Experience",
        }
    }
}

fn map_test_column(name: &str) -> Option<TestColumn> {
    match name {
        "Level" => Some(TestColumn::Level),
        "Experience" => Some(TestColumn::Experience),
        _ => None,
    }
}

fn header(line: &str) -> DataRecord<'_> {
    DataRecord::new(line, 0)
}

#[test]
fn test_maps_header_in_appearance_order() {
    let definitions = map_columns(
        "test.tsv",
        &header("Level\tExperience"),
        map_test_column,
        SchemaMode::Closed,
    )
    .unwrap();

    assert_eq!(definitions.len(), 2);
    assert_eq!(definitions[0].column(), TestColumn::Level);
    assert_eq!(definitions[0].skip_length(), 0);
    assert_eq!(definitions[1].column(), TestColumn::Experience);
    assert_eq!(definitions[1].skip_length(), 0);
}

#[test]
fn test_physical_order_does_not_matter() {
    let definitions = map_columns(
        "test.tsv",
        &header("Experience\tLevel"),
        map_test_column,
        SchemaMode::Closed,
    )
    .unwrap();

    // Definitions follow the file, so one forward pass reads both cells
    assert_eq!(definitions[0].column(), TestColumn::Experience);
    assert_eq!(definitions[1].column(), TestColumn::Level);
    assert!(definitions.iter().all(|d| d.skip_length() == 0));
}

#[test]
fn test_open_mode_counts_unmapped_cells_into_skip_lengths() {
    let definitions = map_columns(
        "test.tsv",
        &header("Comment\tLevel\tNote\tAlso\tExperience"),
        map_test_column,
        SchemaMode::Open,
    )
    .unwrap();

    assert_eq!(definitions[0].column(), TestColumn::Level);
    assert_eq!(definitions[0].skip_length(), 1);
    assert_eq!(definitions[1].column(), TestColumn::Experience);
    assert_eq!(definitions[1].skip_length(), 2);

    // skip lengths plus mapped cells account for the whole header
    let total: usize = definitions
        .iter()
        .map(|d| d.skip_length() + 1)
        .sum();
    assert_eq!(total, 5);
}

#[test]
fn test_closed_mode_rejects_unknown_columns() {
    let result = map_columns::<TestColumn, _>(
        "test.tsv",
        &header("Level\tBogus\tExperience"),
        map_test_column,
        SchemaMode::Closed,
    );

    match result {
        Err(Error::UnknownColumn { resource, column }) => {
            assert_eq!(resource, "test.tsv");
            assert_eq!(column, "Bogus");
        }
        other => panic!("expected UnknownColumn, got {other:?}"),
    }
}

#[test]
fn test_missing_schema_column_is_fatal() {
    let result = map_columns::<TestColumn, _>(
        "test.tsv",
        &header("Level"),
        map_test_column,
        SchemaMode::Closed,
    );

    match result {
        Err(Error::MissingColumn { resource, column }) => {
            assert_eq!(resource, "test.tsv");
            assert_eq!(column, "Experience");
        }
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn test_duplicate_column_is_fatal() {
    let result = map_columns::<TestColumn, _>(
        "test.tsv",
        &header("Level\tExperience\tLevel"),
        map_test_column,
        SchemaMode::Closed,
    );

    match result {
        Err(Error::DuplicateColumn { column, .. }) => assert_eq!(column, "Level"),
        other => panic!("expected DuplicateColumn, got {other:?}"),
    }
}

#[test]
fn test_empty_header_reports_first_missing_column() {
    // An empty line still has one (empty) cell, which maps to nothing
    let result = map_columns::<TestColumn, _>(
        "test.tsv",
        &header(""),
        map_test_column,
        SchemaMode::Open,
    );

    match result {
        Err(Error::MissingColumn { column, .. }) => assert_eq!(column, "Level"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}
