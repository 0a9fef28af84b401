//! Test assertions for descriptions and export files.

use std::path::Path;

use crate::page::{ExportRow, Page};

/// Asserts that the page's description equals `expected`.
pub fn assert_description(page: &Page, expected: &str) {
    assert_eq!(
        page.description(),
        Some(expected),
        "Unexpected description for page '{}'",
        page.url
    );
}

/// Reads the data rows of an export file, skipping the header.
pub fn read_export(path: &Path) -> Vec<ExportRow> {
    let mut reader = csv::Reader::from_path(path)
        .unwrap_or_else(|e| panic!("Failed to open export '{}': {e}", path.display()));
    reader
        .deserialize()
        .collect::<Result<Vec<ExportRow>, _>>()
        .unwrap_or_else(|e| panic!("Malformed export '{}': {e}", path.display()))
}

/// Asserts that the export file holds exactly `expected`, in order.
pub fn assert_export_rows(path: &Path, expected: &[ExportRow]) {
    let rows = read_export(path);
    assert_eq!(
        rows, expected,
        "Export '{}' has {} rows, expected {}",
        path.display(),
        rows.len(),
        expected.len()
    );
}
