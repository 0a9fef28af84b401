//! CSV export of page descriptions.
//!
//! The export is one header line followed by one row per page, in the order
//! pages were finalized.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::BuildConfig;
use crate::errors::{ExportFailure, MetaDescriptionError};
use crate::page::ExportRow;

/// Header line of the export file.
pub const CSV_HEADER: [&str; 2] = ["Page", "Meta description"];

/// Writes collected export rows to a CSV file in the site directory.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    /// Creates an exporter writing to the build's export path.
    #[must_use]
    pub fn new(build: &BuildConfig) -> Self {
        Self {
            path: build.export_path(),
        }
    }

    /// Creates an exporter writing to an explicit path.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file this exporter writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `rows` to the export file, replacing any previous export.
    ///
    /// The parent directory must already exist; the host creates the site
    /// directory before the build completes.
    pub fn write_csv(&self, rows: &[ExportRow]) -> Result<(), MetaDescriptionError> {
        debug!(path = %self.path.display(), rows = rows.len(), "Writing description export");

        let file = File::create(&self.path)
            .map_err(|e| MetaDescriptionError::export(&self.path, e))?;
        write_rows(file, rows).map_err(|e| MetaDescriptionError::export(&self.path, e))?;

        info!(path = %self.path.display(), rows = rows.len(), "Wrote description export");
        Ok(())
    }
}

/// Writes the header and `rows` as CSV to `writer`.
pub fn write_rows<W: Write>(writer: W, rows: &[ExportRow]) -> Result<(), ExportFailure> {
    let mut csv = csv::WriterBuilder::new().has_headers(false).from_writer(writer);

    csv.write_record(CSV_HEADER)?;
    for row in rows {
        csv.write_record([row.page.as_str(), row.description.as_str()])?;
    }
    csv.flush()?;
    Ok(())
}
