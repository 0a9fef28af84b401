//! Accumulator for export rows within one build.

use crate::page::{ExportRow, Page};

/// Ordered rows collected during a single build.
///
/// Owned by the plugin; drained when the build completes so that rows never
/// leak from one build into the next.
#[derive(Debug, Clone, Default)]
pub struct ExportBuffer {
    rows: Vec<ExportRow>,
}

impl ExportBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a page's identity and its current description.
    pub fn push_page(&mut self, page: &Page) {
        self.rows.push(ExportRow::from_page(page));
    }

    /// Returns the buffered rows.
    #[must_use]
    pub fn rows(&self) -> &[ExportRow] {
        &self.rows
    }

    /// Number of buffered rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Discards all rows.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Takes all rows, leaving the buffer empty.
    pub fn drain(&mut self) -> Vec<ExportRow> {
        std::mem::take(&mut self.rows)
    }
}
