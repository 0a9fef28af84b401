//! Per-build counters reported when a build completes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the plugin did during one build.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildSummary {
    /// Pages whose content was processed.
    pub pages_seen: usize,
    /// Descriptions generated from page content.
    pub generated: usize,
    /// Pages that kept an author-supplied description.
    pub kept: usize,
    /// Pages that received the fallback description.
    pub fallbacks: usize,
    /// Rows written to the export file.
    pub exported: usize,
    /// When the build started.
    pub started_at: DateTime<Utc>,
    /// When the build finished, once it has.
    pub finished_at: Option<DateTime<Utc>>,
}

impl Default for BuildSummary {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildSummary {
    /// Starts a new summary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pages_seen: 0,
            generated: 0,
            kept: 0,
            fallbacks: 0,
            exported: 0,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Marks the build as finished.
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Build duration in milliseconds, once finished.
    #[must_use]
    pub fn duration_ms(&self) -> Option<i64> {
        self.finished_at
            .map(|end| (end - self.started_at).num_milliseconds())
    }

    /// Converts to a JSON value for event data.
    #[must_use]
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "pages_seen": self.pages_seen,
            "generated": self.generated,
            "kept": self.kept,
            "fallbacks": self.fallbacks,
            "exported": self.exported,
            "started_at": self.started_at.to_rfc3339(),
            "finished_at": self.finished_at.map(|t| t.to_rfc3339()),
            "duration_ms": self.duration_ms(),
        })
    }
}
