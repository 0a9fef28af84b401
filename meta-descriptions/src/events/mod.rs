//! Event sink system for observability.
//!
//! The plugin reports what it did to each page and to the export through
//! an [`EventSink`]. Hosts that only want log lines use
//! [`LoggingEventSink`]; tests collect events with [`CollectingEventSink`].

mod sink;

pub use sink::{CollectingEventSink, EventSink, LoggingEventSink, NoOpEventSink};

/// A description was generated from page content.
pub const DESCRIPTION_GENERATED: &str = "description.generated";
/// A page's own description was kept.
pub const DESCRIPTION_KEPT: &str = "description.kept";
/// A page had no text and received the fallback description.
pub const DESCRIPTION_FALLBACK: &str = "description.fallback";
/// A page was added to the export buffer.
pub const EXPORT_ROW_BUFFERED: &str = "export.row_buffered";
/// The export file was written.
pub const EXPORT_WRITTEN: &str = "export.written";
/// A build finished.
pub const BUILD_COMPLETED: &str = "build.completed";
