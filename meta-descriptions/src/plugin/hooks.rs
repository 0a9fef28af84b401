//! The meta description plugin and the lifecycle trait it implements.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::buffer::ExportBuffer;
use crate::config::{BuildConfig, PluginConfig};
use crate::errors::MetaDescriptionError;
use crate::events::{self, EventSink, NoOpEventSink};
use crate::export::CsvExporter;
use crate::extract::{DescriptionExtractor, FirstParagraphExtractor, FALLBACK_DESCRIPTION};
use crate::observability::BuildSummary;
use crate::page::Page;

/// Hooks the documentation build calls during a build.
///
/// Content-stage hooks take ownership of the markup and hand it back so the
/// host can chain plugins; this plugin never changes it.
pub trait PageLifecycle {
    /// Called once before any page is processed.
    fn on_pre_build(&mut self, _build: &BuildConfig) {}

    /// Called after a page's markdown has been rendered to HTML.
    fn on_page_content(&mut self, html: String, page: &mut Page, build: &BuildConfig) -> String;

    /// Called after a page's full output has been produced.
    fn on_post_page(&mut self, output: String, page: &Page, build: &BuildConfig) -> String;

    /// Called once after every page has been written.
    ///
    /// Returns the path of any file written. An error must abort the build.
    fn on_post_build(&mut self, build: &BuildConfig)
        -> Result<Option<PathBuf>, MetaDescriptionError>;
}

/// Fills in missing page descriptions and optionally exports them as CSV.
pub struct MetaDescriptionPlugin<E = FirstParagraphExtractor> {
    config: PluginConfig,
    extractor: E,
    buffer: ExportBuffer,
    summary: BuildSummary,
    event_sink: Arc<dyn EventSink>,
}

impl MetaDescriptionPlugin {
    /// Creates a plugin using the default extractor.
    #[must_use]
    pub fn new(config: PluginConfig) -> Self {
        Self::with_extractor(config, FirstParagraphExtractor::new())
    }
}

impl<E: DescriptionExtractor> MetaDescriptionPlugin<E> {
    /// Creates a plugin using a custom extractor.
    #[must_use]
    pub fn with_extractor(config: PluginConfig, extractor: E) -> Self {
        Self {
            config,
            extractor,
            buffer: ExportBuffer::new(),
            summary: BuildSummary::new(),
            event_sink: Arc::new(NoOpEventSink),
        }
    }

    /// Sets the sink that receives plugin events.
    #[must_use]
    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.event_sink = sink;
        self
    }

    /// Returns the plugin configuration.
    #[must_use]
    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Returns the rows buffered so far in the current build.
    #[must_use]
    pub fn buffer(&self) -> &ExportBuffer {
        &self.buffer
    }

    /// Returns the counters of the current build.
    #[must_use]
    pub fn summary(&self) -> &BuildSummary {
        &self.summary
    }

    /// Generates a description for `page` from `html` unless it has one.
    fn describe(&mut self, html: &str, page: &mut Page) {
        self.summary.pages_seen += 1;

        if page.has_description() {
            self.summary.kept += 1;
            debug!(page = %page.url, "Keeping page's own description");
            self.event_sink.emit(
                events::DESCRIPTION_KEPT,
                Some(serde_json::json!({"page": page.url})),
            );
            return;
        }

        let description = if let Some(text) = self.extractor.try_extract(html) {
            self.summary.generated += 1;
            debug!(page = %page.url, chars = text.chars().count(), "Generated description");
            self.event_sink.emit(
                events::DESCRIPTION_GENERATED,
                Some(serde_json::json!({"page": page.url, "description": text})),
            );
            text
        } else {
            self.summary.fallbacks += 1;
            warn!(page = %page.url, "Page has no text to describe it, using fallback description");
            self.event_sink.emit(
                events::DESCRIPTION_FALLBACK,
                Some(serde_json::json!({"page": page.url})),
            );
            FALLBACK_DESCRIPTION.to_string()
        };

        if !description.is_empty() {
            page.set_description(description);
        }
    }

    fn finish_build(&mut self) {
        self.summary.finish();
        info!(
            pages = self.summary.pages_seen,
            generated = self.summary.generated,
            kept = self.summary.kept,
            fallbacks = self.summary.fallbacks,
            exported = self.summary.exported,
            "Meta descriptions build complete"
        );
        self.event_sink
            .emit(events::BUILD_COMPLETED, Some(self.summary.to_value()));
    }
}

impl<E: DescriptionExtractor> PageLifecycle for MetaDescriptionPlugin<E> {
    fn on_pre_build(&mut self, _build: &BuildConfig) {
        self.buffer.clear();
        self.summary = BuildSummary::new();
    }

    fn on_page_content(&mut self, html: String, page: &mut Page, _build: &BuildConfig) -> String {
        self.describe(&html, page);
        html
    }

    fn on_post_page(&mut self, output: String, page: &Page, _build: &BuildConfig) -> String {
        if self.config.export_csv {
            self.buffer.push_page(page);
            self.event_sink.emit(
                events::EXPORT_ROW_BUFFERED,
                Some(serde_json::json!({"page": page.identity()})),
            );
        }
        output
    }

    fn on_post_build(
        &mut self,
        build: &BuildConfig,
    ) -> Result<Option<PathBuf>, MetaDescriptionError> {
        let written = if self.config.export_csv {
            let rows = self.buffer.drain();
            let exporter = CsvExporter::new(build);
            exporter.write_csv(&rows)?;

            self.summary.exported = rows.len();
            self.event_sink.emit(
                events::EXPORT_WRITTEN,
                Some(serde_json::json!({
                    "path": exporter.path().display().to_string(),
                    "rows": rows.len(),
                })),
            );
            Some(exporter.path().to_path_buf())
        } else {
            None
        };

        self.finish_build();
        self.summary = BuildSummary::new();
        Ok(written)
    }
}

impl<E> std::fmt::Debug for MetaDescriptionPlugin<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetaDescriptionPlugin")
            .field("config", &self.config)
            .field("buffered", &self.buffer.len())
            .field("summary", &self.summary)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::CollectingEventSink;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls and returns a fixed description.
    #[derive(Debug, Default)]
    struct CountingExtractor {
        calls: AtomicUsize,
    }

    impl DescriptionExtractor for CountingExtractor {
        fn try_extract(&self, _html: &str) -> Option<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Some("counted".to_string())
        }
    }

    fn build() -> BuildConfig {
        BuildConfig::new("site")
    }

    #[test]
    fn test_sets_missing_description() {
        let mut plugin = MetaDescriptionPlugin::new(PluginConfig::new());
        let mut page = Page::new("index.html");

        let html = plugin.on_page_content("<p>Welcome &amp; hello</p>".into(), &mut page, &build());

        assert_eq!(html, "<p>Welcome &amp; hello</p>");
        assert_eq!(page.description(), Some("Welcome &amp; hello"));
        assert_eq!(plugin.summary().generated, 1);
    }

    #[test]
    fn test_keeps_existing_description_without_extracting() {
        let mut plugin = MetaDescriptionPlugin::with_extractor(PluginConfig::new(), CountingExtractor::default());
        let mut page = Page::new("a/").with_description("Custom desc");

        plugin.on_page_content("<p>Body</p>".into(), &mut page, &build());

        assert_eq!(page.description(), Some("Custom desc"));
        assert_eq!(plugin.extractor.calls.load(Ordering::SeqCst), 0);
        assert_eq!(plugin.summary().kept, 1);
    }

    #[test]
    fn test_empty_description_is_replaced() {
        let mut plugin = MetaDescriptionPlugin::with_extractor(PluginConfig::new(), CountingExtractor::default());
        let mut page = Page::new("a/").with_description("");

        plugin.on_page_content(String::new(), &mut page, &build());

        assert_eq!(page.description(), Some("counted"));
        assert_eq!(plugin.extractor.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_fallback_for_empty_page() {
        let sink = Arc::new(CollectingEventSink::new());
        let mut plugin = MetaDescriptionPlugin::new(PluginConfig::new()).with_event_sink(sink.clone());
        let mut page = Page::new("blank/");

        plugin.on_page_content("<div></div>".into(), &mut page, &build());

        assert_eq!(page.description(), Some(FALLBACK_DESCRIPTION));
        assert_eq!(plugin.summary().fallbacks, 1);
        assert_eq!(sink.events_of_type(events::DESCRIPTION_FALLBACK).len(), 1);
    }

    #[test]
    fn test_post_page_without_export_buffers_nothing() {
        let mut plugin = MetaDescriptionPlugin::new(PluginConfig::new());
        let page = Page::new("a/").with_description("A");

        let output = plugin.on_post_page("<html></html>".into(), &page, &build());

        assert_eq!(output, "<html></html>");
        assert!(plugin.buffer().is_empty());
    }

    #[test]
    fn test_post_page_with_export_buffers_row() {
        let mut plugin = MetaDescriptionPlugin::new(PluginConfig::new().with_export_csv(true));
        let page = Page::new("a/").with_description("A");

        plugin.on_post_page(String::new(), &page, &build());

        assert_eq!(plugin.buffer().len(), 1);
    }

    #[test]
    fn test_post_build_without_export_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let build = BuildConfig::new(dir.path());
        let mut plugin = MetaDescriptionPlugin::new(PluginConfig::new());

        assert_eq!(plugin.on_post_build(&build).unwrap(), None);
        assert!(!build.export_path().exists());
    }

    #[test]
    fn test_debug_output() {
        let plugin = MetaDescriptionPlugin::new(PluginConfig::new());
        assert!(format!("{plugin:?}").starts_with("MetaDescriptionPlugin"));
    }
}
