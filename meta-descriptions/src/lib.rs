//! # Meta Descriptions
//!
//! Generates `<meta name="description">` values for documentation pages that
//! do not declare one, and optionally exports every page's description to a
//! CSV file when the site build finishes.
//!
//! The crate is driven by a documentation build through the
//! [`plugin::PageLifecycle`] hooks:
//!
//! - **Extraction**: the visible text of a page's rendered content, trimmed,
//!   cut to 600 chars and escaped for use as an attribute value
//! - **Page hooks**: pages with an author-supplied description are left alone
//! - **Export**: rows buffered per build and written to `meta-descriptions.csv`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use meta_descriptions::prelude::*;
//!
//! let build = BuildConfig::new("site");
//! let mut plugin = MetaDescriptionPlugin::new(PluginConfig::new().with_export_csv(true));
//!
//! plugin.on_pre_build(&build);
//! let html = plugin.on_page_content(html, &mut page, &build);
//! let output = plugin.on_post_page(output, &page, &build);
//! plugin.on_post_build(&build)?;
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod errors;
pub mod events;
pub mod export;
pub mod extract;
pub mod observability;
pub mod page;
pub mod plugin;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{BuildConfig, PluginConfig};
    pub use crate::errors::MetaDescriptionError;
    pub use crate::events::{CollectingEventSink, EventSink, LoggingEventSink, NoOpEventSink};
    pub use crate::export::CsvExporter;
    pub use crate::extract::{
        escape_html, DescriptionExtractor, FirstParagraphExtractor, FALLBACK_DESCRIPTION,
        MAX_DESCRIPTION_CHARS,
    };
    pub use crate::observability::{init_logging, BuildSummary};
    pub use crate::page::{ExportRow, Page};
    pub use crate::plugin::{ExportBuffer, MetaDescriptionPlugin, PageLifecycle};
}

/// Extracts a meta description from rendered page content.
///
/// Shorthand for [`FirstParagraphExtractor`](extract::FirstParagraphExtractor).
pub fn extract_description(html: &str) -> String {
    use crate::extract::DescriptionExtractor;
    extract::FirstParagraphExtractor::new().extract(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_description() {
        assert_eq!(extract_description("<p>Hello & <b>world</b></p>"), "Hello &amp; world");
        assert_eq!(extract_description(""), extract::FALLBACK_DESCRIPTION);
    }
}
