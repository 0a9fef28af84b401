//! Description extraction from rendered page markup.
//!
//! This module provides:
//! - The [`DescriptionExtractor`] trait, the seam the plugin extracts through
//! - [`FirstParagraphExtractor`], the default lenient-parser implementation
//! - HTML attribute escaping for the resulting text

mod escape;
mod first_paragraph;

pub use escape::{escape_html, escaped_len};
pub use first_paragraph::{FirstParagraphExtractor, FALLBACK_DESCRIPTION, MAX_DESCRIPTION_CHARS};

/// Protocol for turning a page's rendered markup into a meta description.
pub trait DescriptionExtractor: Send + Sync {
    /// Extracts a description, or `None` when the markup has no usable text.
    fn try_extract(&self, html: &str) -> Option<String>;

    /// Extracts a description, falling back to [`FALLBACK_DESCRIPTION`].
    ///
    /// Never fails: malformed markup degrades to whatever text the parser
    /// recovers, and markup with no text yields the fallback.
    fn extract(&self, html: &str) -> String {
        self.try_extract(html)
            .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string())
    }
}
