//! The default extractor: visible text of the rendered page body.

use scraper::{ElementRef, Html, Node};

use super::escape::escape_html_bounded;
use super::DescriptionExtractor;

/// Maximum length of a generated description, in chars.
pub const MAX_DESCRIPTION_CHARS: usize = 600;

/// Returned when a page has no text to describe it with.
pub const FALLBACK_DESCRIPTION: &str =
    "Meta Descriptions not working, please report to owner of the website.";

/// Elements whose text never renders as page content.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "template", "noscript"];

/// Extracts the leading visible text of a page's rendered content.
///
/// The markup is parsed with a lenient HTML5 parser, so unclosed or
/// misnested tags are recovered rather than rejected. Text nodes are joined
/// in document order, trimmed, and cut to [`MAX_DESCRIPTION_CHARS`] chars
/// of escaped output with no ellipsis.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstParagraphExtractor;

impl FirstParagraphExtractor {
    /// Creates a new extractor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the concatenated visible text of `html`, untrimmed and unescaped.
    #[must_use]
    pub fn visible_text(html: &str) -> String {
        let fragment = Html::parse_fragment(html);
        let mut text = String::new();

        for node in fragment.tree.root().descendants() {
            let Node::Text(chunk) = node.value() else {
                continue;
            };
            let hidden = node
                .ancestors()
                .filter_map(ElementRef::wrap)
                .any(|el| HIDDEN_ELEMENTS.contains(&el.value().name()));
            if !hidden {
                text.push_str(chunk);
            }
        }

        text
    }
}

impl DescriptionExtractor for FirstParagraphExtractor {
    fn try_extract(&self, html: &str) -> Option<String> {
        let text = Self::visible_text(html);
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        Some(escape_html_bounded(text, MAX_DESCRIPTION_CHARS))
    }
}
