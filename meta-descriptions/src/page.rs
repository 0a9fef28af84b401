//! Page and export row models.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata key the host's templates read the meta description from.
pub const DESCRIPTION_KEY: &str = "description";

/// One documentation page as seen by the plugin.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page {
    /// Site-relative URL of the page (e.g. `guide/install/`).
    pub url: String,
    /// Page title, if the host resolved one.
    pub title: Option<String>,
    /// Absolute URL of the page, when the site has a base URL.
    pub canonical_url: Option<String>,
    /// Front-matter metadata.
    #[serde(default)]
    pub meta: HashMap<String, String>,
}

impl Page {
    /// Creates a page with the given site-relative URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the canonical URL.
    #[must_use]
    pub fn with_canonical_url(mut self, url: impl Into<String>) -> Self {
        self.canonical_url = Some(url.into());
        self
    }

    /// Adds a metadata entry.
    #[must_use]
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Sets the description metadata entry.
    #[must_use]
    pub fn with_description(self, description: impl Into<String>) -> Self {
        self.with_meta(DESCRIPTION_KEY, description)
    }

    /// Returns the description, if one is set and non-empty.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.meta
            .get(DESCRIPTION_KEY)
            .map(String::as_str)
            .filter(|d| !d.is_empty())
    }

    /// Whether the page author supplied a description.
    #[must_use]
    pub fn has_description(&self) -> bool {
        self.description().is_some()
    }

    /// Sets the description metadata entry.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.meta.insert(DESCRIPTION_KEY.to_string(), description.into());
    }

    /// Identifier used for the page in exports.
    ///
    /// Prefers the canonical URL, then the site-relative URL.
    #[must_use]
    pub fn identity(&self) -> &str {
        self.canonical_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or(&self.url)
    }
}

/// A page's identity and final description, captured for export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportRow {
    /// Page identifier (canonical or relative URL).
    #[serde(rename = "Page")]
    pub page: String,
    /// The description the page was rendered with.
    #[serde(rename = "Meta description")]
    pub description: String,
}

impl ExportRow {
    /// Creates a new export row.
    #[must_use]
    pub fn new(page: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            description: description.into(),
        }
    }

    /// Captures a page's current identity and description.
    #[must_use]
    pub fn from_page(page: &Page) -> Self {
        Self::new(page.identity(), page.description().unwrap_or_default())
    }
}
