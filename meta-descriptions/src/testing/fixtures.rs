//! Build fixtures for exercising a plugin the way the host does.

use std::path::PathBuf;

use crate::config::BuildConfig;
use crate::errors::MetaDescriptionError;
use crate::page::Page;
use crate::plugin::PageLifecycle;

/// A page plus the HTML its content renders to.
#[derive(Debug, Clone)]
pub struct TestPage {
    /// The page metadata.
    pub page: Page,
    /// Rendered content passed to `on_page_content`.
    pub html: String,
}

impl TestPage {
    /// Creates a test page.
    #[must_use]
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            page: Page::new(url),
            html: html.into(),
        }
    }

    /// Gives the page an author-supplied description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.page = self.page.with_description(description);
        self
    }

    /// Sets the page title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.page = self.page.with_title(title);
        self
    }
}

/// A simulated site build.
#[derive(Debug, Clone)]
pub struct TestBuild {
    /// Site configuration for the build.
    pub build: BuildConfig,
    /// Pages in build order.
    pub pages: Vec<TestPage>,
}

/// The outcome of running a [`TestBuild`].
#[derive(Debug)]
pub struct BuildRun {
    /// Pages after all hooks ran.
    pub pages: Vec<Page>,
    /// Whether every hook passed its markup through unchanged.
    pub passed_through: bool,
    /// Result of `on_post_build`.
    pub result: Result<Option<PathBuf>, MetaDescriptionError>,
}

impl TestBuild {
    /// Creates a build writing into `site_dir`.
    #[must_use]
    pub fn new(site_dir: impl Into<PathBuf>) -> Self {
        Self {
            build: BuildConfig::new(site_dir),
            pages: Vec::new(),
        }
    }

    /// Sets the site base URL.
    #[must_use]
    pub fn with_site_url(mut self, url: impl Into<String>) -> Self {
        self.build = self.build.with_site_url(url);
        self
    }

    /// Adds a page.
    #[must_use]
    pub fn page(mut self, page: TestPage) -> Self {
        self.pages.push(page);
        self
    }

    /// Runs every hook of `plugin` over the pages, in host order.
    pub fn run<P: PageLifecycle>(&self, plugin: &mut P) -> BuildRun {
        plugin.on_pre_build(&self.build);

        let mut pages = Vec::with_capacity(self.pages.len());
        let mut passed_through = true;

        for test_page in &self.pages {
            let mut page = test_page.page.clone();
            if let Some(base) = &self.build.site_url {
                page.canonical_url = Some(format!("{}/{}", base.trim_end_matches('/'), page.url));
            }

            let html = plugin.on_page_content(test_page.html.clone(), &mut page, &self.build);
            passed_through &= html == test_page.html;

            let output = format!("<html><body>{html}</body></html>");
            passed_through &= plugin.on_post_page(output.clone(), &page, &self.build) == output;

            pages.push(page);
        }

        let result = plugin.on_post_build(&self.build);
        BuildRun {
            pages,
            passed_through,
            result,
        }
    }
}
