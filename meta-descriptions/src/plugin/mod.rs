//! Page lifecycle hooks invoked by the documentation build.
//!
//! The host calls the hooks of a [`PageLifecycle`] in order for each build:
//! `on_pre_build` once, `on_page_content` and `on_post_page` for every page,
//! then `on_post_build` once.

mod buffer;
mod hooks;

#[cfg(test)]
mod integration_tests;

pub use buffer::ExportBuffer;
pub use hooks::{MetaDescriptionPlugin, PageLifecycle};
