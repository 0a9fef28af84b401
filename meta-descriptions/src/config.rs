//! Configuration types for the plugin and the surrounding site build.
//!
//! Both types are read from the mappings the host hands to the plugin
//! (plugin options and the site configuration), represented here as
//! [`serde_json::Value`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{ConfigErrorInfo, MetaDescriptionError};

/// Name of the export file written into the site directory.
pub const EXPORT_FILE_NAME: &str = "meta-descriptions.csv";

/// Plugin options, as set under the plugin entry of the site configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PluginConfig {
    /// Whether to collect descriptions and write them to a CSV file.
    #[serde(default = "default_export_csv")]
    pub export_csv: bool,
}

fn default_export_csv() -> bool {
    false
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            export_csv: default_export_csv(),
        }
    }
}

impl PluginConfig {
    /// Creates a new plugin configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the CSV export.
    #[must_use]
    pub fn with_export_csv(mut self, enabled: bool) -> Self {
        self.export_csv = enabled;
        self
    }

    /// Reads plugin options from the host's option mapping.
    ///
    /// `null` means the plugin was listed without options.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, MetaDescriptionError> {
        if value.is_null() {
            return Ok(Self::default());
        }

        let options = value.as_object().ok_or_else(|| {
            ConfigErrorInfo::new("plugins.meta-descriptions", "expected a mapping of options")
        })?;

        if let Some(export) = options.get("export_csv") {
            if !export.is_boolean() {
                return Err(ConfigErrorInfo::new(
                    "export_csv",
                    format!("expected a boolean, got {export}"),
                )
                .with_fix_hint("use `true` or `false`")
                .into());
            }
        }

        Ok(serde_json::from_value(value.clone())?)
    }
}

/// The parts of the site configuration the plugin needs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildConfig {
    /// Directory the built site is written to.
    pub site_dir: PathBuf,
    /// Public base URL of the site, if configured.
    #[serde(default)]
    pub site_url: Option<String>,
}

impl BuildConfig {
    /// Creates a build configuration for the given output directory.
    #[must_use]
    pub fn new(site_dir: impl Into<PathBuf>) -> Self {
        Self {
            site_dir: site_dir.into(),
            site_url: None,
        }
    }

    /// Sets the public base URL.
    #[must_use]
    pub fn with_site_url(mut self, url: impl Into<String>) -> Self {
        self.site_url = Some(url.into());
        self
    }

    /// Reads the build configuration from the host's site configuration.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, MetaDescriptionError> {
        match value.get("site_dir") {
            Some(serde_json::Value::String(dir)) if !dir.is_empty() => {}
            Some(other) => {
                return Err(ConfigErrorInfo::new(
                    "site_dir",
                    format!("expected a non-empty path, got {other}"),
                )
                .into());
            }
            None => return Err(ConfigErrorInfo::new("site_dir", "missing").into()),
        }

        let mut config: Self = serde_json::from_value(value.clone())?;
        // An empty site_url is how the host spells "not configured".
        if config.site_url.as_deref().is_some_and(str::is_empty) {
            config.site_url = None;
        }
        Ok(config)
    }

    /// Returns the site output directory.
    #[must_use]
    pub fn site_dir(&self) -> &Path {
        &self.site_dir
    }

    /// Returns the path the CSV export is written to.
    #[must_use]
    pub fn export_path(&self) -> PathBuf {
        self.site_dir.join(EXPORT_FILE_NAME)
    }
}
