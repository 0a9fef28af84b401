//! Error types for meta description generation and export.
//!
//! Extraction itself never fails; errors only come from reading host
//! configuration and from writing the export file at the end of a build.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for meta description operations.
#[derive(Debug, Error)]
pub enum MetaDescriptionError {
    /// The plugin or build configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The export file could not be written.
    #[error("Export error for '{}': {source}", .path.display())]
    Export {
        /// The export file path.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: ExportFailure,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// The low-level cause of a failed export write.
#[derive(Debug, Error)]
pub enum ExportFailure {
    /// Opening or flushing the file failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Encoding a row failed.
    #[error("{0}")]
    Csv(#[from] csv::Error),
}

impl MetaDescriptionError {
    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an export error for the given path.
    #[must_use]
    pub fn export(path: impl Into<PathBuf>, source: impl Into<ExportFailure>) -> Self {
        Self::Export {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Returns true if the error was raised while reading configuration.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Serialization(_))
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();

        let kind = match self {
            Self::Config(_) => "ConfigError",
            Self::Export { path, .. } => {
                map.insert("path".to_string(), serde_json::json!(path.display().to_string()));
                "ExportError"
            }
            Self::Serialization(_) => "SerializationError",
        };

        map.insert("type".to_string(), serde_json::json!(kind));
        map.insert("message".to_string(), serde_json::json!(self.to_string()));
        map
    }
}

impl From<serde_json::Error> for MetaDescriptionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Details about a configuration problem, suitable for reporting to the host.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigErrorInfo {
    /// The option that failed validation.
    pub option: String,
    /// What was wrong with it.
    pub summary: String,
    /// Hint for fixing the problem.
    pub fix_hint: Option<String>,
}

impl ConfigErrorInfo {
    /// Creates a new config error info.
    #[must_use]
    pub fn new(option: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            option: option.into(),
            summary: summary.into(),
            fix_hint: None,
        }
    }

    /// Sets the fix hint.
    #[must_use]
    pub fn with_fix_hint(mut self, hint: impl Into<String>) -> Self {
        self.fix_hint = Some(hint.into());
        self
    }
}

impl From<ConfigErrorInfo> for MetaDescriptionError {
    fn from(info: ConfigErrorInfo) -> Self {
        let message = match info.fix_hint {
            Some(hint) => format!("{}: {} ({hint})", info.option, info.summary),
            None => format!("{}: {}", info.option, info.summary),
        };
        Self::Config(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_info_message() {
        let err: MetaDescriptionError = ConfigErrorInfo::new("export_csv", "expected a boolean")
            .with_fix_hint("use `true` or `false`")
            .into();

        assert!(err.is_config());
        assert_eq!(
            err.to_string(),
            "Configuration error: export_csv: expected a boolean (use `true` or `false`)"
        );
    }

    #[test]
    fn test_export_error_to_dict() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = MetaDescriptionError::export("/site/meta-descriptions.csv", io);
        let dict = err.to_dict();

        assert_eq!(dict.get("type").unwrap(), "ExportError");
        assert_eq!(dict.get("path").unwrap(), "/site/meta-descriptions.csv");
        assert!(!err.is_config());
    }

    #[test]
    fn test_serde_error_converts() {
        let parse = serde_json::from_str::<bool>("nope").unwrap_err();
        let err = MetaDescriptionError::from(parse);
        assert!(matches!(err, MetaDescriptionError::Serialization(_)));
    }
}
