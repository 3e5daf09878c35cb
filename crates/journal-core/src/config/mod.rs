//! Journal configuration.
//!
//! A small JSON file controlling how entry dates are rendered and the order
//! a front end sorts by when none is asked for. Every field is optional; a missing
//! file means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{is_valid_date_format, SortOrder, DEFAULT_DATE_FORMAT};

const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable naming an explicit config file
pub const ENV_CONFIG_PATH: &str = "JOURNAL_CONFIG";

/// Runtime configuration shared by Journal front ends
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct JournalConfig {
    /// strftime pattern for entry dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Order used when a sort names no direction
    #[serde(default)]
    pub default_sort: SortOrder,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            default_sort: SortOrder::default(),
        }
    }
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

/// Platform config location, e.g. `~/.config/journal/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("journal").join(CONFIG_FILE_NAME))
}

impl JournalConfig {
    /// Load from `explicit`, then `$JOURNAL_CONFIG`, then the platform path.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        if let Some(path) = std::env::var_os(ENV_CONFIG_PATH).map(PathBuf::from) {
            return Self::load_from_path(&path);
        }

        match default_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from a specific file; a missing file yields defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file; using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config = Self::parse(&raw).map_err(|error| {
            Error::Config(format!("Failed to parse config at {}: {error}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parse and validate a JSON payload.
    pub fn parse(payload: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(payload)?;
        config.validate()
    }

    /// Reject date formats that do not render and parse back.
    pub fn validate(self) -> Result<Self> {
        if !is_valid_date_format(&self.date_format) {
            return Err(Error::Config(format!(
                "invalid date_format '{}'",
                self.date_format
            )));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = JournalConfig::parse("{}").unwrap();
        assert_eq!(config, JournalConfig::default());
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn parses_all_fields() {
        let config = JournalConfig::parse(
            r#"{ "date_format": "%Y-%m-%d %H:%M", "default_sort": "oldest_first" }"#,
        )
        .unwrap();
        assert_eq!(config.date_format, "%Y-%m-%d %H:%M");
        assert_eq!(config.default_sort, SortOrder::OldestFirst);
    }

    #[test]
    fn rejects_unknown_fields() {
        let error = JournalConfig::parse(r#"{ "theme": "dark" }"#).unwrap_err();
        assert!(error.to_string().contains("unknown field"));
    }

    #[test]
    fn rejects_invalid_date_format() {
        let error = JournalConfig::parse(r#"{ "date_format": "%Q" }"#).unwrap_err();
        assert!(matches!(error, Error::Config(_)));
    }

    #[test]
    fn rejects_zone_date_format() {
        let error =
            JournalConfig::parse(r#"{ "date_format": "%Y-%m-%d %H:%M %z" }"#).unwrap_err();
        assert!(error.to_string().contains("%z"));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = JournalConfig::load_from_path(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, JournalConfig::default());
    }

    #[test]
    fn load_prefers_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let config = JournalConfig {
            date_format: "%d/%m/%Y %H:%M".to_string(),
            default_sort: SortOrder::OldestFirst,
        };

        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        assert_eq!(JournalConfig::load(Some(&path)).unwrap(), config);
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{ not json").unwrap();

        let error = JournalConfig::load_from_path(&path).unwrap_err();
        assert!(error.to_string().contains(CONFIG_FILE_NAME));
    }
}
