//! Toggler configuration.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::store::THEME_KEY;
use crate::surface::DEFAULT_DOCUMENT_ATTR;
use crate::theme::TransitionTable;

/// Error returned when a configuration file can't be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The configuration is not valid JSON for [`TogglerConfig`]
    #[error("invalid toggler config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings for a [`ThemeTogglePresenter`](crate::ThemeTogglePresenter) and
/// the [`ThemeToggler`](crate::ThemeToggler) around it.
///
/// Every field has a default, so a config file only needs the fields it
/// changes:
///
/// ```rust
/// use theme_toggler::{TogglerConfig, TransitionTable};
///
/// let config = TogglerConfig::from_json(r#"{ "transitions": "toggle" }"#).unwrap();
/// assert_eq!(config.transitions, TransitionTable::Toggle);
/// assert_eq!(config.storage_key, "theme");
/// assert_eq!(config.document_attribute, "data-theme");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TogglerConfig {
    /// Key the state is persisted under.
    pub storage_key: String,
    /// Activation table.
    pub transitions: TransitionTable,
    /// Document attribute that carries the forced appearance.
    pub document_attribute: String,
}

impl TogglerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            storage_key: THEME_KEY.to_string(),
            transitions: TransitionTable::default(),
            document_attribute: DEFAULT_DOCUMENT_ATTR.to_string(),
        }
    }

    /// Sets the storage key, returning the updated config for chaining.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Sets the activation table.
    pub fn with_transitions(mut self, transitions: TransitionTable) -> Self {
        self.transitions = transitions;
        self
    }

    /// Sets the document attribute name.
    pub fn with_document_attribute(mut self, name: impl Into<String>) -> Self {
        self.document_attribute = name.into();
        self
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

impl Default for TogglerConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = TogglerConfig::default();
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.transitions, TransitionTable::Cyclic);
        assert_eq!(config.document_attribute, "data-theme");
    }

    #[test]
    fn test_builder_chaining() {
        let config = TogglerConfig::new()
            .with_storage_key("site-theme")
            .with_transitions(TransitionTable::Toggle)
            .with_document_attribute("data-color-scheme");

        assert_eq!(config.storage_key, "site-theme");
        assert_eq!(config.transitions, TransitionTable::Toggle);
        assert_eq!(config.document_attribute, "data-color-scheme");
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(TogglerConfig::from_json("{}").unwrap(), TogglerConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = TogglerConfig::from_json(r#"{ "transition": "toggle" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_table_rejected() {
        assert!(TogglerConfig::from_json(r#"{ "transitions": "random" }"#).is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "storage_key": "appearance" }}"#).unwrap();

        let config = TogglerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.storage_key, "appearance");
        assert_eq!(config.transitions, TransitionTable::Cyclic);
    }

    #[test]
    fn test_missing_file_error_names_path() {
        let err = TogglerConfig::from_file("/nonexistent/toggler.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/toggler.json"));
    }
}
