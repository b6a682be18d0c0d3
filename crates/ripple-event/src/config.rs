use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_LABEL: &str = "event";

/// Per-event settings.
///
/// Both fields are optional. `label` names the event in log records and
/// `max_listeners` is a leak threshold: once the listener count goes past it,
/// a single warning is logged for that event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_listeners: Option<usize>,
}

impl EventConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn max_listeners(mut self, max: usize) -> Self {
        self.max_listeners = Some(max);
        self
    }

    /// Parse and validate a TOML document.
    ///
    /// ```toml
    /// label = "window_resized"
    /// max_listeners = 16
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_listeners == Some(0) {
            return Err(ConfigError::InvalidMaxListeners);
        }
        Ok(())
    }

    pub fn label_or_default(&self) -> &str {
        self.label.as_deref().unwrap_or(DEFAULT_LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = EventConfig::default();
        assert!(config.label.is_none());
        assert!(config.max_listeners.is_none());
        assert_eq!(config.label_or_default(), "event");
    }

    #[test]
    fn test_builder() {
        let config = EventConfig::new().label("resize").max_listeners(4);
        assert_eq!(config.label_or_default(), "resize");
        assert_eq!(config.max_listeners, Some(4));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_str() {
        let config = EventConfig::from_toml_str("label = \"saved\"\nmax_listeners = 8\n").unwrap();
        assert_eq!(config.label.as_deref(), Some("saved"));
        assert_eq!(config.max_listeners, Some(8));
    }

    #[test]
    fn test_from_empty_toml_is_default() {
        let config = EventConfig::from_toml_str("").unwrap();
        assert_eq!(config, EventConfig::default());
    }

    #[test]
    fn test_zero_max_listeners_rejected() {
        let err = EventConfig::from_toml_str("max_listeners = 0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMaxListeners));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = EventConfig::from_toml_str("priority = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "label = \"closed\"").unwrap();

        let config = EventConfig::from_file(file.path()).unwrap();
        assert_eq!(config.label_or_default(), "closed");
        assert!(config.max_listeners.is_none());
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = EventConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }
}
