//! Translator configuration.
//!
//! Configuration is an explicit value handed to the engine for each run.
//! It can be loaded from a YAML file:
//!
//! ```yaml
//! keep_comments: true
//! use_pointer_receivers: true
//! capitalize_exported_fields: false
//! rewrite_library_calls: true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file names searched in the current directory.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["java2go.yaml", ".java2go.yaml"];

/// Errors from loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {path}: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Options read once at the start of a translation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Keep Java comments in bodies and emit explanatory comments.
    pub keep_comments: bool,
    /// Emit pointer receivers and a pointer-returning constructor.
    pub use_pointer_receivers: bool,
    /// Capitalize field names so they are exported in Go.
    pub capitalize_exported_fields: bool,
    /// Rewrite common Java library calls (`equals`, `length`, `parseInt`, ...).
    pub rewrite_library_calls: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            keep_comments: true,
            use_pointer_receivers: true,
            capitalize_exported_fields: true,
            rewrite_library_calls: false,
        }
    }
}

impl TranslatorConfig {
    /// Parse a configuration from a YAML file. Missing keys take defaults.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.display().to_string(),
            source,
        })
    }

    /// Parse a configuration from YAML text. Empty text gives the defaults.
    pub fn parse_str(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

/// Find a config file in `dir`.
pub fn discover(dir: &Path) -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = TranslatorConfig::default();
        assert!(config.keep_comments);
        assert!(config.use_pointer_receivers);
        assert!(config.capitalize_exported_fields);
        assert!(!config.rewrite_library_calls);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = TranslatorConfig::parse_str("capitalize_exported_fields: false\n").unwrap();
        assert!(!config.capitalize_exported_fields);
        assert!(config.keep_comments);
        assert_eq!(TranslatorConfig::parse_str("").unwrap(), TranslatorConfig::default());
    }

    #[test]
    fn test_parse_file_and_discover() {
        let temp = TempDir::new().unwrap();
        assert!(discover(temp.path()).is_none());

        let path = temp.path().join("java2go.yaml");
        std::fs::write(&path, "keep_comments: false\nrewrite_library_calls: true\n").unwrap();
        assert_eq!(discover(temp.path()), Some(path.clone()));

        let config = TranslatorConfig::parse_file(&path).unwrap();
        assert!(!config.keep_comments);
        assert!(config.rewrite_library_calls);
    }

    #[test]
    fn test_bad_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("java2go.yaml");
        std::fs::write(&path, "keep_comments: [not, a, bool]\n").unwrap();
        let err = TranslatorConfig::parse_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));

        let missing = TranslatorConfig::parse_file(temp.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));
    }
}
