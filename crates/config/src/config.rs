//! Configuration management
//!
//! This module handles loading kiln configuration from `kiln.toml`.
//!
//! ```toml
//! [hooks]
//! render = true
//!
//! [interpreters]
//! python = "python3.12"
//! ```

use crate::Result;
use kiln_core::Error;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Hook behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HooksConfig {
    /// Render hook scripts through the template engine before running them
    pub render: bool,
}

impl Default for HooksConfig {
    fn default() -> Self {
        Self { render: true }
    }
}

/// Interpreter overrides per script kind
///
/// Unset entries keep the built-in default (`python3`, `sh`, `bash`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpreterConfig {
    /// Interpreter for `.py` hooks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python: Option<String>,

    /// Interpreter for `.sh` hooks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,

    /// Interpreter for `.bash` hooks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bash: Option<String>,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Hook behaviour
    #[serde(default)]
    pub hooks: HooksConfig,

    /// Interpreter overrides
    #[serde(default)]
    pub interpreters: InterpreterConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid configuration
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        toml::from_str(&content).map_err(|e| {
            Error::Config(format!("Failed to parse config file {}: {e}", path.display()))
        })
    }

    /// Load configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid configuration
    pub fn from_toml_str(toml_content: &str) -> Result<Self> {
        toml::from_str(toml_content)
            .map_err(|e| Error::Config(format!("Failed to parse configuration: {e}")))
    }

    /// Load the configuration kiln should run with
    ///
    /// An explicitly requested file must exist. Without one, the default
    /// location is used when present and built-in defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing, or if the selected
    /// file cannot be parsed
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match crate::dirs::default_config_file() {
            Some(path) if path.is_file() => {
                tracing::debug!("Loading config from {}", path.display());
                Self::load(path)
            }
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_renders_hooks() {
        let config = Config::default();

        assert!(config.hooks.render);
        assert_eq!(config.interpreters, InterpreterConfig::default());
    }

    #[test]
    fn test_empty_string_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_from_toml_str() {
        let config = Config::from_toml_str(
            r#"
[hooks]
render = false

[interpreters]
python = "python3.12"
"#,
        )
        .unwrap();

        assert!(!config.hooks.render);
        assert_eq!(config.interpreters.python.as_deref(), Some("python3.12"));
        assert_eq!(config.interpreters.shell, None);
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml_str("[hooks]\nrender = \"maybe\"").unwrap_err();

        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("kiln.toml");
        fs::write(&path, "[interpreters]\nshell = \"dash\"\n").unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.interpreters.shell.as_deref(), Some("dash"));
        assert!(config.hooks.render);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let temp = TempDir::new().unwrap();

        let err = Config::load_or_default(Some(&temp.path().join("missing.toml"))).unwrap_err();

        assert!(err.to_string().contains("missing.toml"));
    }
}
