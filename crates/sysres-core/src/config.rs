// Rust guideline compliant 2026-10-18

//! Configuration management for sysres.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::Level;

/// Configuration for a resolve run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Number of sample display names listed per collection on failure.
    #[serde(default = "default_max_display")]
    pub max_display: usize,

    /// Minimum level of diagnostic log output.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Default number of sample display names.
fn default_max_display() -> usize {
    10
}

/// Default log level.
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_display: default_max_display(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from an optional file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file, when a path is given
    /// 3. Environment variables with `SYSRES_` prefix
    ///
    /// # Arguments
    ///
    /// * `path` - Optional path to a TOML configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The given configuration file cannot be read
    /// - The configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    Error::InvalidConfig(format!("cannot read {}: {}", path.display(), e))
                })?;
                Self::from_toml(&content)?
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this structure.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::InvalidConfig(format!("invalid config file: {}", e)))
    }

    /// Applies `SYSRES_*` overrides read through `lookup`.
    ///
    /// Supported variables:
    /// - `SYSRES_MAX_DISPLAY` - Sample size for the failure listing
    /// - `SYSRES_LOG_LEVEL` - Log level (error/warn/info/debug/trace)
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unparsable value.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("SYSRES_MAX_DISPLAY") {
            self.max_display = val.parse().map_err(|_| {
                Error::InvalidConfig("SYSRES_MAX_DISPLAY must be a positive number".to_string())
            })?;
        }

        if let Some(val) = lookup("SYSRES_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - max_display is zero
    /// - log_level is not a known level
    pub fn validate(&self) -> Result<()> {
        if self.max_display == 0 {
            return Err(Error::InvalidConfig(
                "max_display must be greater than 0".to_string(),
            ));
        }

        self.level()?;

        Ok(())
    }

    /// Parses `log_level` into a tracing level.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not a tracing level.
    pub fn level(&self) -> Result<Level> {
        self.log_level.parse().map_err(|_| {
            Error::InvalidConfig(format!(
                "log_level must be error, warn, info, debug or trace, got {}",
                self.log_level
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.max_display, 10);
        assert_eq!(config.log_level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_toml_partial() {
        let config = Config::from_toml("max_display = 3\n").unwrap();
        assert_eq!(config.max_display, 3);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_config_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sysres.toml");
        std::fs::write(&path, "max_display = 5\nlog_level = \"debug\"\n").unwrap();

        let mut config = Config::from_toml(&std::fs::read_to_string(&path).unwrap()).unwrap();
        config.apply_overrides(|_| None).unwrap();
        assert_eq!(config.max_display, 5);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_config_load_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load(Some(&temp_dir.path().join("absent.toml")));
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_config_invalid_toml() {
        let result = Config::from_toml("max_display = \"many\"");
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(lookup_from(&[
                ("SYSRES_MAX_DISPLAY", "25"),
                ("SYSRES_LOG_LEVEL", "INFO"),
            ]))
            .unwrap();
        assert_eq!(config.max_display, 25);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_env_override_invalid_number() {
        let mut config = Config::default();
        let result = config.apply_overrides(lookup_from(&[("SYSRES_MAX_DISPLAY", "ten")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_level_parses_configured_name() {
        let config = Config {
            log_level: "debug".to_string(),
            ..Config::default()
        };
        assert_eq!(config.level().unwrap(), Level::DEBUG);
        assert_eq!(Config::default().level().unwrap(), Level::WARN);
    }

    #[test]
    fn test_validate_rejects_zero_and_unknown_level() {
        let config = Config {
            max_display: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            log_level: "verbose".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
