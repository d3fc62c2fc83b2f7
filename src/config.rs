//! Configuration management for the travel advisor
//!
//! Handles loading configuration from files and environment variables,
//! and validates every setting before use.

use crate::AdvisorError;
use crate::facts::{Catalog, FactStore, FileFactStore};
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the travel advisor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Destination fact source
    #[serde(default)]
    pub facts: FactsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Default application settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Destination fact source settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FactsConfig {
    /// JSON or XML fact file; the built-in catalog is used when unset
    pub path: Option<String>,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Default application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Maximum number of recommendations to show, 0 for no limit
    #[serde(default)]
    pub max_results: u32,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl AdvisorConfig {
    /// Load configuration from a file, or the default location when `None`,
    /// then layer environment variables on top
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. TRAVEL_ADVISOR_LOGGING__LEVEL=debug
        builder = builder.add_source(
            Environment::with_prefix("TRAVEL_ADVISOR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: AdvisorConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("travel-advisor").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self
            .facts
            .path
            .as_deref()
            .is_some_and(|path| path.trim().is_empty())
        {
            self.facts.path = None;
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.defaults.max_results > 1000 {
            return Err(AdvisorError::config("Maximum results cannot exceed 1000").into());
        }
        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(AdvisorError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(AdvisorError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }

    /// Build the fact store this configuration points at
    #[must_use]
    pub fn fact_store(&self) -> Box<dyn FactStore> {
        match &self.facts.path {
            Some(path) => Box::new(FileFactStore::new(path)),
            None => Box::new(Catalog::builtin()),
        }
    }

    /// Output cap for recommendation lists
    #[must_use]
    pub fn result_limit(&self) -> Option<usize> {
        match self.defaults.max_results {
            0 => None,
            n => Some(n as usize),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::Builder;

    // Serializes tests that read or write TRAVEL_ADVISOR_* variables
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config() {
        let config = AdvisorConfig::default();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.facts.path.is_none());
        assert_eq!(config.result_limit(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = AdvisorConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_invalid_log_format() {
        let mut config = AdvisorConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().unwrap_err().to_string().contains("Invalid log format"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = AdvisorConfig::default();
        config.defaults.max_results = 5000;
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("cannot exceed"));
    }

    #[test]
    fn test_apply_defaults_fills_blanks() {
        let mut config = AdvisorConfig::default();
        config.logging.level = String::new();
        config.facts.path = Some("  ".to_string());
        config.apply_defaults();
        assert_eq!(config.logging.level, "warn");
        assert!(config.facts.path.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            temp_file,
            "[facts]\npath = \"kb.json\"\n\n[logging]\nlevel = \"debug\"\n\n[defaults]\nmax_results = 3"
        )
        .unwrap();

        let config = AdvisorConfig::load_from_path(Some(temp_file.path().to_path_buf())).unwrap();
        assert_eq!(config.facts.path.as_deref(), Some("kb.json"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.result_limit(), Some(3));
    }

    #[test]
    fn test_load_rejects_invalid_file_values() {
        let _guard = ENV_LOCK.lock().unwrap();
        let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(temp_file, "[logging]\nlevel = \"loud\"").unwrap();

        let result = AdvisorConfig::load_from_path(Some(temp_file.path().to_path_buf()));
        assert!(result.is_err());
    }

    #[test]
    fn test_environment_variable_override() {
        let _guard = ENV_LOCK.lock().unwrap();
        let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            temp_file,
            "[logging]\nlevel = \"info\"\n\n[defaults]\nmax_results = 3"
        )
        .unwrap();

        // SAFETY: Test environment, guarded by ENV_LOCK
        unsafe {
            env::set_var("TRAVEL_ADVISOR_LOGGING__LEVEL", "debug");
            env::set_var("TRAVEL_ADVISOR_DEFAULTS__MAX_RESULTS", "7");
            env::set_var("TRAVEL_ADVISOR_FACTS__PATH", "from_env.xml");
        }

        let result = AdvisorConfig::load_from_path(Some(temp_file.path().to_path_buf()));

        // SAFETY: Test cleanup
        unsafe {
            env::remove_var("TRAVEL_ADVISOR_LOGGING__LEVEL");
            env::remove_var("TRAVEL_ADVISOR_DEFAULTS__MAX_RESULTS");
            env::remove_var("TRAVEL_ADVISOR_FACTS__PATH");
        }

        let config = result.unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.result_limit(), Some(7));
        assert_eq!(config.facts.path.as_deref(), Some("from_env.xml"));
    }

    #[test]
    fn test_environment_values_are_validated() {
        let _guard = ENV_LOCK.lock().unwrap();

        // SAFETY: Test environment, guarded by ENV_LOCK
        unsafe {
            env::set_var("TRAVEL_ADVISOR_DEFAULTS__MAX_RESULTS", "5000");
        }

        let missing = PathBuf::from("no_such_travel_advisor_config.toml");
        let result = AdvisorConfig::load_from_path(Some(missing));

        // SAFETY: Test cleanup
        unsafe {
            env::remove_var("TRAVEL_ADVISOR_DEFAULTS__MAX_RESULTS");
        }

        assert!(result.unwrap_err().to_string().contains("cannot exceed"));
    }

    #[test]
    fn test_default_fact_store_is_builtin_catalog() {
        let config = AdvisorConfig::default();
        let destinations = config.fact_store().load_destinations().unwrap();
        assert_eq!(destinations.len(), Catalog::builtin().len());
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = AdvisorConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("travel-advisor"));
            assert!(path.to_string_lossy().contains("config.toml"));
        }
    }
}
