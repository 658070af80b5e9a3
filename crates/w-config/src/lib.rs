//! Configuration for the w inspection tooling
//!
//! The export layer itself reads no configuration; this crate only drives
//! the developer CLI and its logging.

pub mod logging;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default configuration file, looked up in the working directory
pub const CONFIG_FILE: &str = "tree-sitter-w.toml";

/// Prefix for environment overrides, e.g. `TREE_SITTER_W_LOGGING__LEVEL=debug`
pub const ENV_PREFIX: &str = "TREE_SITTER_W_";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Log output format
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format for development
    #[default]
    Pretty,
    /// Structured JSON format
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Configuration of the `w-inspect` tool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl InspectConfig {
    /// Load from defaults, `tree-sitter-w.toml` and the environment
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load from defaults, the TOML file at `path` (if present) and the environment.
    ///
    /// Environment variables win over the file, the file over defaults.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        tracing::debug!(path = %path.display(), "Loading configuration");

        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid {
                message: format!(
                    "unknown log level '{}', expected one of {}",
                    self.logging.level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        std::env::remove_var("TREE_SITTER_W_LOGGING__LEVEL");
        std::env::remove_var("TREE_SITTER_W_LOGGING__FORMAT");
    }

    #[test]
    #[serial]
    fn test_defaults_without_file() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let config = InspectConfig::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, InspectConfig::default());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    #[serial]
    fn test_file_overrides_defaults() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let contents = toml::to_string(&InspectConfig {
            logging: LoggingConfig {
                level: "debug".to_string(),
                format: LogFormat::Json,
            },
        })
        .unwrap();
        std::fs::File::create(&path)
            .unwrap()
            .write_all(contents.as_bytes())
            .unwrap();

        let config = InspectConfig::load_from(&path).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[logging]\nlevel = \"info\"\n").unwrap();
        std::env::set_var("TREE_SITTER_W_LOGGING__LEVEL", "trace");

        let config = InspectConfig::load_from(&path).unwrap();
        clear_env();
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    #[serial]
    fn test_unknown_level_is_rejected() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

        let err = InspectConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(err.to_string().contains("loud"));
    }
}
