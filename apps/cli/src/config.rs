//! # Shell Configuration
//!
//! Where the database lives and how to open it.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line flags (highest priority)                              │
//! │     --database-url sqlite://house.db   --no-init-schema                │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     ROOMMATES_DATABASE_URL=sqlite://house.db?mode=rwc                  │
//! │     ROOMMATES_BUSY_TIMEOUT_SECS=5                                      │
//! │     ROOMMATES_INIT_SCHEMA=false                                        │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <FILE>, else the platform config dir:                     │
//! │     ~/.config/roommates/roommates.toml (Linux)                         │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     sqlite://roommates.db?mode=rwc                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Loaded once at startup and passed by value into the database layer.
//! Nothing is re-read while the shell runs.
//!
//! ## Configuration File Format
//! ```toml
//! [database]
//! connection_string = "sqlite://roommates.db?mode=rwc"
//! busy_timeout_secs = 5
//! init_schema = true
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use roommates_db::DbConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ConfigError;

/// Connection string used when nothing else is configured.
pub const DEFAULT_CONNECTION_STRING: &str = "sqlite://roommates.db?mode=rwc";

// =============================================================================
// Database Settings
// =============================================================================

/// `[database]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// sqlx connection string.
    #[serde(default = "default_connection_string")]
    pub connection_string: String,

    /// Seconds a statement waits on a locked database file.
    #[serde(default = "default_busy_timeout")]
    pub busy_timeout_secs: u64,

    /// Create missing tables at startup.
    #[serde(default = "default_true")]
    pub init_schema: bool,
}

fn default_connection_string() -> String {
    DEFAULT_CONNECTION_STRING.to_string()
}

fn default_busy_timeout() -> u64 {
    5
}

fn default_true() -> bool {
    true
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        DatabaseSettings {
            connection_string: default_connection_string(),
            busy_timeout_secs: default_busy_timeout(),
            init_schema: true,
        }
    }
}

// =============================================================================
// Shell Config
// =============================================================================

/// Complete shell configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub database: DatabaseSettings,
}

impl ShellConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (roommates.toml)
    /// 3. Environment variables
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Reads a TOML file, falling back to defaults when it doesn't exist.
    ///
    /// Environment variables are not consulted.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies `ROOMMATES_*` environment variables.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup.
    ///
    /// Unparseable numbers and booleans are ignored with a warning.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("ROOMMATES_DATABASE_URL") {
            debug!(url = %url, "Overriding connection string from environment");
            self.database.connection_string = url;
        }

        if let Some(secs) = lookup("ROOMMATES_BUSY_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(s) => self.database.busy_timeout_secs = s,
                Err(_) => warn!(value = %secs, "Ignoring ROOMMATES_BUSY_TIMEOUT_SECS"),
            }
        }

        if let Some(flag) = lookup("ROOMMATES_INIT_SCHEMA") {
            match flag.to_lowercase().as_str() {
                "1" | "true" | "yes" => self.database.init_schema = true,
                "0" | "false" | "no" => self.database.init_schema = false,
                _ => warn!(value = %flag, "Ignoring ROOMMATES_INIT_SCHEMA"),
            }
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.database.connection_string.trim();

        if url.is_empty() {
            return Err(ConfigError::Invalid(
                "connection_string must not be empty".into(),
            ));
        }

        if !url.starts_with("sqlite:") {
            return Err(ConfigError::Invalid(format!(
                "connection_string must start with sqlite:, got: {}",
                url
            )));
        }

        // Every call opens a new connection, which would see a new empty database
        if url.contains(":memory:") || url.contains("mode=memory") {
            return Err(ConfigError::Invalid(format!(
                "connection_string must name a database file, got in-memory: {}",
                url
            )));
        }

        Ok(())
    }

    /// Builds the database layer's configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(self.database.connection_string.trim())
            .busy_timeout(Duration::from_secs(self.database.busy_timeout_secs))
            .run_migrations(self.database.init_schema)
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "roommates")
            .map(|dirs| dirs.config_dir().join("roommates.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();
        assert_eq!(config.database.connection_string, DEFAULT_CONNECTION_STRING);
        assert_eq!(config.database.busy_timeout_secs, 5);
        assert!(config.database.init_schema);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roommates.toml");
        std::fs::write(
            &path,
            "[database]\nconnection_string = \"sqlite://house.db\"\ninit_schema = false\n",
        )
        .unwrap();

        let config = ShellConfig::from_file(&path).unwrap();

        assert_eq!(config.database.connection_string, "sqlite://house.db");
        assert!(!config.database.init_schema);
        // Filled from defaults
        assert_eq!(config.database.busy_timeout_secs, 5);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShellConfig::from_file(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roommates.toml");
        std::fs::write(&path, "[database\nconnection_string = ").unwrap();

        assert!(matches!(
            ShellConfig::from_file(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let mut config = ShellConfig::default();
        config.apply_overrides(env(&[
            ("ROOMMATES_DATABASE_URL", "sqlite://other.db"),
            ("ROOMMATES_BUSY_TIMEOUT_SECS", "9"),
            ("ROOMMATES_INIT_SCHEMA", "no"),
        ]));

        assert_eq!(config.database.connection_string, "sqlite://other.db");
        assert_eq!(config.database.busy_timeout_secs, 9);
        assert!(!config.database.init_schema);
    }

    #[test]
    fn test_bad_override_values_ignored() {
        let mut config = ShellConfig::default();
        config.apply_overrides(env(&[
            ("ROOMMATES_BUSY_TIMEOUT_SECS", "soon"),
            ("ROOMMATES_INIT_SCHEMA", "maybe"),
        ]));

        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_validation() {
        let mut config = ShellConfig::default();

        config.database.connection_string = "  ".to_string();
        assert!(config.validate().is_err());

        config.database.connection_string = "server=localhost;database=Roommates".to_string();
        assert!(config.validate().is_err());

        config.database.connection_string = "sqlite::memory:".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.database.connection_string = "sqlite://house.db?mode=memory".to_string();
        assert!(config.validate().is_err());

        config.database.connection_string = "sqlite://house.db?mode=rwc".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_db_config() {
        let mut config = ShellConfig::default();
        config.database.busy_timeout_secs = 2;
        config.database.init_schema = false;

        let db = config.db_config();
        assert_eq!(db.connection_string, DEFAULT_CONNECTION_STRING);
        assert_eq!(db.busy_timeout, Duration::from_secs(2));
        assert!(!db.run_migrations);
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&ShellConfig::default()).unwrap();
        assert!(toml_str.contains("[database]"));
        assert!(toml_str.contains("connection_string"));
    }
}
