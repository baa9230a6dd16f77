//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DB_POOL_SIZE, DEFAULT_LOG_LEVEL, DEFAULT_LOOKAHEAD_MONTHS};
use crate::errors::{Result, RosteringError};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Visit store settings
    pub database: DatabaseConfig,
    /// Event handling policy
    #[serde(default)]
    pub processor: ProcessorConfig,
    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Visit store database configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite database file
    pub path: String,
    /// Maximum pooled connections
    pub pool_size: u32,
}

/// Event processing policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Calendar months past `effective_from` searched for affected visits.
    #[serde(default = "default_lookahead_months")]
    pub lookahead_months: u32,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `rostering_core=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Config {
    /// Reject values that would make the processor misbehave.
    ///
    /// # Errors
    /// Returns `RosteringError::Config` when the pool size or lookahead is zero.
    pub fn validate(&self) -> Result<()> {
        if self.database.pool_size == 0 {
            return Err(RosteringError::Config("database.pool_size must be at least 1".into()));
        }
        if self.processor.lookahead_months == 0 {
            return Err(RosteringError::Config(
                "processor.lookahead_months must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                path: "rostering.db".to_string(),
                pool_size: DEFAULT_DB_POOL_SIZE,
            },
            processor: ProcessorConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self { lookahead_months: DEFAULT_LOOKAHEAD_MONTHS }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), json: false }
    }
}

fn default_lookahead_months() -> u32 {
    DEFAULT_LOOKAHEAD_MONTHS
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}
