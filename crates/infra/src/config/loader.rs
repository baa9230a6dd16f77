//! Configuration loader
//!
//! ## Loading Strategy
//! 1. Read a `.env` file from the working directory if one exists
//! 2. Attempt to load from environment variables
//! 3. If a required variable is missing, fall back to a config file
//! 4. Probe the standard locations for that file (JSON or TOML)
//!
//! Whatever the source, the result is validated before it is returned.
//!
//! ## Environment Variables
//! - `ROSTERING_DB_PATH`: Visit store database path (required)
//! - `ROSTERING_DB_POOL_SIZE`: Connection pool size (required)
//! - `ROSTERING_LOOKAHEAD_MONTHS`: Unavailability lookahead in months
//! - `ROSTERING_LOG_LEVEL`: Default log filter directive
//! - `ROSTERING_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes, in order: `config.{json,toml}` and
//! `rostering.{json,toml}` in the working directory, then `config.{json,toml}`
//! one and two levels up, then the same set relative to the executable.

use std::path::{Path, PathBuf};

use rostering_domain::constants::{DEFAULT_LOG_LEVEL, DEFAULT_LOOKAHEAD_MONTHS};
use rostering_domain::{Config, DatabaseConfig, LoggingConfig, ProcessorConfig, Result, RosteringError};

/// Visit store database path
pub const ENV_DB_PATH: &str = "ROSTERING_DB_PATH";
/// Connection pool size
pub const ENV_DB_POOL_SIZE: &str = "ROSTERING_DB_POOL_SIZE";
/// Unavailability lookahead in calendar months
pub const ENV_LOOKAHEAD_MONTHS: &str = "ROSTERING_LOOKAHEAD_MONTHS";
/// Default log filter directive
pub const ENV_LOG_LEVEL: &str = "ROSTERING_LOG_LEVEL";
/// JSON log output toggle
pub const ENV_LOG_JSON: &str = "ROSTERING_LOG_JSON";

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `RosteringError::Config` if neither source yields a valid
/// configuration.
pub fn load() -> Result<Config> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "loaded .env file");
    }

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `ROSTERING_DB_PATH` and `ROSTERING_DB_POOL_SIZE` must be present; the
/// remaining variables fall back to their defaults.
///
/// # Errors
/// Returns `RosteringError::Config` if required variables are missing or any
/// value is invalid.
pub fn load_from_env() -> Result<Config> {
    let db_path = env_var(ENV_DB_PATH)?;
    let pool_size = env_var(ENV_DB_POOL_SIZE).and_then(|s| parse_number(ENV_DB_POOL_SIZE, &s))?;

    let lookahead_months = match std::env::var(ENV_LOOKAHEAD_MONTHS) {
        Ok(s) => parse_number(ENV_LOOKAHEAD_MONTHS, &s)?,
        Err(_) => DEFAULT_LOOKAHEAD_MONTHS,
    };
    let level = std::env::var(ENV_LOG_LEVEL).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    let json = env_bool(ENV_LOG_JSON, false);

    let config = Config {
        database: DatabaseConfig { path: db_path, pool_size },
        processor: ProcessorConfig { lookahead_months },
        logging: LoggingConfig { level, json },
    };
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations via
/// [`probe_config_paths`]. Format is chosen by file extension.
///
/// # Errors
/// Returns `RosteringError::Config` if the file is missing, unreadable,
/// malformed or fails validation.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(RosteringError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            RosteringError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| RosteringError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| RosteringError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| RosteringError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(RosteringError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("rostering.json"),
        dir.join("rostering.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
        dir.join("../../config.json"),
        dir.join("../../config.toml"),
    ]
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        RosteringError::Config(format!("Missing required environment variable: {}", key))
    })
}

fn parse_number(key: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|e| RosteringError::Config(format!("Invalid value for {}: {}", key, e)))
}

/// Parse boolean from environment variable
///
/// Accepts `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive).
/// Unset variables yield `default`.
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
