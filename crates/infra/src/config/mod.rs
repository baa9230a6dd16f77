//! Configuration loading
//!
//! Reads processor configuration from environment variables (optionally via
//! a `.env` file) or from a JSON/TOML file.

pub mod loader;

pub use loader::{load, load_from_env, load_from_file, probe_config_paths};
