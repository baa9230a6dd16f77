//! Error types used throughout the workspace

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for rostering operations
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum RosteringError {
    /// Visit store failure
    #[error("Database error: {0}")]
    Database(String),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Event or argument rejected before touching the store
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unexpected runtime failure, e.g. a panicked blocking task
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RosteringError {
    /// Stable label suitable for structured log fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Database(_) => "database",
            Self::Config(_) => "config",
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for rostering operations
pub type Result<T> = std::result::Result<T, RosteringError>;
