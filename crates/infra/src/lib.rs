//! # Rostering Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - Visit store adapters (in-memory and SQLite)
//! - Configuration loading
//! - Logging setup
//! - Process wiring ([`ProcessorContext`])
//!
//! ## Architecture
//! - Implements traits defined in `rostering-core`
//! - Depends on `rostering-domain` and `rostering-core`
//! - Contains all "impure" code (I/O, environment, global subscribers)

pub mod config;
pub mod context;
#[cfg(feature = "sqlite")]
pub mod database;
pub mod errors;
pub mod memory;
pub mod observability;

// Re-export commonly used items
pub use context::ProcessorContext;
#[cfg(feature = "sqlite")]
pub use database::{DbManager, SqliteVisitRepository};
pub use errors::InfraError;
pub use memory::InMemoryVisitRepository;
