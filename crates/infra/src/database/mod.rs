//! SQLite visit store

pub mod manager;
pub mod visit_repository;

pub use manager::*;
pub use visit_repository::*;
