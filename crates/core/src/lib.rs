//! # Rostering Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for visit storage
//! - Availability event handlers
//!
//! ## Architecture Principles
//! - Only depends on `rostering-domain`
//! - No database or transport code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod availability;
pub mod visits;

pub use availability::{AbsenceHandler, AvailabilityEventProcessor, UnavailabilityHandler};
pub use visits::ports::VisitRepository;
