//! Availability event handling
//!
//! Each handler is stateless per invocation: it reads the caregiver's
//! calendar once, then unassigns matching visits one by one. The first store
//! error aborts the event and is returned unchanged; unassignments already
//! applied stay applied, and redelivering the event is safe.

pub mod absence;
pub mod processor;
pub mod unavailability;

pub use absence::AbsenceHandler;
pub use processor::AvailabilityEventProcessor;
pub use unavailability::UnavailabilityHandler;
