//! Domain types and models

pub mod events;
pub mod visit;

pub use events::{
    AvailabilityEvent, CaregiverAbsenceBookedEvent, CaregiverPermanentUnavailabilityEvent,
};
pub use visit::Visit;
