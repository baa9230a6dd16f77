//! Domain constants
//!
//! Centralized location for policy values shared across the workspace.

/// Months past `effective_from` that a permanent unavailability looks ahead.
///
/// Any horizon at least as far as the farthest scheduled visit is correct; one
/// year covers every realistic rota.
pub const DEFAULT_LOOKAHEAD_MONTHS: u32 = 12;

/// Default connection pool size for the SQLite visit store.
pub const DEFAULT_DB_POOL_SIZE: u32 = 4;

/// Default log filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Serde tag for [`crate::AvailabilityEvent::PermanentUnavailability`].
pub const EVENT_PERMANENT_UNAVAILABILITY: &str = "caregiver_permanent_unavailability";

/// Serde tag for [`crate::AvailabilityEvent::AbsenceBooked`].
pub const EVENT_ABSENCE_BOOKED: &str = "caregiver_absence_booked";
