//! Caregiver availability events
//!
//! Events arrive from an external transport; these types are the value
//! contract that transport deserializes into.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A caregiver is permanently unavailable from `effective_from` onwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaregiverPermanentUnavailabilityEvent {
    /// Event identifier
    pub id: String,
    /// Care agency the caregiver belongs to
    pub tenant_id: String,
    /// Caregiver who becomes unavailable
    pub caregiver_id: String,
    /// Instant the unavailability begins
    pub effective_from: DateTime<Utc>,
}

/// A caregiver has booked an absence over `[start_time, end_time)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaregiverAbsenceBookedEvent {
    /// Event identifier
    pub id: String,
    /// Care agency the caregiver belongs to
    pub tenant_id: String,
    /// Caregiver taking the absence
    pub caregiver_id: String,
    /// Inclusive start of the absence
    pub start_time: DateTime<Utc>,
    /// Exclusive end of the absence
    pub end_time: DateTime<Utc>,
}

/// Envelope over every availability event the processor understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AvailabilityEvent {
    /// Caregiver leaves permanently
    #[serde(rename = "caregiver_permanent_unavailability")]
    PermanentUnavailability(CaregiverPermanentUnavailabilityEvent),
    /// Caregiver is away for a bounded window
    #[serde(rename = "caregiver_absence_booked")]
    AbsenceBooked(CaregiverAbsenceBookedEvent),
}

impl AvailabilityEvent {
    /// Identifier of the wrapped event
    pub fn id(&self) -> &str {
        match self {
            Self::PermanentUnavailability(event) => &event.id,
            Self::AbsenceBooked(event) => &event.id,
        }
    }

    /// Tenant of the wrapped event
    pub fn tenant_id(&self) -> &str {
        match self {
            Self::PermanentUnavailability(event) => &event.tenant_id,
            Self::AbsenceBooked(event) => &event.tenant_id,
        }
    }

    /// Caregiver the wrapped event is about
    pub fn caregiver_id(&self) -> &str {
        match self {
            Self::PermanentUnavailability(event) => &event.caregiver_id,
            Self::AbsenceBooked(event) => &event.caregiver_id,
        }
    }

    /// Serde tag of the wrapped event, for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::PermanentUnavailability(_) => crate::constants::EVENT_PERMANENT_UNAVAILABILITY,
            Self::AbsenceBooked(_) => crate::constants::EVENT_ABSENCE_BOOKED,
        }
    }
}

impl From<CaregiverPermanentUnavailabilityEvent> for AvailabilityEvent {
    fn from(event: CaregiverPermanentUnavailabilityEvent) -> Self {
        Self::PermanentUnavailability(event)
    }
}

impl From<CaregiverAbsenceBookedEvent> for AvailabilityEvent {
    fn from(event: CaregiverAbsenceBookedEvent) -> Self {
        Self::AbsenceBooked(event)
    }
}
