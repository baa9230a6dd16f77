//! Scheduled care visit

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled visit by a caregiver to a patient.
///
/// `caregiver_id` is `None` while the visit is unassigned. Visits are created
/// and rescheduled elsewhere; availability processing only ever clears the
/// caregiver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    /// Visit identifier
    pub id: String,
    /// Care agency the visit belongs to
    pub tenant_id: String,
    /// Patient receiving the visit
    pub patient_id: String,
    /// Assigned caregiver, `None` when unassigned
    #[serde(default)]
    pub caregiver_id: Option<String>,
    /// Inclusive start of the visit
    pub start_time: DateTime<Utc>,
    /// Exclusive end of the visit
    pub end_time: DateTime<Utc>,
}

impl Visit {
    /// Half-open overlap test against `[from, to)`.
    ///
    /// A visit ending exactly at `from`, or starting exactly at `to`, does not
    /// overlap.
    pub fn overlaps(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> bool {
        self.start_time < to && self.end_time > from
    }

    /// Whether the visit is currently assigned to `caregiver_id`.
    pub fn is_assigned_to(&self, caregiver_id: &str) -> bool {
        self.caregiver_id.as_deref() == Some(caregiver_id)
    }

    /// Whether no caregiver is assigned.
    pub fn is_unassigned(&self) -> bool {
        self.caregiver_id.is_none()
    }
}
