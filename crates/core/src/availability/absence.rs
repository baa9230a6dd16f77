//! Booked absence handler

use std::sync::Arc;

use rostering_domain::{CaregiverAbsenceBookedEvent, Result, RosteringError};
use tracing::{debug, info, instrument, warn};

use crate::visits::ports::VisitRepository;

/// Removes a caregiver from every visit that overlaps a booked absence.
pub struct AbsenceHandler {
    visits: Arc<dyn VisitRepository>,
}

impl AbsenceHandler {
    /// Create a handler over the given visit store
    pub fn new(visits: Arc<dyn VisitRepository>) -> Self {
        Self { visits }
    }

    /// Unassign the caregiver from each visit overlapping
    /// `[event.start_time, event.end_time)`.
    ///
    /// # Errors
    /// `RosteringError::InvalidInput` when the absence does not end after it
    /// starts; otherwise the first visit store error, verbatim.
    #[instrument(
        name = "handle_absence_booked",
        skip_all,
        fields(event_id = %event.id, tenant_id = %event.tenant_id, caregiver_id = %event.caregiver_id)
    )]
    pub async fn handle_event(&self, event: &CaregiverAbsenceBookedEvent) -> Result<()> {
        if event.end_time <= event.start_time {
            warn!(start_time = %event.start_time, end_time = %event.end_time, "empty absence window");
            return Err(RosteringError::InvalidInput(format!(
                "absence {} ends at {} which is not after its start {}",
                event.id, event.end_time, event.start_time
            )));
        }

        let calendar = self
            .visits
            .get_calendar(Some(&event.caregiver_id), event.start_time, event.end_time)
            .await
            .inspect_err(|err| {
                warn!(error = %err, error_kind = err.label(), "calendar query failed");
            })?;

        for visit in &calendar {
            self.visits.unassign(&visit.id, &event.caregiver_id).await.inspect_err(|err| {
                warn!(
                    visit_id = %visit.id,
                    error = %err,
                    error_kind = err.label(),
                    "unassign failed, aborting event"
                );
            })?;
            debug!(visit_id = %visit.id, "visit unassigned");
        }

        info!(
            start_time = %event.start_time,
            end_time = %event.end_time,
            unassigned = calendar.len(),
            "absence processed"
        );

        Ok(())
    }
}
