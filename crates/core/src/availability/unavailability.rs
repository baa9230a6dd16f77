//! Permanent unavailability handler

use std::sync::Arc;

use chrono::{DateTime, Months, Utc};
use rostering_domain::constants::DEFAULT_LOOKAHEAD_MONTHS;
use rostering_domain::{CaregiverPermanentUnavailabilityEvent, Result};
use tracing::{debug, info, instrument, warn};

use crate::visits::ports::VisitRepository;

/// Removes a caregiver from every visit starting at or after the moment they
/// become permanently unavailable.
pub struct UnavailabilityHandler {
    visits: Arc<dyn VisitRepository>,
    lookahead: Months,
}

impl UnavailabilityHandler {
    /// Create a handler with the default one-year lookahead
    pub fn new(visits: Arc<dyn VisitRepository>) -> Self {
        Self { visits, lookahead: Months::new(DEFAULT_LOOKAHEAD_MONTHS) }
    }

    /// Override how many calendar months past `effective_from` are searched.
    ///
    /// Values below one month are raised to one.
    pub fn with_lookahead_months(mut self, months: u32) -> Self {
        self.lookahead = Months::new(months.max(1));
        self
    }

    /// Upper bound of the calendar query for an event effective at
    /// `effective_from`. Saturates at the latest representable instant.
    pub fn horizon(&self, effective_from: DateTime<Utc>) -> DateTime<Utc> {
        effective_from.checked_add_months(self.lookahead).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Unassign the caregiver from all of their visits that start at or after
    /// `event.effective_from`.
    ///
    /// Visits that ended at or before `effective_from` never leave the
    /// calendar query. Visits that started earlier but are still running at
    /// `effective_from` are returned by the query and deliberately kept.
    ///
    /// # Errors
    /// Returns the first error raised by the visit store, verbatim. Visits
    /// unassigned before the failure remain unassigned.
    #[instrument(
        name = "handle_permanent_unavailability",
        skip_all,
        fields(event_id = %event.id, tenant_id = %event.tenant_id, caregiver_id = %event.caregiver_id)
    )]
    pub async fn handle_event(&self, event: &CaregiverPermanentUnavailabilityEvent) -> Result<()> {
        let horizon = self.horizon(event.effective_from);

        let calendar = self
            .visits
            .get_calendar(Some(&event.caregiver_id), event.effective_from, horizon)
            .await
            .inspect_err(|err| {
                warn!(error = %err, error_kind = err.label(), "calendar query failed");
            })?;

        let matched = calendar.len();
        let mut unassigned = 0_usize;

        for visit in calendar.iter().filter(|visit| visit.start_time >= event.effective_from) {
            self.visits.unassign(&visit.id, &event.caregiver_id).await.inspect_err(|err| {
                warn!(
                    visit_id = %visit.id,
                    unassigned,
                    error = %err,
                    error_kind = err.label(),
                    "unassign failed, aborting event"
                );
            })?;
            unassigned += 1;
            debug!(visit_id = %visit.id, start_time = %visit.start_time, "visit unassigned");
        }

        info!(
            effective_from = %event.effective_from,
            %horizon,
            matched,
            unassigned,
            "permanent unavailability processed"
        );

        Ok(())
    }
}
