//! Event dispatch

use std::sync::Arc;

use rostering_domain::{AvailabilityEvent, Result};
use tracing::debug;

use super::absence::AbsenceHandler;
use super::unavailability::UnavailabilityHandler;
use crate::visits::ports::VisitRepository;

/// Routes each availability event to the handler for its kind.
///
/// The delivery transport (queue consumer, HTTP endpoint, ...) owns retries
/// and acknowledgement; this type only applies the decision logic.
pub struct AvailabilityEventProcessor {
    unavailability: UnavailabilityHandler,
    absence: AbsenceHandler,
}

impl AvailabilityEventProcessor {
    /// Create a processor whose handlers share one visit store
    pub fn new(visits: Arc<dyn VisitRepository>) -> Self {
        Self {
            unavailability: UnavailabilityHandler::new(Arc::clone(&visits)),
            absence: AbsenceHandler::new(visits),
        }
    }

    /// Set the permanent-unavailability lookahead in calendar months
    pub fn with_lookahead_months(mut self, months: u32) -> Self {
        self.unavailability = self.unavailability.with_lookahead_months(months);
        self
    }

    /// Handler for permanent unavailability events
    pub fn unavailability(&self) -> &UnavailabilityHandler {
        &self.unavailability
    }

    /// Handler for booked absence events
    pub fn absence(&self) -> &AbsenceHandler {
        &self.absence
    }

    /// Apply a single event.
    ///
    /// # Errors
    /// Propagates the handler's error unchanged.
    pub async fn process(&self, event: &AvailabilityEvent) -> Result<()> {
        debug!(event_id = event.id(), kind = event.kind(), "dispatching availability event");

        match event {
            AvailabilityEvent::PermanentUnavailability(inner) => {
                self.unavailability.handle_event(inner).await
            }
            AvailabilityEvent::AbsenceBooked(inner) => self.absence.handle_event(inner).await,
        }
    }
}
