//! In-memory visit store
//!
//! Linear scan over an owned list. Visit volumes per tenant are small enough
//! that no index is kept.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use rostering_core::VisitRepository;
use rostering_domain::{Result as DomainResult, Visit};
use tracing::trace;

/// `VisitRepository` backed by a `Vec<Visit>` in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryVisitRepository {
    visits: RwLock<Vec<Visit>>,
}

impl InMemoryVisitRepository {
    /// Create a store holding its own copy of `visits`.
    pub fn new(visits: impl IntoIterator<Item = Visit>) -> Self {
        Self { visits: RwLock::new(visits.into_iter().collect()) }
    }

    /// Number of stored visits, assigned or not.
    pub fn len(&self) -> usize {
        self.visits.read().len()
    }

    /// Whether the store holds no visits.
    pub fn is_empty(&self) -> bool {
        self.visits.read().is_empty()
    }
}

#[async_trait]
impl VisitRepository for InMemoryVisitRepository {
    async fn get_calendar(
        &self,
        caregiver_id: Option<&str>,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<Vec<Visit>> {
        let visits = self.visits.read();

        Ok(visits
            .iter()
            .filter(|visit| match caregiver_id {
                Some(id) => visit.is_assigned_to(id),
                None => true,
            })
            .filter(|visit| visit.overlaps(from, to))
            .cloned()
            .collect())
    }

    async fn unassign(&self, visit_id: &str, caregiver_id: &str) -> DomainResult<()> {
        let mut visits = self.visits.write();

        match visits.iter_mut().find(|v| v.id == visit_id && v.is_assigned_to(caregiver_id)) {
            Some(visit) => visit.caregiver_id = None,
            None => trace!(visit_id, caregiver_id, "unassign matched no visit"),
        }
        Ok(())
    }
}
