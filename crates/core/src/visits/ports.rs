//! Port interfaces for visit storage
//!
//! These traits define the boundary between availability processing and
//! whatever backend holds the visit calendar.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rostering_domain::{Result, Visit};

/// Calendar access required by the availability handlers.
///
/// Implementations own the visit records; callers only ever see copies.
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Visits overlapping `[from, to)`, in the store's iteration order.
    ///
    /// Overlap is half-open on both sides: `visit.start_time < to` and
    /// `visit.end_time > from`. When `caregiver_id` is `Some`, only visits
    /// currently assigned to that caregiver are returned; `None` returns
    /// every visit in range, assigned or not.
    async fn get_calendar(
        &self,
        caregiver_id: Option<&str>,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Visit>>;

    /// Clear the caregiver on `visit_id` if, and only if, it is currently
    /// assigned to `caregiver_id`.
    ///
    /// An unknown visit or a visit held by someone else is a successful no-op,
    /// which makes the call idempotent.
    async fn unassign(&self, visit_id: &str, caregiver_id: &str) -> Result<()>;
}
