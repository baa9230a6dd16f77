//! Mock visit repository for handler tests
//!
//! Mirrors the reference in-memory store semantics and additionally records
//! every call and can be told to fail, so tests can assert on fail-fast
//! behaviour and on exactly which visits were targeted.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rostering_core::VisitRepository;
use rostering_domain::{Result as DomainResult, RosteringError, Visit};

/// A call observed by [`MockVisitRepository`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryCall {
    GetCalendar { caregiver_id: Option<String>, from: DateTime<Utc>, to: DateTime<Utc> },
    Unassign { visit_id: String, caregiver_id: String },
}

#[derive(Default)]
struct State {
    visits: Vec<Visit>,
    calls: Vec<RepositoryCall>,
    calendar_error: Option<RosteringError>,
    /// Number of unassigns allowed to succeed before `unassign_error` fires.
    unassign_budget: Option<usize>,
    unassign_error: Option<RosteringError>,
}

/// In-memory mock for `VisitRepository`.
#[derive(Default, Clone)]
pub struct MockVisitRepository {
    state: Arc<Mutex<State>>,
}

impl MockVisitRepository {
    /// Create a new mock seeded with the provided visits.
    pub fn new(visits: Vec<Visit>) -> Self {
        Self { state: Arc::new(Mutex::new(State { visits, ..State::default() })) }
    }

    /// Make every calendar query fail with `error`.
    pub fn failing_calendar(self, error: RosteringError) -> Self {
        self.state.lock().unwrap().calendar_error = Some(error);
        self
    }

    /// Let `succeed` unassign calls through, then fail every later one.
    pub fn failing_unassign_after(self, succeed: usize, error: RosteringError) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.unassign_budget = Some(succeed);
            state.unassign_error = Some(error);
        }
        self
    }

    /// Snapshot of the stored visits, in insertion order.
    pub fn visits(&self) -> Vec<Visit> {
        self.state.lock().unwrap().visits.clone()
    }

    pub fn visit(&self, id: &str) -> Visit {
        self.visits().into_iter().find(|v| v.id == id).expect("visit exists")
    }

    pub fn calls(&self) -> Vec<RepositoryCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Visit ids passed to `unassign`, in call order.
    pub fn unassigned_ids(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RepositoryCall::Unassign { visit_id, .. } => Some(visit_id),
                RepositoryCall::GetCalendar { .. } => None,
            })
            .collect()
    }
}

#[async_trait]
impl VisitRepository for MockVisitRepository {
    async fn get_calendar(
        &self,
        caregiver_id: Option<&str>,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<Vec<Visit>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(RepositoryCall::GetCalendar {
            caregiver_id: caregiver_id.map(str::to_string),
            from,
            to,
        });

        if let Some(err) = state.calendar_error.clone() {
            return Err(err);
        }

        Ok(state
            .visits
            .iter()
            .filter(|v| match caregiver_id {
                Some(id) => v.is_assigned_to(id),
                None => true,
            })
            .filter(|v| v.overlaps(from, to))
            .cloned()
            .collect())
    }

    async fn unassign(&self, visit_id: &str, caregiver_id: &str) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(RepositoryCall::Unassign {
            visit_id: visit_id.to_string(),
            caregiver_id: caregiver_id.to_string(),
        });

        if let Some(budget) = state.unassign_budget {
            if budget == 0 {
                return Err(state.unassign_error.clone().expect("error configured with budget"));
            }
            state.unassign_budget = Some(budget - 1);
        }

        if let Some(v) =
            state.visits.iter_mut().find(|v| v.id == visit_id && v.is_assigned_to(caregiver_id))
        {
            v.caregiver_id = None;
        }
        Ok(())
    }
}
