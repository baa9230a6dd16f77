//! Shared test helpers for `rostering-core` integration tests.
//!
//! Each test binary pulls in the whole module, so not every helper is used
//! everywhere.
#![allow(dead_code)]

pub mod repositories;

use chrono::{DateTime, TimeZone, Utc};
use rostering_domain::Visit;

pub const TENANT: &str = "tenant-1";
pub const CAREGIVER: &str = "caregiver-1";
pub const OTHER_CAREGIVER: &str = "caregiver-2";

/// UTC timestamp shorthand.
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).single().expect("valid timestamp")
}

/// Visit assigned to `caregiver` over `[start, end)`.
pub fn visit(
    id: &str,
    caregiver: Option<&str>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Visit {
    Visit {
        id: id.to_string(),
        tenant_id: TENANT.to_string(),
        patient_id: format!("patient-{id}"),
        caregiver_id: caregiver.map(str::to_string),
        start_time: start,
        end_time: end,
    }
}
