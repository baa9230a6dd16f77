//! Shared fixtures for infra integration tests.
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use rostering_domain::Visit;
use rostering_infra::database::{DbManager, SqliteVisitRepository};
use tempfile::TempDir;

pub const TENANT: &str = "tenant-1";
pub const CAREGIVER: &str = "caregiver-1";
pub const OTHER_CAREGIVER: &str = "caregiver-2";

/// Temporary database wrapper that keeps the underlying file alive for the
/// duration of a test run.
pub struct TestDatabase {
    pub manager: Arc<DbManager>,
    temp_dir: TempDir,
}

impl TestDatabase {
    /// Create a migrated database in a fresh temp directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let db_path = temp_dir.path().join("visits.db");

        let manager = DbManager::new(&db_path, 4).expect("db manager should be created");
        manager.run_migrations().expect("migrations should run");

        Self { manager: Arc::new(manager), temp_dir }
    }

    pub fn repository(&self) -> SqliteVisitRepository {
        SqliteVisitRepository::new(Arc::clone(&self.manager))
    }

    pub fn path(&self) -> PathBuf {
        self.temp_dir.path().join("visits.db")
    }
}

impl Default for TestDatabase {
    fn default() -> Self {
        Self::new()
    }
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

pub fn visit(id: &str, caregiver: Option<&str>, start: DateTime<Utc>, end: DateTime<Utc>) -> Visit {
    Visit {
        id: id.to_string(),
        tenant_id: TENANT.to_string(),
        patient_id: format!("patient-{id}"),
        caregiver_id: caregiver.map(str::to_string),
        start_time: start,
        end_time: end,
    }
}

pub fn ids(visits: &[Visit]) -> Vec<&str> {
    visits.iter().map(|v| v.id.as_str()).collect()
}
