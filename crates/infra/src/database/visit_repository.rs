//! Visit repository implementation using SQLite
//!
//! Instants are stored as UTC seconds plus nanosecond-of-second so they round
//! trip exactly. The overlap predicate compares `(secs, nanos)` row values
//! inside SQLite.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rostering_core::VisitRepository as VisitRepositoryPort;
use rostering_domain::{Result as DomainResult, RosteringError, Visit};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tokio::task;
use tracing::trace;

use super::manager::{map_sql_error, DbManager};
use crate::errors::InfraError;

const SELECT_COLUMNS: &str = "SELECT id, tenant_id, patient_id, caregiver_id, start_secs, start_nanos, end_secs, end_nanos FROM visits";
const OVERLAP_PREDICATE: &str = "(start_secs, start_nanos) < (?1, ?2) AND (end_secs, end_nanos) > (?3, ?4)";

/// SQLite-backed implementation of `VisitRepository`
pub struct SqliteVisitRepository {
    db: Arc<DbManager>,
}

impl SqliteVisitRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    /// Insert a single visit. Fails with a database error if the id is taken.
    pub async fn insert_visit(&self, visit: Visit) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            insert_visit_row(&conn, &visit).map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    /// Insert a batch of visits in one transaction, preserving their order.
    pub async fn insert_visits(&self, visits: Vec<Visit>) -> DomainResult<usize> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<usize> {
            let mut conn = db.get_connection()?;
            let tx = conn.transaction().map_err(map_sql_error)?;
            for visit in &visits {
                insert_visit_row(&tx, visit).map_err(map_sql_error)?;
            }
            tx.commit().map_err(map_sql_error)?;
            Ok(visits.len())
        })
        .await
        .map_err(map_join_error)?
    }

    /// Fetch a visit by id regardless of assignment.
    pub async fn get_visit(&self, visit_id: &str) -> DomainResult<Option<Visit>> {
        let db = Arc::clone(&self.db);
        let visit_id = visit_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<Visit>> {
            let conn = db.get_connection()?;
            conn.query_row(&format!("{SELECT_COLUMNS} WHERE id = ?1"), params![&visit_id], map_visit_row)
                .optional()
                .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }
}

#[async_trait]
impl VisitRepositoryPort for SqliteVisitRepository {
    async fn get_calendar(
        &self,
        caregiver_id: Option<&str>,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<Vec<Visit>> {
        let db = Arc::clone(&self.db);
        let caregiver_id = caregiver_id.map(str::to_string);
        let (from_secs, from_nanos) = split_instant(from);
        let (to_secs, to_nanos) = split_instant(to);

        task::spawn_blocking(move || -> DomainResult<Vec<Visit>> {
            let conn = db.get_connection()?;

            let rows = match caregiver_id {
                Some(caregiver_id) => {
                    let mut stmt = conn
                        .prepare(&format!(
                            "{SELECT_COLUMNS} WHERE {OVERLAP_PREDICATE} AND caregiver_id = ?5 ORDER BY rowid"
                        ))
                        .map_err(map_sql_error)?;
                    let rows = stmt
                        .query_map(
                            params![to_secs, to_nanos, from_secs, from_nanos, caregiver_id],
                            map_visit_row,
                        )
                        .map_err(map_sql_error)?
                        .collect::<rusqlite::Result<Vec<_>>>();
                    rows
                }
                None => {
                    let mut stmt = conn
                        .prepare(&format!("{SELECT_COLUMNS} WHERE {OVERLAP_PREDICATE} ORDER BY rowid"))
                        .map_err(map_sql_error)?;
                    let rows = stmt
                        .query_map(params![to_secs, to_nanos, from_secs, from_nanos], map_visit_row)
                        .map_err(map_sql_error)?
                        .collect::<rusqlite::Result<Vec<_>>>();
                    rows
                }
            };

            rows.map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn unassign(&self, visit_id: &str, caregiver_id: &str) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let visit_id = visit_id.to_string();
        let caregiver_id = caregiver_id.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            let updated = conn
                .execute(
                    "UPDATE visits SET caregiver_id = NULL WHERE id = ?1 AND caregiver_id = ?2",
                    params![&visit_id, &caregiver_id],
                )
                .map_err(map_sql_error)?;

            if updated == 0 {
                trace!(%visit_id, %caregiver_id, "unassign matched no visit");
            }
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

fn insert_visit_row(conn: &Connection, visit: &Visit) -> rusqlite::Result<()> {
    let (start_secs, start_nanos) = split_instant(visit.start_time);
    let (end_secs, end_nanos) = split_instant(visit.end_time);

    conn.execute(
        "INSERT INTO visits (id, tenant_id, patient_id, caregiver_id, start_secs, start_nanos, end_secs, end_nanos)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            visit.id,
            visit.tenant_id,
            visit.patient_id,
            visit.caregiver_id,
            start_secs,
            start_nanos,
            end_secs,
            end_nanos,
        ],
    )?;
    Ok(())
}

fn split_instant(instant: DateTime<Utc>) -> (i64, i64) {
    (instant.timestamp(), i64::from(instant.timestamp_subsec_nanos()))
}

fn map_visit_row(row: &Row<'_>) -> rusqlite::Result<Visit> {
    Ok(Visit {
        id: row.get(0)?,
        tenant_id: row.get(1)?,
        patient_id: row.get(2)?,
        caregiver_id: row.get(3)?,
        start_time: join_instant(row, 4)?,
        end_time: join_instant(row, 6)?,
    })
}

fn join_instant(row: &Row<'_>, secs_column: usize) -> rusqlite::Result<DateTime<Utc>> {
    let secs: i64 = row.get(secs_column)?;
    let nanos: i64 = row.get(secs_column + 1)?;

    u32::try_from(nanos).ok().and_then(|nanos| DateTime::from_timestamp(secs, nanos)).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            secs_column,
            Type::Integer,
            format!("timestamp out of range: {secs}s {nanos}ns").into(),
        )
    })
}

fn map_join_error(err: task::JoinError) -> RosteringError {
    RosteringError::from(InfraError::from(err))
}
