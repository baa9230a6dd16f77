//! End-to-end wiring tests for `ProcessorContext`.

mod support;

use rostering_domain::{AvailabilityEvent, Config, DatabaseConfig, ProcessorConfig, RosteringError};
use rostering_infra::{ProcessorContext, SqliteVisitRepository};
use support::{at, ids, visit, TestDatabase, CAREGIVER, OTHER_CAREGIVER};

fn config_for(db: &TestDatabase) -> Config {
    Config {
        database: DatabaseConfig { path: db.path().display().to_string(), pool_size: 2 },
        ..Config::default()
    }
}

#[tokio::test]
async fn from_config_processes_json_events_against_sqlite() {
    let db = TestDatabase::new();
    SqliteVisitRepository::new(db.manager.clone())
        .insert_visits(vec![
            visit("before", Some(CAREGIVER), at(2025, 11, 6, 10, 0), at(2025, 11, 6, 11, 0)),
            visit("after", Some(CAREGIVER), at(2025, 11, 8, 10, 0), at(2025, 11, 8, 11, 0)),
            visit("absence", Some(OTHER_CAREGIVER), at(2025, 11, 9, 10, 0), at(2025, 11, 9, 11, 0)),
        ])
        .await
        .unwrap();

    let context = ProcessorContext::from_config(&config_for(&db)).expect("context builds");
    assert!(context.db.is_some());

    let events: Vec<AvailabilityEvent> = serde_json::from_str(
        r#"[
            {
                "type": "caregiver_permanent_unavailability",
                "id": "event-1",
                "tenant_id": "tenant-1",
                "caregiver_id": "caregiver-1",
                "effective_from": "2025-11-07T00:00:00Z"
            },
            {
                "type": "caregiver_absence_booked",
                "id": "event-2",
                "tenant_id": "tenant-1",
                "caregiver_id": "caregiver-2",
                "start_time": "2025-11-09T00:00:00Z",
                "end_time": "2025-11-10T00:00:00Z"
            }
        ]"#,
    )
    .expect("events deserialize");

    for event in &events {
        context.process(event).await.unwrap();
    }

    let window = (at(2025, 11, 1, 0, 0), at(2025, 12, 1, 0, 0));
    let mine = context.visits.get_calendar(Some(CAREGIVER), window.0, window.1).await.unwrap();
    let theirs = context.visits.get_calendar(Some(OTHER_CAREGIVER), window.0, window.1).await.unwrap();
    let open: Vec<_> = context
        .visits
        .get_calendar(None, window.0, window.1)
        .await
        .unwrap()
        .into_iter()
        .filter(|v| v.is_unassigned())
        .collect();

    assert_eq!(ids(&mine), vec!["before"]);
    assert!(theirs.is_empty());
    assert_eq!(ids(&open), vec!["after", "absence"]);
}

#[test]
fn from_config_rejects_invalid_configuration() {
    let db = TestDatabase::new();
    let mut config = config_for(&db);
    config.processor = ProcessorConfig { lookahead_months: 0 };

    let result = ProcessorContext::from_config(&config);

    assert!(matches!(result, Err(RosteringError::Config(_))));
}

#[tokio::test]
async fn in_memory_context_rejects_empty_absence() {
    let context = ProcessorContext::in_memory(
        vec![visit("a", Some(CAREGIVER), at(2025, 1, 1, 9, 0), at(2025, 1, 1, 10, 0))],
        &ProcessorConfig::default(),
    );
    let event: AvailabilityEvent = serde_json::from_str(
        r#"{
            "type": "caregiver_absence_booked",
            "id": "event-3",
            "tenant_id": "tenant-1",
            "caregiver_id": "caregiver-1",
            "start_time": "2025-01-01T10:00:00Z",
            "end_time": "2025-01-01T09:00:00Z"
        }"#,
    )
    .unwrap();

    let err = context.process(&event).await.unwrap_err();

    assert_eq!(err.label(), "invalid_input");
    assert!(context.db.is_none());
}
