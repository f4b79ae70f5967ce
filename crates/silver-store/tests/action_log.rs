//! Integration tests for the append-only action log.

use chrono::NaiveDateTime;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use silver_core::LogAction;
use silver_store::ActionLog;

fn time(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").unwrap()
}

#[test]
fn missing_file_loads_as_empty_log() {
    let dir = TempDir::new().unwrap();
    let log = ActionLog::open(dir.path().join("action_log.csv")).unwrap();
    assert!(log.entries().is_empty());
}

#[test]
fn append_preserves_insertion_order_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("action_log.csv");
    let mut log = ActionLog::open(&path).unwrap();

    log.append("admin", LogAction::LoginSuccess, None, None)
        .unwrap();
    log.append("admin", LogAction::RecordAdded, Some("Alice".into()), Some(100))
        .unwrap();
    log.append("admin", LogAction::MarkedGiven, Some("Alice".into()), Some(100))
        .unwrap();

    let reopened = ActionLog::open(&path).unwrap();
    let actions: Vec<LogAction> = reopened.entries().iter().map(|entry| entry.action).collect();
    assert_eq!(
        actions,
        vec![
            LogAction::LoginSuccess,
            LogAction::RecordAdded,
            LogAction::MarkedGiven,
        ]
    );
}

#[test]
fn existing_entries_are_never_rewritten() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("action_log.csv");
    let mut log = ActionLog::open(&path).unwrap();

    let first = log
        .append_at(time("2024-01-01 10:00:00"), "admin", LogAction::LoginSuccess, None, None)
        .unwrap();
    log.append_at(
        time("2024-01-01 10:05:00"),
        "admin",
        LogAction::RecordAdded,
        Some("Alice".into()),
        Some(100),
    )
    .unwrap();

    assert_eq!(log.entries()[0], first);

    let reopened = ActionLog::open(&path).unwrap();
    assert_eq!(reopened.entries()[0], first);
    assert_eq!(reopened.entries().len(), 2);
}

#[test]
fn list_recent_first_is_a_view_not_the_stored_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("action_log.csv");
    let mut log = ActionLog::open(&path).unwrap();

    log.append_at(time("2024-01-01 09:00:00"), "admin", LogAction::LoginSuccess, None, None)
        .unwrap();
    log.append_at(
        time("2024-01-02 09:00:00"),
        "admin",
        LogAction::RecordAdded,
        Some("Alice".into()),
        Some(100),
    )
    .unwrap();
    log.append_at(
        time("2024-01-01 12:00:00"),
        "officer",
        LogAction::LoginSuccess,
        None,
        None,
    )
    .unwrap();

    let view = log.list_recent_first();
    let users: Vec<&str> = view.iter().map(|entry| entry.user.as_str()).collect();
    assert_eq!(users, vec!["admin", "officer", "admin"]);
    assert_eq!(view[0].time, time("2024-01-02 09:00:00"));

    // Stored order is untouched by taking the view.
    assert_eq!(log.entries()[0].time, time("2024-01-01 09:00:00"));
}

#[test]
fn timestamps_persist_to_the_second() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("action_log.csv");
    let mut log = ActionLog::open(&path).unwrap();
    log.append("admin", LogAction::CsvUpload, None, None).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("Time,User,Action,Nick,Silver"));
    let row = lines.next().unwrap();
    // 19-char timestamp, no fractional seconds.
    let cell = row.split(',').next().unwrap();
    assert_eq!(cell.len(), 19);
    assert!(NaiveDateTime::parse_from_str(cell, "%Y-%m-%d %H:%M:%S").is_ok());
}
