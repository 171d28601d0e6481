//! Tests for Session
//!
//! These tests verify:
//! - Session lifecycle (open/save/close/reopen)
//! - Cross-store linking on intervention creation
//! - Dangling references are accepted
//! - Reports use the configured thresholds
//! - Config validation

use std::fs;

use brigade::model::{
    EquipmentStatus, FirefighterStatus, InterventionStatus, OccurrenceKind, OccurrenceStatus,
    Priority, Timestamp,
};
use brigade::{BrigadeError, Config, Session};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_session() -> (TempDir, Session) {
    let temp_dir = TempDir::new().unwrap();
    let session = Session::open_path(temp_dir.path()).unwrap();
    (temp_dir, session)
}

fn ts(year: i32, month: i32, day: i32, hour: i32, minute: i32) -> Timestamp {
    Timestamp::new(year, month, day, hour, minute)
}

// =============================================================================
// Lifecycle Tests
// =============================================================================

#[test]
fn test_open_creates_data_dir() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("brigade");

    let config = Config::builder().data_dir(&data_dir).build();
    let session = Session::open(config).unwrap();

    assert!(data_dir.exists());
    assert!(session.firefighters().is_empty());
    assert_eq!(session.data_dir(), data_dir.as_path());
}

#[test]
fn test_close_writes_all_files() {
    let (temp_dir, session) = setup_temp_session();

    assert_eq!(session.close(), 4);

    for name in [
        Session::FIREFIGHTERS_FILE,
        Session::EQUIPMENT_FILE,
        Session::OCCURRENCES_FILE,
        Session::INTERVENTIONS_FILE,
    ] {
        let path = temp_dir.path().join(name);
        assert!(path.exists(), "{} missing", name);
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }
}

#[test]
fn test_state_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();

    {
        let mut session = Session::open_path(temp_dir.path()).unwrap();
        session.create_firefighter("Ana", "Rescue").unwrap();
        session.create_firefighter("Rui", "Driver").unwrap();
        session.create_equipment("Truck 1", "Vehicle").unwrap();
        let reported_at = ts(2025, 1, 1, 8, 0);
        session
            .create_occurrence("Sector A", OccurrenceKind::Forest, Priority::High, reported_at)
            .unwrap();
        session.delete_firefighter(2).unwrap();
        session.close();
    }

    let mut session = Session::open_path(temp_dir.path()).unwrap();

    assert_eq!(session.firefighters().len(), 2);
    assert_eq!(session.firefighters().active_count(), 1);
    assert_eq!(session.equipment().get(1).unwrap().designation, "Truck 1");
    assert_eq!(session.occurrences().get(1).unwrap().location, "Sector A");
    // Sequence resumes past the deleted record
    assert_eq!(session.create_firefighter("Eva", "Medic").unwrap(), 3);
}

#[test]
fn test_session_without_save_leaves_no_files() {
    let temp_dir = TempDir::new().unwrap();

    {
        let mut session = Session::open_path(temp_dir.path()).unwrap();
        session.create_firefighter("Ana", "Rescue").unwrap();
    }

    assert!(!temp_dir.path().join(Session::FIREFIGHTERS_FILE).exists());
    let session = Session::open_path(temp_dir.path()).unwrap();
    assert!(session.firefighters().is_empty());
}

#[test]
fn test_unreadable_store_starts_empty() {
    let temp_dir = TempDir::new().unwrap();
    // A directory where the firefighter file should be cannot be read as one
    fs::create_dir(temp_dir.path().join(Session::FIREFIGHTERS_FILE)).unwrap();

    let mut session = Session::open_path(temp_dir.path()).unwrap();
    session.create_equipment("Truck 1", "Vehicle").unwrap();

    assert!(session.firefighters().is_empty());
    // The other three stores are still written
    assert_eq!(session.save(), 3);
}

// =============================================================================
// Linking Tests
// =============================================================================

#[test]
fn test_interventions_credit_firefighter() {
    let (_dir, mut session) = setup_temp_session();
    for i in 1..=7 {
        session.create_firefighter(&format!("FF {}", i), "Rescue").unwrap();
    }
    let occurrence = session
        .create_occurrence("Sector A", OccurrenceKind::Urban, Priority::High, ts(2025, 2, 1, 10, 0))
        .unwrap();

    session
        .create_intervention(occurrence, ts(2025, 2, 1, 10, 5), 7)
        .unwrap();
    session
        .create_intervention(occurrence, ts(2025, 2, 1, 12, 0), 7)
        .unwrap();

    assert_eq!(session.firefighters().get(7).unwrap().total_interventions, 2);
    assert_eq!(session.interventions().len(), 2);
}

#[test]
fn test_busy_firefighter_is_still_credited() {
    let (_dir, mut session) = setup_temp_session();
    session.create_firefighter("Ana", "Rescue").unwrap();
    session.update_firefighter(1, FirefighterStatus::Busy).unwrap();

    session.create_intervention(1, ts(2025, 2, 1, 10, 0), 1).unwrap();

    assert_eq!(session.firefighters().get(1).unwrap().total_interventions, 1);
}

#[test]
fn test_dangling_references_are_accepted() {
    let (_dir, mut session) = setup_temp_session();

    let id = session
        .create_intervention(500, ts(2025, 2, 1, 10, 0), 900)
        .unwrap();

    let intervention = session.interventions().get(id).unwrap();
    assert_eq!(intervention.occurrence_id, 500);
    assert_eq!(intervention.firefighter_id, 900);
    assert!(session.firefighters().is_empty());
}

#[test]
fn test_intervention_lifecycle_through_session() {
    let (_dir, mut session) = setup_temp_session();
    let id = session
        .create_intervention(1, ts(2025, 2, 1, 10, 0), 1)
        .unwrap();

    session
        .update_intervention(id, InterventionStatus::Running, None)
        .unwrap();
    session
        .update_intervention(id, InterventionStatus::Finished, Some(ts(2025, 2, 1, 11, 40)))
        .unwrap();

    let stats = session.intervention_stats();
    assert_eq!(stats.finished, 1);
    assert_eq!(stats.average_minutes, 100);

    session.delete_intervention(id).unwrap();
    let err = session
        .update_intervention(id, InterventionStatus::Running, None)
        .unwrap_err();
    assert!(err.is_not_found());
}

// =============================================================================
// Report Tests
// =============================================================================

#[test]
fn test_reports_use_configured_thresholds() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .data_dir(temp_dir.path())
        .capacity_critical_pct(60.0)
        .maintenance_alert_pct(10.0)
        .build();
    let mut session = Session::open(config).unwrap();

    session.create_firefighter("Ana", "Rescue").unwrap();
    session.create_firefighter("Rui", "Driver").unwrap();
    session.update_firefighter(2, FirefighterStatus::Busy).unwrap();
    for i in 0..5 {
        session.create_equipment(&format!("Unit {}", i), "Vehicle").unwrap();
    }
    session.update_equipment(1, EquipmentStatus::Maintenance).unwrap();

    // 1 of 2 free is below 60%; 1 of 5 in maintenance is above 10%
    assert!(session.capacity().firefighters.is_critical());
    assert!(session.strain().overstrained);
}

#[test]
fn test_session_reports() {
    let (_dir, mut session) = setup_temp_session();
    session.create_firefighter("Ana", "Rescue").unwrap();
    let a = session
        .create_occurrence("Sector A", OccurrenceKind::Forest, Priority::High, ts(2025, 1, 1, 8, 0))
        .unwrap();
    session
        .create_occurrence("Sector B", OccurrenceKind::Urban, Priority::Low, ts(2025, 1, 1, 8, 0))
        .unwrap();
    session
        .update_occurrence(a, OccurrenceStatus::Resolved, Some(ts(2025, 1, 1, 9, 30)))
        .unwrap();

    let efficiency = session.efficiency();
    assert_eq!(
        efficiency.for_kind(OccurrenceKind::Forest).unwrap().average_minutes,
        90
    );
    assert_eq!(session.locations().count_for("Sector B"), Some(1));
    assert_eq!(session.activity().entries.len(), 1);
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_invalid_threshold_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .data_dir(temp_dir.path())
        .capacity_critical_pct(150.0)
        .build();

    let err = Session::open(config).err().unwrap();
    assert!(matches!(err, BrigadeError::Config(_)));
}

#[test]
fn test_session_keeps_its_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .data_dir(temp_dir.path())
        .capacity_critical_pct(35.0)
        .maintenance_alert_pct(12.5)
        .build();

    let session = Session::open(config).unwrap();

    assert_eq!(session.config().capacity_critical_pct, 35.0);
    assert_eq!(session.config().maintenance_alert_pct, 12.5);
    assert_eq!(session.config().data_dir, temp_dir.path());
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.capacity_critical_pct, 20.0);
    assert_eq!(config.maintenance_alert_pct, 30.0);
    assert!(config.validate().is_ok());
}
