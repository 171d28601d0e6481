//! Tests for the entity stores
//!
//! These tests verify:
//! - Monotonic id assignment and no id reuse
//! - Soft delete semantics
//! - Active scans in store order (newest first)
//! - Status updates on active and inactive records
//! - Text clipping to the on-disk field width

use brigade::model::{
    Equipment, EquipmentStatus, Firefighter, FirefighterStatus, Intervention, InterventionStatus,
    Occurrence, OccurrenceKind, OccurrenceStatus, Priority, Timestamp,
};
use brigade::persist::MAX_TEXT_BYTES;
use brigade::store::{Record, Store};
use brigade::BrigadeError;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_firefighters(names: &[&str]) -> Store<Firefighter> {
    let mut store: Store<Firefighter> = Store::new();
    for name in names {
        store.create(name, "Rescue").unwrap();
    }
    store
}

fn ts(year: i32, month: i32, day: i32, hour: i32, minute: i32) -> Timestamp {
    Timestamp::new(year, month, day, hour, minute)
}

// =============================================================================
// Id Assignment Tests
// =============================================================================

#[test]
fn test_ids_start_at_one_and_increase() {
    let mut store: Store<Firefighter> = Store::new();

    assert_eq!(store.last_id(), 0);
    assert_eq!(store.create("Ana", "Rescue").unwrap(), 1);
    assert_eq!(store.create("Rui", "Driver").unwrap(), 2);
    assert_eq!(store.create("Eva", "Medic").unwrap(), 3);
    assert_eq!(store.last_id(), 3);
}

#[test]
fn test_ids_not_reused_after_delete() {
    let mut store = setup_firefighters(&["Ana", "Rui"]);

    store.soft_delete(2).unwrap();
    let id = store.create("Eva", "Medic").unwrap();

    assert_eq!(id, 3);
    assert_eq!(store.len(), 3);
}

#[test]
fn test_each_store_has_its_own_sequence() {
    let mut firefighters: Store<Firefighter> = Store::new();
    let mut equipment: Store<Equipment> = Store::new();

    firefighters.create("Ana", "Rescue").unwrap();
    firefighters.create("Rui", "Driver").unwrap();

    assert_eq!(equipment.create("Truck 1", "Vehicle").unwrap(), 1);
}

#[test]
fn test_create_sets_initial_status() {
    let mut firefighters: Store<Firefighter> = Store::new();
    let mut equipment: Store<Equipment> = Store::new();
    let mut occurrences: Store<Occurrence> = Store::new();

    let f = firefighters.create("Ana", "Rescue").unwrap();
    let e = equipment.create("Hose 12", "Hose").unwrap();
    let o = occurrences
        .create("Sector A", OccurrenceKind::Forest, Priority::High, ts(2025, 1, 1, 8, 0))
        .unwrap();

    let firefighter = firefighters.get(f).unwrap();
    assert_eq!(firefighter.status, FirefighterStatus::Available);
    assert_eq!(firefighter.total_interventions, 0);
    assert_eq!(firefighter.total_response_time, 0);

    assert_eq!(equipment.get(e).unwrap().status, EquipmentStatus::Operational);

    let occurrence = occurrences.get(o).unwrap();
    assert_eq!(occurrence.status, OccurrenceStatus::Reported);
    assert!(!occurrence.ended_at.is_set());
}

// =============================================================================
// Soft Delete Tests
// =============================================================================

#[test]
fn test_soft_delete_keeps_record() {
    let mut store = setup_firefighters(&["Ana", "Rui", "Eva"]);

    store.soft_delete(2).unwrap();

    assert_eq!(store.len(), 3);
    assert_eq!(store.active_count(), 2);
    let removed = store.get(2).unwrap();
    assert_eq!(removed.status, FirefighterStatus::Inactive);
    assert!(!removed.is_active());
}

#[test]
fn test_soft_delete_is_idempotent() {
    let mut store = setup_firefighters(&["Ana"]);

    store.soft_delete(1).unwrap();
    store.soft_delete(1).unwrap();

    assert_eq!(store.get(1).unwrap().status, FirefighterStatus::Inactive);
}

#[test]
fn test_soft_delete_unknown_id() {
    let mut store = setup_firefighters(&["Ana"]);

    let err = store.soft_delete(42).unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, BrigadeError::NotFound { kind: "firefighter", id: 42 }));
}

#[test]
fn test_soft_delete_on_every_kind() {
    let mut equipment: Store<Equipment> = Store::new();
    let mut occurrences: Store<Occurrence> = Store::new();
    let mut interventions: Store<Intervention> = Store::new();
    let mut firefighters: Store<Firefighter> = Store::new();

    equipment.create("Truck 1", "Vehicle").unwrap();
    occurrences
        .create("Sector A", OccurrenceKind::Urban, Priority::Low, ts(2025, 1, 1, 8, 0))
        .unwrap();
    interventions
        .create(1, ts(2025, 1, 1, 8, 5), 1, &mut firefighters)
        .unwrap();

    equipment.soft_delete(1).unwrap();
    occurrences.soft_delete(1).unwrap();
    interventions.soft_delete(1).unwrap();

    assert_eq!(equipment.get(1).unwrap().status, EquipmentStatus::Inactive);
    assert_eq!(occurrences.get(1).unwrap().status, OccurrenceStatus::Inactive);
    assert_eq!(interventions.get(1).unwrap().status, InterventionStatus::Inactive);
}

// =============================================================================
// Scan Tests
// =============================================================================

#[test]
fn test_active_scan_is_newest_first() {
    let store = setup_firefighters(&["Ana", "Rui", "Eva"]);

    let ids: Vec<_> = store.active().map(|f| f.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[test]
fn test_active_scan_skips_inactive() {
    let mut store = setup_firefighters(&["Ana", "Rui", "Eva"]);
    store.soft_delete(2).unwrap();

    let names: Vec<_> = store.active().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Eva", "Ana"]);

    // The full scan still sees the deleted record
    assert_eq!(store.iter().count(), 3);
}

#[test]
fn test_active_scan_is_restartable() {
    let store = setup_firefighters(&["Ana", "Rui"]);

    let scan = store.active();
    let first: Vec<_> = scan.clone().map(|f| f.id).collect();
    let second: Vec<_> = scan.map(|f| f.id).collect();
    assert_eq!(first, second);
    assert_eq!(store.active().count(), 2);
}

#[test]
fn test_empty_store_scan() {
    let store: Store<Occurrence> = Store::new();

    assert!(store.is_empty());
    assert_eq!(store.active().next(), None);
}

// =============================================================================
// Update Tests
// =============================================================================

#[test]
fn test_update_firefighter_status() {
    let mut store = setup_firefighters(&["Ana"]);

    store.update_status(1, FirefighterStatus::Busy).unwrap();

    assert_eq!(store.get(1).unwrap().status, FirefighterStatus::Busy);
}

#[test]
fn test_update_inactive_record_is_not_found() {
    let mut store = setup_firefighters(&["Ana"]);
    store.soft_delete(1).unwrap();

    let err = store.update_status(1, FirefighterStatus::Available).unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(store.get(1).unwrap().status, FirefighterStatus::Inactive);
}

#[test]
fn test_update_inactive_equipment_is_not_found() {
    let mut store: Store<Equipment> = Store::new();
    store.create("Truck 1", "Vehicle").unwrap();
    store.soft_delete(1).unwrap();

    let err = store.update_status(1, EquipmentStatus::Maintenance).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_update_unknown_id() {
    let mut store: Store<Equipment> = Store::new();

    let err = store.update_status(7, EquipmentStatus::InUse).unwrap_err();
    assert!(matches!(err, BrigadeError::NotFound { kind: "equipment", id: 7 }));
}

#[test]
fn test_resolve_occurrence_sets_end_time() {
    let mut store: Store<Occurrence> = Store::new();
    let id = store
        .create("Sector A", OccurrenceKind::Forest, Priority::High, ts(2025, 1, 1, 8, 0))
        .unwrap();

    store
        .update_status(id, OccurrenceStatus::Resolved, Some(ts(2025, 1, 1, 9, 30)))
        .unwrap();

    let occurrence = store.get(id).unwrap();
    assert_eq!(occurrence.status, OccurrenceStatus::Resolved);
    assert_eq!(occurrence.ended_at, ts(2025, 1, 1, 9, 30));
}

#[test]
fn test_end_time_ignored_unless_resolving() {
    let mut store: Store<Occurrence> = Store::new();
    let id = store
        .create("Sector A", OccurrenceKind::Forest, Priority::High, ts(2025, 1, 1, 8, 0))
        .unwrap();

    store
        .update_status(id, OccurrenceStatus::InProgress, Some(ts(2025, 1, 1, 9, 30)))
        .unwrap();

    assert!(!store.get(id).unwrap().ended_at.is_set());
}

#[test]
fn test_finish_intervention_sets_end_time() {
    let mut firefighters: Store<Firefighter> = Store::new();
    let mut store: Store<Intervention> = Store::new();
    let id = store
        .create(1, ts(2025, 3, 2, 14, 0), 1, &mut firefighters)
        .unwrap();

    assert_eq!(store.get(id).unwrap().status, InterventionStatus::InPlanning);

    store
        .update_status(id, InterventionStatus::Finished, Some(ts(2025, 3, 2, 16, 15)))
        .unwrap();

    let intervention = store.get(id).unwrap();
    assert_eq!(intervention.status, InterventionStatus::Finished);
    assert_eq!(intervention.ended_at, ts(2025, 3, 2, 16, 15));
}

// =============================================================================
// Assignment Tests
// =============================================================================

#[test]
fn test_intervention_credits_firefighter() {
    let mut firefighters = setup_firefighters(&["Ana", "Rui"]);
    let mut interventions: Store<Intervention> = Store::new();

    interventions
        .create(1, ts(2025, 1, 1, 8, 0), 2, &mut firefighters)
        .unwrap();
    interventions
        .create(1, ts(2025, 1, 1, 9, 0), 2, &mut firefighters)
        .unwrap();

    assert_eq!(firefighters.get(2).unwrap().total_interventions, 2);
    assert_eq!(firefighters.get(1).unwrap().total_interventions, 0);
}

#[test]
fn test_intervention_with_unknown_firefighter() {
    let mut firefighters = setup_firefighters(&["Ana"]);
    let mut interventions: Store<Intervention> = Store::new();

    let id = interventions
        .create(99, ts(2025, 1, 1, 8, 0), 42, &mut firefighters)
        .unwrap();

    let intervention = interventions.get(id).unwrap();
    assert_eq!(intervention.firefighter_id, 42);
    assert_eq!(intervention.occurrence_id, 99);
    assert_eq!(firefighters.get(1).unwrap().total_interventions, 0);
}

// =============================================================================
// Text Field Tests
// =============================================================================

#[test]
fn test_long_text_is_clipped() {
    let mut store: Store<Firefighter> = Store::new();
    let long_name = "x".repeat(150);

    let id = store.create(&long_name, "Rescue").unwrap();

    assert_eq!(store.get(id).unwrap().name.len(), MAX_TEXT_BYTES);
}

#[test]
fn test_clipping_respects_char_boundaries() {
    let mut store: Store<Equipment> = Store::new();
    // 98 ASCII bytes followed by a two-byte character straddling the limit
    let designation = format!("{}é", "a".repeat(98));

    let id = store.create(&designation, "Hose").unwrap();

    let stored = &store.get(id).unwrap().designation;
    assert_eq!(stored.len(), 98);
    assert!(stored.chars().all(|c| c == 'a'));
}

#[test]
fn test_short_text_is_kept() {
    let mut store: Store<Occurrence> = Store::new();

    let id = store
        .create("Rua Direita, 12", OccurrenceKind::Urban, Priority::Normal, ts(2025, 5, 5, 5, 5))
        .unwrap();

    assert_eq!(store.get(id).unwrap().location, "Rua Direita, 12");
}
