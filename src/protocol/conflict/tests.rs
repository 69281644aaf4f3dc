//! Unit tests for the instance conflict detector.
use super::*;

fn battery_status(source: u8, instance: u8) -> Message {
    // Battery instance rides in byte 0 of PGN 127508.
    Message::from_payload(127508, source, 0xFF, 6, &[instance, 0x10, 0x27, 0, 0, 0, 0xFF, 0xFF])
        .unwrap()
}

fn temperature(source: u8, instance: u8) -> Message {
    // Temperature instance rides in byte 1, after the SID.
    Message::from_payload(130312, source, 0xFF, 5, &[0x00, instance, 0x00, 0x10, 0x75, 0xFF, 0xFF, 0xFF])
        .unwrap()
}

//==================================================================================EXTRACTION
#[test]
fn test_extract_instance_offsets() {
    assert_eq!(extract_instance(&battery_status(0x10, 3)), Some(3));
    assert_eq!(extract_instance(&temperature(0x10, 7)), Some(7));

    let untracked = Message::from_payload(129025, 0x10, 0xFF, 2, &[1, 2, 3, 4]).unwrap();
    assert_eq!(extract_instance(&untracked), None);
}

#[test]
fn test_instance_pgn_set() {
    for pgn in [127488, 127489, 127502, 127505, 127508, 127509, 127513, 130312, 130314, 130316] {
        assert!(is_instance_pgn(pgn));
    }
    assert!(!is_instance_pgn(129025));
    assert!(!is_instance_pgn(61184));
}

//==================================================================================DETECTION
#[test]
/// Two sources claiming battery instance 0 is one conflict.
fn test_battery_conflict() {
    let mut detector = ConflictDetector::new();
    detector.observe(&battery_status(0x10, 0));
    detector.observe(&battery_status(0x20, 0));
    detector.recompute_conflicts();

    assert_eq!(detector.conflict_count(), 1);
    let conflict = &detector.conflicts()[0];
    assert_eq!(conflict.pgn, 127508);
    assert_eq!(conflict.instance, 0);
    assert_eq!(conflict.sources(), &[0x10, 0x20]);
    assert!(detector.has_conflict(0x10));
    assert!(detector.has_conflict(0x20));
    assert!(!detector.has_conflict(0x30));
}

#[test]
/// Distinct instances on the same PGN do not conflict.
fn test_distinct_instances_no_conflict() {
    let mut detector = ConflictDetector::new();
    detector.observe(&battery_status(0x10, 0));
    detector.observe(&battery_status(0x20, 1));
    detector.recompute_conflicts();

    assert!(!detector.has_conflicts());
}

#[test]
/// Same source repeating its claim is an update, not a conflict.
fn test_repeated_claim_updates_in_place() {
    let mut detector = ConflictDetector::new();
    detector.observe(&battery_status(0x10, 0));
    detector.observe(&battery_status(0x10, 0));
    detector.observe(&battery_status(0x10, 2)); // Device reconfigured
    detector.recompute_conflicts();

    assert_eq!(detector.record_count(), 1);
    assert!(!detector.has_conflicts());
}

#[test]
/// The invalid instance marker is never tracked.
fn test_invalid_instance_skipped() {
    let mut detector = ConflictDetector::new();
    detector.observe(&battery_status(0x10, 255));
    detector.recompute_conflicts();

    assert_eq!(detector.record_count(), 0);
    assert!(!detector.has_conflicts());
}

#[test]
/// Recomputation is idempotent and starts from scratch every time.
fn test_recompute_idempotent() {
    let mut detector = ConflictDetector::new();
    detector.observe(&battery_status(0x10, 0));
    detector.observe(&battery_status(0x20, 0));
    detector.recompute_conflicts();
    detector.recompute_conflicts();

    assert_eq!(detector.conflict_count(), 1);

    // The conflict dissolves when one device moves to a free instance.
    detector.observe(&battery_status(0x20, 1));
    detector.recompute_conflicts();
    assert!(!detector.has_conflicts());
}

#[test]
/// Conflicts on different PGNs are reported independently.
fn test_per_pgn_queries() {
    let mut detector = ConflictDetector::new();
    detector.observe(&battery_status(0x10, 0));
    detector.observe(&battery_status(0x20, 0));
    detector.observe(&temperature(0x30, 1));
    detector.observe(&temperature(0x40, 1));
    detector.recompute_conflicts();

    assert_eq!(detector.conflict_count(), 2);
    assert_eq!(detector.conflicts_for_pgn(127508).count(), 1);
    assert_eq!(detector.conflicts_for_pgn(130312).count(), 1);
    assert_eq!(detector.conflicts_for_pgn(127505).count(), 0);
}

#[test]
/// Clearing drops both records and conflicts.
fn test_clear() {
    let mut detector = ConflictDetector::new();
    detector.observe(&battery_status(0x10, 0));
    detector.observe(&battery_status(0x20, 0));
    detector.recompute_conflicts();
    assert!(detector.has_conflicts());

    detector.clear();
    assert_eq!(detector.record_count(), 0);
    assert!(!detector.has_conflicts());
}

#[test]
/// A three-way clash is a single conflict listing every source.
fn test_three_sources() {
    let mut detector = ConflictDetector::new();
    detector.observe(&battery_status(0x10, 4));
    detector.observe(&battery_status(0x20, 4));
    detector.observe(&battery_status(0x30, 4));
    detector.recompute_conflicts();

    assert_eq!(detector.conflict_count(), 1);
    assert_eq!(detector.conflicts()[0].sources(), &[0x10, 0x20, 0x30]);
}
