//! Bus-level conflict scenario: several devices announcing instances,
//! recomputation after devices appear and reconfigure.
use poco_n2k::protocol::conflict::ConflictDetector;
use poco_n2k::protocol::transport::message::Message;

fn frame(pgn: u32, source: u8, payload: &[u8]) -> Message {
    Message::from_payload(pgn, source, 0xFF, 6, payload).unwrap()
}

#[test]
fn battery_instance_clash_resolves_after_reconfiguration() {
    let mut detector = ConflictDetector::new();

    // Two chargers both claim battery instance 0, an engine sits alone.
    detector.observe(&frame(127508, 0x10, &[0, 0x10, 0x27, 0, 0, 0, 0xFF, 0xFF]));
    detector.observe(&frame(127508, 0x20, &[0, 0x20, 0x4E, 0, 0, 0, 0xFF, 0xFF]));
    detector.observe(&frame(127488, 0x30, &[0, 0xE0, 0x2E, 0xFF, 0xFF, 0x00, 0xFF, 0xFF]));
    detector.recompute_conflicts();

    assert_eq!(detector.conflict_count(), 1);
    let conflict = &detector.conflicts()[0];
    assert_eq!(conflict.pgn, 127508);
    assert_eq!(conflict.instance, 0);
    assert_eq!(conflict.sources(), &[0x10, 0x20]);
    assert!(!detector.has_conflict(0x30));

    // One charger is reconfigured to instance 1: the clash disappears.
    detector.observe(&frame(127508, 0x20, &[1, 0x20, 0x4E, 0, 0, 0, 0xFF, 0xFF]));
    detector.recompute_conflicts();
    assert!(!detector.has_conflicts());
}

#[test]
fn mixed_offsets_and_untracked_pgns() {
    let mut detector = ConflictDetector::new();

    // Temperature instance lives in byte 1; both sensors claim instance 2.
    detector.observe(&frame(130312, 0x41, &[0x00, 2, 0x00, 0x77, 0x74, 0xFF, 0xFF, 0xFF]));
    detector.observe(&frame(130312, 0x42, &[0x05, 2, 0x01, 0x80, 0x74, 0xFF, 0xFF, 0xFF]));

    // Position frames carry no instance and must not be tracked.
    detector.observe(&frame(129025, 0x43, &[0, 0, 0, 0, 0, 0, 0, 0]));

    detector.recompute_conflicts();

    assert_eq!(detector.record_count(), 2);
    assert_eq!(detector.conflicts_for_pgn(130312).count(), 1);
    assert_eq!(detector.conflicts_for_pgn(129025).count(), 0);
}
