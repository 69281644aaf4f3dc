//! Unit tests for the static descriptor registry.
use super::*;

#[test]
/// Registered PGNs resolve; anything else falls through to raw display.
fn test_registry_lookup() {
    assert_eq!(message_def(127488).map(|d| d.name), Some("Engine Parameters, Rapid Update"));
    assert_eq!(message_def(127508).map(|d| d.name), Some("Battery Status"));
    assert_eq!(message_def(129025).map(|d| d.name), Some("Position, Rapid Update"));
    assert_eq!(message_def(130306).map(|d| d.name), Some("Wind Data"));
    assert_eq!(message_def(130312).map(|d| d.name), Some("Temperature"));
    assert!(message_def(60928).is_none());
}

#[test]
/// Descriptors stay inside the contract: bit ranges fit the declared DLC
/// and enum tables are sorted for binary search.
fn test_descriptor_consistency() {
    for pgn in [127488, 127508, 129025, 130306, 130312] {
        let def = message_def(pgn).unwrap();
        assert_eq!(def.pgn, pgn);
        for sig in def.signals {
            assert!(sig.bit_length >= 1 && sig.bit_length <= 64);
            assert!((sig.start_bit + sig.bit_length) as usize <= def.dlc * 8);
            assert!(sig.enum_table.windows(2).all(|w| w[0].0 < w[1].0));
        }
    }
}
