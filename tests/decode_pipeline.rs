//! Received payloads through the full decode dispatch, checking scaled
//! values, enumerations, and availability handling.
use poco_n2k::core::SignalValue;
use poco_n2k::protocol::decoders::decode;
use poco_n2k::protocol::poco::create_custom_hsb;
use poco_n2k::protocol::transport::message::Message;

fn signal_value(msg: &Message, name: &str) -> SignalValue {
    let decoded = decode(msg);
    decoded
        .signals()
        .iter()
        .find(|s| s.name.as_str() == Some(name))
        .unwrap_or_else(|| panic!("missing signal {name}"))
        .value
}

#[test]
fn engine_rapid_update_scaling() {
    // Instance 0, speed 3000 rpm (raw 12000), boost not available, trim -5 %.
    let msg = Message::from_payload(
        127488,
        0x30,
        0xFF,
        2,
        &[0x00, 0xE0, 0x2E, 0xFF, 0xFF, 0xFB, 0xFF, 0xFF],
    )
    .unwrap();

    assert_eq!(signal_value(&msg, "Engine Speed"), SignalValue::Number(3000.0));
    assert_eq!(
        signal_value(&msg, "Engine Boost Pressure"),
        SignalValue::NotAvailable
    );
    assert_eq!(signal_value(&msg, "Engine Tilt/Trim"), SignalValue::Number(-5.0));
}

#[test]
fn wind_data_enumeration() {
    // SID 0, speed 5.00 m/s, direction 1.0000 rad, reference 2 (apparent).
    let msg = Message::from_payload(
        130306,
        0x31,
        0xFF,
        2,
        &[0x00, 0xF4, 0x01, 0x10, 0x27, 0x02],
    )
    .unwrap();

    assert_eq!(signal_value(&msg, "Wind Speed"), SignalValue::Number(5.0));
    assert_eq!(
        signal_value(&msg, "Wind Reference"),
        SignalValue::Enumerated("Apparent")
    );
}

#[test]
fn temperature_kelvin_conversion() {
    // Actual temperature raw 29815 -> 298.15 K - 273.15 = 25 degrees.
    let msg = Message::from_payload(
        130312,
        0x32,
        0xFF,
        5,
        &[0x00, 0x01, 0x01, 0x77, 0x74, 0xFF, 0xFF, 0xFF],
    )
    .unwrap();

    match signal_value(&msg, "Actual Temperature") {
        SignalValue::Number(v) => assert!((v - 25.0).abs() < 1e-9),
        other => panic!("expected number, got {other:?}"),
    }
    assert_eq!(
        signal_value(&msg, "Temperature Source"),
        SignalValue::Enumerated("Outside Temperature")
    );
    assert_eq!(signal_value(&msg, "Set Temperature"), SignalValue::NotAvailable);
}

#[test]
fn position_rapid_signed_coordinates() {
    // Latitude -45.0 deg, longitude 170.5 deg at 1e-7 resolution.
    let lat = (-45.0f64 / 1e-7) as i32;
    let lon = (170.5f64 / 1e-7) as i32;
    let mut payload = [0u8; 8];
    payload[..4].copy_from_slice(&lat.to_le_bytes());
    payload[4..].copy_from_slice(&lon.to_le_bytes());

    let msg = Message::from_payload(129025, 0x33, 0xFF, 2, &payload).unwrap();

    match signal_value(&msg, "Latitude") {
        SignalValue::Number(v) => assert!((v + 45.0).abs() < 1e-6),
        other => panic!("expected number, got {other:?}"),
    }
    match signal_value(&msg, "Longitude") {
        SignalValue::Number(v) => assert!((v - 170.5).abs() < 1e-6),
        other => panic!("expected number, got {other:?}"),
    }
}

#[test]
fn built_frames_decode_through_dispatch() {
    let msg = create_custom_hsb(0x0E, 0x10, 8, 2, 120, 60, 240).unwrap();
    let decoded = decode(&msg);

    assert!(decoded.decoded);
    assert_eq!(decoded.name, "Lumitec Poco Proprietary");
    assert_eq!(signal_value(&msg, "Action"), SignalValue::Enumerated("To HSB"));
    assert_eq!(signal_value(&msg, "Hue"), SignalValue::Number(120.0));
}
