//! Unit tests for the specialized decoders and the dispatch entry point.
use super::*;
use crate::core::TextBuf;
use crate::protocol::group_function::{
    create_zone_enable_command, create_zone_lighting_command, ZoneLightingControl,
};
use crate::protocol::poco::{
    create_channel_pli_t2hsb, create_simple_action, create_state_info, SwitchState,
};

fn find<'a>(decoded: &'a DecodedMessage, name: &str) -> &'a DecodedSignal {
    decoded
        .signals()
        .iter()
        .find(|s| s.name.as_str() == Some(name))
        .unwrap_or_else(|| panic!("missing signal {name}"))
}

fn zone_payload() -> Message {
    let control = ZoneLightingControl {
        zone_id: 2,
        zone_name: TextBuf::from_str("Salon"),
        red: 10,
        green: 20,
        blue: 30,
        color_temp: 4000,
        intensity: 180,
        program_id: 1,
        program_color_seq_index: 0,
        program_intensity: 90,
        program_rate: 40,
        program_color_sequence: 3,
        zone_enabled: true,
    };
    // Direct PGN 130561 payload mirroring the settable fields in order.
    let mut msg = Message::broadcast(130561, 0x23, 3);
    msg.add_u8(control.zone_id).unwrap();
    msg.add_u8(control.zone_name.len() as u8).unwrap();
    msg.add_slice(control.zone_name.as_bytes()).unwrap();
    msg.add_u8(control.red).unwrap();
    msg.add_u8(control.green).unwrap();
    msg.add_u8(control.blue).unwrap();
    msg.add_u16(control.color_temp).unwrap();
    msg.add_u8(control.intensity).unwrap();
    msg.add_u8(control.program_id).unwrap();
    msg.add_u8(control.program_color_seq_index).unwrap();
    msg.add_u8(control.program_intensity).unwrap();
    msg.add_u8(control.program_rate).unwrap();
    msg.add_u8(control.program_color_sequence).unwrap();
    msg.add_u8(0x01 | 0xFC).unwrap(); // enabled bits + reserved bits set
    msg
}

//==================================================================================ZONE_LIGHTING
#[test]
fn test_decode_zone_lighting() {
    let decoded = decode_zone_lighting(&zone_payload());

    assert!(decoded.decoded);
    assert_eq!(decoded.name, "Zone Lighting Control");
    assert_eq!(find(&decoded, "Zone ID").value, SignalValue::Number(2.0));
    assert_eq!(
        find(&decoded, "Zone Name").value,
        SignalValue::Text(TextBuf::from_str("Salon"))
    );
    assert_eq!(
        find(&decoded, "Color Temperature").value,
        SignalValue::Number(4000.0)
    );
    // Reserved bits must not leak into the flag.
    assert_eq!(find(&decoded, "Zone Enabled").value, SignalValue::Number(1.0));
}

#[test]
/// A truncated zone payload keeps the fields read so far.
fn test_decode_zone_lighting_truncated() {
    let mut msg = Message::broadcast(130561, 0x23, 3);
    msg.add_u8(7).unwrap();
    msg.add_u8(0).unwrap(); // Empty name
    msg.add_u8(255).unwrap(); // Red, then nothing

    let decoded = decode_zone_lighting(&msg);
    assert_eq!(find(&decoded, "Zone ID").value, SignalValue::Number(7.0));
    assert_eq!(find(&decoded, "Red").value, SignalValue::Number(255.0));
    assert!(decoded
        .signals()
        .iter()
        .all(|s| s.name.as_str() != Some("Green")));
}

//==================================================================================GROUP_FUNCTION
#[test]
fn test_decode_group_function_pairs() {
    let msg = create_zone_enable_command(0x0E, 0x10, 5, true).unwrap();
    let decoded = decode_group_function(&msg);

    assert_eq!(
        find(&decoded, "Function Code").value,
        SignalValue::Enumerated("Command")
    );
    assert_eq!(
        find(&decoded, "Target PGN").value,
        SignalValue::Number(130561.0)
    );
    assert_eq!(
        find(&decoded, "Parameter Count").value,
        SignalValue::Number(2.0)
    );
    assert_eq!(find(&decoded, "Field 1 Number").value, SignalValue::Number(1.0));
    assert_eq!(find(&decoded, "Field 1 Value").value, SignalValue::Number(5.0));
    assert_eq!(find(&decoded, "Field 2 Number").value, SignalValue::Number(13.0));
    assert_eq!(find(&decoded, "Field 2 Value").value, SignalValue::Number(1.0));
}

#[test]
/// Repeated pairs stay apart thanks to the index suffix.
fn test_decode_group_function_index_suffixes() {
    let control = ZoneLightingControl {
        zone_id: 1,
        zone_name: TextBuf::from_str("A"),
        red: 0,
        green: 0,
        blue: 0,
        color_temp: 2700,
        intensity: 0,
        program_id: 0,
        program_color_seq_index: 0,
        program_intensity: 0,
        program_rate: 0,
        program_color_sequence: 0,
        zone_enabled: false,
    };
    let msg = create_zone_lighting_command(0x0E, 0x10, &control).unwrap();
    let decoded = decode_group_function(&msg);

    assert_eq!(find(&decoded, "Field 1 Number").value, SignalValue::Number(1.0));
    assert_eq!(find(&decoded, "Field 2 Number").value, SignalValue::Number(2.0));
}

//==================================================================================POCO
#[test]
fn test_decode_poco_simple_action() {
    let msg = create_simple_action(0x0E, 0x10, 2, 1).unwrap();
    let decoded = decode_poco_proprietary(&msg);

    assert!(decoded.decoded);
    assert_eq!(
        find(&decoded, "Proprietary ID").value,
        SignalValue::Enumerated("ExtSw Simple Actions")
    );
    assert_eq!(find(&decoded, "Action").value, SignalValue::Enumerated("On"));
    assert_eq!(find(&decoded, "Switch ID").value, SignalValue::Number(1.0));
}

#[test]
/// State info renders the switch state through its value table.
fn test_decode_poco_state_info() {
    let msg = create_state_info(0x10, 3, SwitchState::Held as u8, 1).unwrap();
    let decoded = decode_poco_proprietary(&msg);

    assert_eq!(find(&decoded, "Switch ID").value, SignalValue::Number(3.0));
    assert_eq!(
        find(&decoded, "Switch State").value,
        SignalValue::Enumerated("Held")
    );
    assert_eq!(
        find(&decoded, "Switch Type").value,
        SignalValue::Enumerated("Hue/Saturation")
    );
}

#[test]
fn test_decode_poco_t2hsb_packed_fields() {
    let msg = create_channel_pli_t2hsb(0x0E, 0x10, 3, 0x15, 1, 9, 0x5A, 4).unwrap();
    let decoded = decode_poco_proprietary(&msg);

    assert_eq!(find(&decoded, "Channel").value, SignalValue::Number(3.0));
    assert_eq!(find(&decoded, "PLI Clan").value, SignalValue::Number(21.0));
    assert_eq!(find(&decoded, "Transition").value, SignalValue::Number(1.0));
    assert_eq!(find(&decoded, "Brightness").value, SignalValue::Number(9.0));
    assert_eq!(find(&decoded, "Hue").value, SignalValue::Number(90.0));
    assert_eq!(find(&decoded, "Saturation").value, SignalValue::Number(4.0));
}

#[test]
/// A non-Poco payload on the proprietary PGN stays undecoded.
fn test_decode_poco_foreign_vendor() {
    let msg = Message::from_payload(61184, 0x10, 0xFF, 6, &[0x00, 0x80, 0x01, 0x02]).unwrap();
    let decoded = decode_poco_proprietary(&msg);
    assert!(!decoded.decoded);
}

//==================================================================================DISPATCH
#[test]
fn test_decode_dispatch() {
    // Proprietary frame
    let poco_msg = create_simple_action(0x0E, 0x10, 2, 1).unwrap();
    assert_eq!(decode(&poco_msg).name, "Lumitec Poco Proprietary");

    // Registry-backed PGN
    let battery =
        Message::from_payload(127508, 0x10, 0xFF, 6, &[0, 0x10, 0x27, 0, 0, 0xFF, 0xFF, 0xFF])
            .unwrap();
    let decoded = decode(&battery);
    assert_eq!(decoded.name, "Battery Status");
    assert_eq!(
        find(&decoded, "Battery Voltage").value,
        SignalValue::Number(100.0)
    );

    // Unknown PGN falls back to raw display
    let unknown = Message::from_payload(65280, 0x10, 0xFF, 6, &[1, 2, 3]).unwrap();
    assert!(!decode(&unknown).decoded);
}
