//! Dedicated decode routines for layouts the table-driven engine cannot
//! express: length-prefixed strings, repeated field pairs, sub-byte splits,
//! and the tag-dispatched proprietary frames. Output is the same
//! [`DecodedMessage`] shape the engine produces, so callers render every
//! message the same way.
use core::fmt::Write;

use crate::core::{DecodedMessage, DecodedSignal, SignalValue, TextBuf};
use crate::infra::codec::engine;
use crate::protocol::group_function::{GroupFunctionCode, GROUP_FUNCTION_PGN, ZONE_LIGHTING_PGN};
use crate::protocol::messages;
use crate::protocol::poco::{
    self, action_name, channel_mode_name, proprietary_id_name, switch_state_name,
    switch_type_name, ProprietaryId, LUMITEC_PGN,
};
use crate::protocol::transport::message::{Message, PayloadReader};

/// Decodes any supported message.
///
/// Irregular layouts take their dedicated routine; every other PGN goes
/// through the static descriptor registry. Unknown PGNs come back with
/// `decoded == false` so the caller can fall back to raw display.
pub fn decode(msg: &Message) -> DecodedMessage {
    match msg.pgn {
        ZONE_LIGHTING_PGN => decode_zone_lighting(msg),
        GROUP_FUNCTION_PGN => decode_group_function(msg),
        LUMITEC_PGN => decode_poco_proprietary(msg),
        pgn => match messages::message_def(pgn) {
            Some(def) => engine::decode_with(def, msg.data()),
            None => DecodedMessage::undecoded(),
        },
    }
}

fn push_number(decoded: &mut DecodedMessage, name: &'static str, unit: &'static str, value: f64) {
    decoded.push(DecodedSignal::new(
        name,
        unit,
        SignalValue::Number(value),
        true,
    ));
}

fn push_enumerated(decoded: &mut DecodedMessage, name: &'static str, label: &'static str) {
    decoded.push(DecodedSignal::new(
        name,
        "",
        SignalValue::Enumerated(label),
        true,
    ));
}

//==================================================================================ZONE_LIGHTING
/// PGN 130561: zone identity, colors, program settings, and the trailing
/// enabled/reserved split byte.
pub fn decode_zone_lighting(msg: &Message) -> DecodedMessage {
    let mut decoded = DecodedMessage::new("Zone Lighting Control", "Lighting zone configuration");
    let mut reader = msg.reader();
    let _ = read_zone_fields(&mut reader, &mut decoded);
    decoded
}

fn read_zone_fields(
    reader: &mut PayloadReader<'_>,
    decoded: &mut DecodedMessage,
) -> Option<()> {
    push_number(decoded, "Zone ID", "", reader.read_u8().ok()? as f64);

    let name = reader.read_str().ok()?;
    decoded.push(DecodedSignal {
        name: TextBuf::from_str("Zone Name"),
        unit: "",
        value: SignalValue::Text(name),
        valid: true,
    });

    push_number(decoded, "Red", "", reader.read_u8().ok()? as f64);
    push_number(decoded, "Green", "", reader.read_u8().ok()? as f64);
    push_number(decoded, "Blue", "", reader.read_u8().ok()? as f64);
    push_number(decoded, "Color Temperature", "K", reader.read_u16().ok()? as f64);
    push_number(decoded, "Intensity", "", reader.read_u8().ok()? as f64);
    push_number(decoded, "Program ID", "", reader.read_u8().ok()? as f64);
    push_number(decoded, "Program Color Seq Index", "", reader.read_u8().ok()? as f64);
    push_number(decoded, "Program Intensity", "", reader.read_u8().ok()? as f64);
    push_number(decoded, "Program Rate", "", reader.read_u8().ok()? as f64);
    push_number(decoded, "Program Color Sequence", "", reader.read_u8().ok()? as f64);

    // Enabled flag occupies the low 2 bits; the remaining 6 are reserved.
    let flags = reader.read_u8().ok()?;
    push_number(decoded, "Zone Enabled", "", (flags & 0x03) as f64);
    Some(())
}

//==================================================================================GROUP_FUNCTION
/// PGN 126208: envelope header plus the numbered (field, value) pairs.
/// Pair signals carry an index suffix so repeated entries stay apart.
pub fn decode_group_function(msg: &Message) -> DecodedMessage {
    let mut decoded = DecodedMessage::new("Group Function", "Command/acknowledge envelope");
    let mut reader = msg.reader();
    let _ = read_group_function_fields(&mut reader, &mut decoded);
    decoded
}

fn read_group_function_fields(
    reader: &mut PayloadReader<'_>,
    decoded: &mut DecodedMessage,
) -> Option<()> {
    let code = reader.read_u8().ok()?;
    match GroupFunctionCode::from_u8(code) {
        Some(GroupFunctionCode::Request) => push_enumerated(decoded, "Function Code", "Request"),
        Some(GroupFunctionCode::Command) => push_enumerated(decoded, "Function Code", "Command"),
        Some(GroupFunctionCode::Acknowledge) => {
            push_enumerated(decoded, "Function Code", "Acknowledge")
        }
        None => push_number(decoded, "Function Code", "", code as f64),
    }

    push_number(decoded, "Target PGN", "", reader.read_u24().ok()? as f64);

    // Commands carry a priority-setting byte before the pair count.
    if GroupFunctionCode::from_u8(code) == Some(GroupFunctionCode::Command) {
        push_number(decoded, "Priority Setting", "", reader.read_u8().ok()? as f64);
    }

    let pair_count = reader.read_u8().ok()?;
    push_number(decoded, "Parameter Count", "", pair_count as f64);

    for index in 1..=pair_count as usize {
        let field_no = reader.read_u8().ok()?;
        let value = reader.read_u8().ok()?;

        decoded.push(indexed_signal("Field", index, "Number", field_no as f64));
        decoded.push(indexed_signal("Field", index, "Value", value as f64));
    }
    Some(())
}

fn indexed_signal(prefix: &str, index: usize, suffix: &str, value: f64) -> DecodedSignal {
    let mut name = TextBuf::new();
    let _ = write!(name, "{prefix} {index} {suffix}");
    DecodedSignal {
        name,
        unit: "",
        value: SignalValue::Number(value),
        valid: true,
    }
}

//==================================================================================POCO_PROPRIETARY
/// PGN 61184: dispatch on the proprietary ID through the typed enum and
/// render the matching layout, packed bytes included.
pub fn decode_poco_proprietary(msg: &Message) -> DecodedMessage {
    let Some(raw_id) = poco::proprietary_id(msg) else {
        return DecodedMessage::undecoded();
    };

    let mut decoded =
        DecodedMessage::new("Lumitec Poco Proprietary", "Poco lighting control frame");
    push_enumerated(&mut decoded, "Proprietary ID", proprietary_id_name(raw_id));

    let Some(id) = ProprietaryId::from_u8(raw_id) else {
        return decoded;
    };

    match id {
        ProprietaryId::ExtSwSimpleActions => {
            if let Some(action) = poco::parse_simple_action(msg) {
                push_enumerated(&mut decoded, "Action", action_name(action.action_id));
                push_number(&mut decoded, "Switch ID", "", action.switch_id as f64);
            }
        }
        ProprietaryId::ExtSwStateInfo => {
            if let Some(info) = poco::parse_state_info(msg) {
                push_number(&mut decoded, "Switch ID", "", info.switch_id as f64);
                push_enumerated(&mut decoded, "Switch State", switch_state_name(info.switch_state));
                push_enumerated(&mut decoded, "Switch Type", switch_type_name(info.switch_type));
            }
        }
        ProprietaryId::ExtSwCustomHsb => {
            if let Some(hsb) = poco::parse_custom_hsb(msg) {
                push_enumerated(&mut decoded, "Action", action_name(hsb.action_id));
                push_number(&mut decoded, "Switch ID", "", hsb.switch_id as f64);
                push_number(&mut decoded, "Hue", "", hsb.hue as f64);
                push_number(&mut decoded, "Saturation", "", hsb.saturation as f64);
                push_number(&mut decoded, "Brightness", "", hsb.brightness as f64);
            }
        }
        ProprietaryId::ExtSwStartPattern => {
            if let Some(pattern) = poco::parse_start_pattern(msg) {
                push_number(&mut decoded, "Switch ID", "", pattern.switch_id as f64);
                push_number(&mut decoded, "Pattern ID", "", pattern.pattern_id as f64);
            }
        }
        ProprietaryId::OutputChannelStatus => {
            if let Some(status) = poco::parse_channel_status(msg) {
                push_number(&mut decoded, "Channel", "", status.channel as f64);
                push_enumerated(
                    &mut decoded,
                    "Channel Mode",
                    channel_mode_name(status.channel_mode),
                );
                push_number(&mut decoded, "Output Level", "", status.output_level as f64);
                push_number(&mut decoded, "Input Voltage", "V", status.input_voltage as f64 * 0.2);
                push_number(&mut decoded, "Current", "A", status.current as f64 * 0.1);
            }
        }
        ProprietaryId::OutputChannelBin => {
            if let Some(bin) = poco::parse_channel_bin(msg) {
                push_number(&mut decoded, "Channel", "", bin.channel as f64);
                push_enumerated(
                    &mut decoded,
                    "State",
                    if bin.state != 0 { "On" } else { "Off" },
                );
            }
        }
        ProprietaryId::OutputChannelPwm => {
            if let Some(pwm) = poco::parse_channel_pwm(msg) {
                push_number(&mut decoded, "Channel", "", pwm.channel as f64);
                push_number(&mut decoded, "Duty", "", pwm.duty as f64);
                push_number(&mut decoded, "Transition Time", "", pwm.transition_time as f64);
            }
        }
        ProprietaryId::OutputChannelPli => {
            if let Some(pli) = poco::parse_channel_pli(msg) {
                push_number(&mut decoded, "Channel", "", pli.channel as f64);
                push_number(&mut decoded, "PLI Message", "", pli.pli_message as f64);
            }
        }
        ProprietaryId::OutputChannelPliT2Hsb => {
            if let Some(t2hsb) = poco::parse_channel_pli_t2hsb(msg) {
                push_number(&mut decoded, "Channel", "", t2hsb.channel as f64);
                push_number(&mut decoded, "PLI Clan", "", t2hsb.pli_clan as f64);
                push_number(&mut decoded, "Transition", "", t2hsb.transition as f64);
                push_number(&mut decoded, "Brightness", "", t2hsb.brightness as f64);
                push_number(&mut decoded, "Hue", "", t2hsb.hue as f64);
                push_number(&mut decoded, "Saturation", "", t2hsb.saturation as f64);
            }
        }
    }
    decoded
}

//==================================================================================TESTS
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
