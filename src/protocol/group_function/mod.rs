//! Command/acknowledge envelope over PGN 126208 used to configure the zone
//! lighting PGN 130561. A command names its target PGN and carries numbered
//! (field, value) pairs; the device answers with an acknowledge whose first
//! parameter encodes the outcome.
use crate::core::TextBuf;
use crate::error::MessageError;
use crate::protocol::transport::message::Message;

/// NMEA 2000 Group Function PGN.
pub const GROUP_FUNCTION_PGN: u32 = 126208;
/// Zone lighting control PGN targeted by the commands below.
pub const ZONE_LIGHTING_PGN: u32 = 130561;
/// Priority-setting byte meaning "leave the priority unchanged".
const PRIORITY_NO_CHANGE: u8 = 0x08;
const GROUP_FUNCTION_PRIORITY: u8 = 3;

//==================================================================================CODES
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Function code in byte 0 of every group function message.
pub enum GroupFunctionCode {
    Request = 0,
    Command = 1,
    Acknowledge = 2,
}

impl GroupFunctionCode {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Request),
            1 => Some(Self::Command),
            2 => Some(Self::Acknowledge),
            _ => None,
        }
    }
}

/// Field numbers of PGN 130561 addressable through a command.
pub mod zone_field {
    pub const ZONE_ID: u8 = 1;
    pub const ZONE_NAME: u8 = 2;
    pub const RED: u8 = 3;
    pub const GREEN: u8 = 4;
    pub const BLUE: u8 = 5;
    pub const COLOR_TEMP: u8 = 6;
    pub const INTENSITY: u8 = 7;
    pub const PROGRAM_ID: u8 = 8;
    pub const PROGRAM_COLOR_SEQ_INDEX: u8 = 9;
    pub const PROGRAM_INTENSITY: u8 = 10;
    pub const PROGRAM_RATE: u8 = 11;
    pub const PROGRAM_COLOR_SEQUENCE: u8 = 12;
    pub const ZONE_ENABLED: u8 = 13;
}

//==================================================================================ZONE_CONTROL
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Full parameter set of one lighting zone.
pub struct ZoneLightingControl {
    pub zone_id: u8,
    pub zone_name: TextBuf,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// Kelvin.
    pub color_temp: u16,
    pub intensity: u8,
    pub program_id: u8,
    pub program_color_seq_index: u8,
    pub program_intensity: u8,
    pub program_rate: u8,
    pub program_color_sequence: u8,
    pub zone_enabled: bool,
}

//==================================================================================BUILDERS
fn command_message(destination: u8, source: u8, pair_count: u8) -> Result<Message, MessageError> {
    let mut msg = Message::new(GROUP_FUNCTION_PGN, source, destination, GROUP_FUNCTION_PRIORITY);
    msg.add_u8(GroupFunctionCode::Command as u8)?;
    msg.add_u24(ZONE_LIGHTING_PGN)?;
    msg.add_u8(PRIORITY_NO_CHANGE)?;
    msg.add_u8(pair_count)?;
    Ok(msg)
}

/// Command setting every field of one zone (13 pairs).
pub fn create_zone_lighting_command(
    destination: u8,
    source: u8,
    control: &ZoneLightingControl,
) -> Result<Message, MessageError> {
    let mut msg = command_message(destination, source, 13)?;

    msg.add_u8(zone_field::ZONE_ID)?;
    msg.add_u8(control.zone_id)?;

    // The zone name travels as a length-prefixed string.
    msg.add_u8(zone_field::ZONE_NAME)?;
    msg.add_u8(control.zone_name.len() as u8)?;
    msg.add_slice(control.zone_name.as_bytes())?;

    msg.add_u8(zone_field::RED)?;
    msg.add_u8(control.red)?;
    msg.add_u8(zone_field::GREEN)?;
    msg.add_u8(control.green)?;
    msg.add_u8(zone_field::BLUE)?;
    msg.add_u8(control.blue)?;

    msg.add_u8(zone_field::COLOR_TEMP)?;
    msg.add_u16(control.color_temp)?;

    msg.add_u8(zone_field::INTENSITY)?;
    msg.add_u8(control.intensity)?;
    msg.add_u8(zone_field::PROGRAM_ID)?;
    msg.add_u8(control.program_id)?;
    msg.add_u8(zone_field::PROGRAM_COLOR_SEQ_INDEX)?;
    msg.add_u8(control.program_color_seq_index)?;
    msg.add_u8(zone_field::PROGRAM_INTENSITY)?;
    msg.add_u8(control.program_intensity)?;
    msg.add_u8(zone_field::PROGRAM_RATE)?;
    msg.add_u8(control.program_rate)?;
    msg.add_u8(zone_field::PROGRAM_COLOR_SEQUENCE)?;
    msg.add_u8(control.program_color_sequence)?;

    msg.add_u8(zone_field::ZONE_ENABLED)?;
    msg.add_u8(control.zone_enabled as u8)?;

    Ok(msg)
}

/// Terse command touching only the enable flag of one zone (2 pairs).
pub fn create_zone_enable_command(
    destination: u8,
    source: u8,
    zone_id: u8,
    enabled: bool,
) -> Result<Message, MessageError> {
    let mut msg = command_message(destination, source, 2)?;
    msg.add_u8(zone_field::ZONE_ID)?;
    msg.add_u8(zone_id)?;
    msg.add_u8(zone_field::ZONE_ENABLED)?;
    msg.add_u8(enabled as u8)?;
    Ok(msg)
}

/// Acknowledge for a received command. A zero `result` reports success.
pub fn create_acknowledgement(
    destination: u8,
    source: u8,
    target_pgn: u32,
    result: u8,
) -> Result<Message, MessageError> {
    let mut msg = Message::new(GROUP_FUNCTION_PGN, source, destination, GROUP_FUNCTION_PRIORITY);
    msg.add_u8(GroupFunctionCode::Acknowledge as u8)?;
    msg.add_u24(target_pgn)?;
    msg.add_u8(1)?; // One result parameter
    msg.add_u8(result)?;
    Ok(msg)
}

//==================================================================================ACK_PARSING
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Parsed acknowledge: which PGN it answers for and the first result code.
pub struct GroupFunctionAck {
    pub target_pgn: u32,
    pub result: u8,
}

impl GroupFunctionAck {
    pub fn is_success(&self) -> bool {
        self.result == 0
    }
}

/// Extracts an acknowledge from a group function message.
/// Returns `None` for other function codes or malformed payloads.
pub fn parse_acknowledgement(msg: &Message) -> Option<GroupFunctionAck> {
    if msg.pgn != GROUP_FUNCTION_PGN {
        return None;
    }
    let mut reader = msg.reader();
    let code = GroupFunctionCode::from_u8(reader.read_u8().ok()?)?;
    if code != GroupFunctionCode::Acknowledge {
        return None;
    }
    let target_pgn = reader.read_u24().ok()?;
    let param_count = reader.read_u8().ok()?;
    if param_count == 0 {
        return None;
    }
    let result = reader.read_u8().ok()?;
    Some(GroupFunctionAck { target_pgn, result })
}
