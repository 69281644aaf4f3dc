//! Codec for the Lumitec Poco lighting protocol carried by the proprietary
//! PGN 61184. Covers the external-switch messages (simple action, state
//! info, custom HSB, start pattern) and the output-channel messages
//! (status, binary, PWM, PLI, PLI T2HSB).
//!
//! Every message opens with the two-byte vendor header packing the
//! manufacturer code (11 bits) and the industry code (3 bits), followed by
//! the proprietary ID byte selecting the layout.
use crate::error::MessageError;
use crate::protocol::transport::can_id::BROADCAST_ADDRESS;
use crate::protocol::transport::message::Message;

/// Lumitec manufacturer code registered with NMEA.
pub const LUMITEC_MANUFACTURER_CODE: u16 = 1512;
/// Marine industry group.
pub const MARINE_INDUSTRY_CODE: u8 = 4;
/// Single-frame addressable proprietary PGN.
pub const LUMITEC_PGN: u32 = 61184;
/// Priority used by every Poco frame.
const POCO_PRIORITY: u8 = 6;

//==================================================================================VENDOR_HEADER
/// Packs manufacturer and industry codes into the combined header word.
/// Bits 11..13 stay clear (reserved).
pub fn pack_vendor_header(manufacturer: u16, industry: u8) -> u16 {
    (manufacturer & 0x7FF) | ((industry as u16 & 0x07) << 13)
}

/// Splits the combined header word back into (manufacturer, industry).
pub fn unpack_vendor_header(combined: u16) -> (u16, u8) {
    (combined & 0x7FF, ((combined >> 13) & 0x07) as u8)
}

/// Checks PGN, minimum length, and vendor header.
pub fn is_poco_frame(msg: &Message) -> bool {
    if msg.pgn != LUMITEC_PGN || msg.len() < 3 {
        return false;
    }
    let data = msg.data();
    let (manufacturer, industry) = unpack_vendor_header(u16::from_le_bytes([data[0], data[1]]));
    manufacturer == LUMITEC_MANUFACTURER_CODE && industry == MARINE_INDUSTRY_CODE
}

/// Proprietary ID byte of a validated Poco frame.
pub fn proprietary_id(msg: &Message) -> Option<u8> {
    if is_poco_frame(msg) {
        Some(msg.data()[2])
    } else {
        None
    }
}

//==================================================================================ENUMS
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Layout selector carried in byte 2 of every Poco frame.
pub enum ProprietaryId {
    ExtSwSimpleActions = 1,
    ExtSwStateInfo = 2,
    ExtSwCustomHsb = 3,
    ExtSwStartPattern = 4,
    OutputChannelStatus = 5,
    OutputChannelBin = 6,
    OutputChannelPwm = 7,
    OutputChannelPli = 8,
    OutputChannelPliT2Hsb = 16,
}

impl ProprietaryId {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::ExtSwSimpleActions),
            2 => Some(Self::ExtSwStateInfo),
            3 => Some(Self::ExtSwCustomHsb),
            4 => Some(Self::ExtSwStartPattern),
            5 => Some(Self::OutputChannelStatus),
            6 => Some(Self::OutputChannelBin),
            7 => Some(Self::OutputChannelPwm),
            8 => Some(Self::OutputChannelPli),
            16 => Some(Self::OutputChannelPliT2Hsb),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// External switch action identifiers. Values 33..=65 select scenes
/// On[1]..On[33] and have no enum variant of their own.
pub enum ActionId {
    NoAction = 0,
    Off = 1,
    On = 2,
    DimDown = 3,
    DimUp = 4,
    PatternStart = 6,
    PatternPause = 7,
    T2Hsb = 8,
    T2Hs = 9,
    T2B = 10,
    White = 20,
    Red = 21,
    Green = 22,
    Blue = 23,
    PlayPause = 31,
    Toggle = 32,
}

/// First of the scene-select action values (On[1]).
pub const ACTION_ON_SCENE_START: u8 = 33;
/// Last scene-select action value (On[33]).
pub const ACTION_ON_SCENE_END: u8 = 65;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Momentary state of an external switch.
pub enum SwitchState {
    Released = 0,
    Pressed = 1,
    Held = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Configured role of an external switch.
pub enum SwitchType {
    Off = 0,
    HueSaturation = 1,
    WhiteKelvin = 2,
    RunningPattern = 3,
    SceneSelect = 4,
    NotConfigured = 253,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Drive mode of a Poco output channel.
pub enum ChannelMode {
    None = 0,
    Bin = 1,
    Pwm = 2,
    Pli = 3,
}

//==================================================================================NAMES
/// Display name for an action ID. Scene selections (33..=65) share one
/// label since the index cannot live in a static string.
pub fn action_name(action_id: u8) -> &'static str {
    match action_id {
        0 => "No Action",
        1 => "Off",
        2 => "On",
        3 => "Dim Down",
        4 => "Dim Up",
        6 => "Pattern Start",
        7 => "Pattern Pause",
        8 => "To HSB",
        9 => "To HS",
        10 => "To Brightness",
        20 => "White",
        21 => "Red",
        22 => "Green",
        23 => "Blue",
        31 => "Play/Pause",
        32 => "Toggle",
        ACTION_ON_SCENE_START..=ACTION_ON_SCENE_END => "Scene Select",
        _ => "Unknown",
    }
}

/// Display name for an external switch state.
pub fn switch_state_name(state: u8) -> &'static str {
    match state {
        0 => "Released",
        1 => "Pressed",
        2 => "Held",
        _ => "Unknown",
    }
}

/// Display name for an external switch type.
pub fn switch_type_name(switch_type: u8) -> &'static str {
    match switch_type {
        0 => "Off",
        1 => "Hue/Saturation",
        2 => "White Kelvin",
        3 => "Running Pattern",
        4 => "Scene Select",
        253 => "Not Configured",
        _ => "Unknown",
    }
}

/// Display name for an output channel mode.
pub fn channel_mode_name(mode: u8) -> &'static str {
    match mode {
        0 => "None/Off",
        1 => "Binary On/Off",
        2 => "PWM Dimming",
        3 => "PLI",
        _ => "Unknown",
    }
}

/// Display name for a proprietary ID byte.
pub fn proprietary_id_name(id: u8) -> &'static str {
    match ProprietaryId::from_u8(id) {
        Some(ProprietaryId::ExtSwSimpleActions) => "ExtSw Simple Actions",
        Some(ProprietaryId::ExtSwStateInfo) => "ExtSw State Info",
        Some(ProprietaryId::ExtSwCustomHsb) => "ExtSw Custom HSB",
        Some(ProprietaryId::ExtSwStartPattern) => "ExtSw Start Pattern",
        Some(ProprietaryId::OutputChannelStatus) => "Output Channel Status",
        Some(ProprietaryId::OutputChannelBin) => "Output Channel Binary",
        Some(ProprietaryId::OutputChannelPwm) => "Output Channel PWM",
        Some(ProprietaryId::OutputChannelPli) => "Output Channel PLI",
        Some(ProprietaryId::OutputChannelPliT2Hsb) => "Output Channel PLI T2HSB",
        None => "Unknown",
    }
}

//==================================================================================BUILDERS
fn poco_message(destination: u8, source: u8, id: ProprietaryId) -> Result<Message, MessageError> {
    let mut msg = Message::new(LUMITEC_PGN, source, destination, POCO_PRIORITY);
    msg.add_u16(pack_vendor_header(
        LUMITEC_MANUFACTURER_CODE,
        MARINE_INDUSTRY_CODE,
    ))?;
    msg.add_u8(id as u8)?;
    Ok(msg)
}

/// External switch simple action (proprietary ID 1, 6 bytes).
pub fn create_simple_action(
    destination: u8,
    source: u8,
    action_id: u8,
    switch_id: u8,
) -> Result<Message, MessageError> {
    let mut msg = poco_message(destination, source, ProprietaryId::ExtSwSimpleActions)?;
    msg.add_u8(action_id)?;
    msg.add_u8(switch_id)?;
    msg.add_u8(0)?; // Reserved
    Ok(msg)
}

/// External switch state information (proprietary ID 2, 7 bytes, broadcast).
pub fn create_state_info(
    source: u8,
    switch_id: u8,
    switch_state: u8,
    switch_type: u8,
) -> Result<Message, MessageError> {
    let mut msg = poco_message(BROADCAST_ADDRESS, source, ProprietaryId::ExtSwStateInfo)?;
    msg.add_u8(switch_id)?;
    msg.add_u8(switch_state)?;
    msg.add_u8(switch_type)?;
    msg.add_u8(0)?; // Reserved
    Ok(msg)
}

/// External switch custom hue/saturation/brightness (proprietary ID 3, 8 bytes).
#[allow(clippy::too_many_arguments)]
pub fn create_custom_hsb(
    destination: u8,
    source: u8,
    action_id: u8,
    switch_id: u8,
    hue: u8,
    saturation: u8,
    brightness: u8,
) -> Result<Message, MessageError> {
    let mut msg = poco_message(destination, source, ProprietaryId::ExtSwCustomHsb)?;
    msg.add_u8(action_id)?;
    msg.add_u8(switch_id)?;
    msg.add_u8(hue)?;
    msg.add_u8(saturation)?;
    msg.add_u8(brightness)?;
    Ok(msg)
}

/// External switch start pattern (proprietary ID 4, 6 bytes).
pub fn create_start_pattern(
    destination: u8,
    source: u8,
    switch_id: u8,
    pattern_id: u8,
) -> Result<Message, MessageError> {
    let mut msg = poco_message(destination, source, ProprietaryId::ExtSwStartPattern)?;
    msg.add_u8(switch_id)?;
    msg.add_u8(pattern_id)?;
    msg.add_u8(0)?; // Reserved
    Ok(msg)
}

/// Output channel status (proprietary ID 5, 9 bytes, broadcast).
/// Voltage is reported in 200 mV units and current in 100 mA units.
pub fn create_channel_status(
    source: u8,
    channel: u8,
    channel_mode: u8,
    output_level: u8,
    input_voltage: u8,
    current: u8,
) -> Result<Message, MessageError> {
    let mut msg = poco_message(BROADCAST_ADDRESS, source, ProprietaryId::OutputChannelStatus)?;
    msg.add_u8(channel)?;
    msg.add_u8(channel_mode)?;
    msg.add_u8(output_level)?;
    msg.add_u8(input_voltage)?;
    msg.add_u8(current)?;
    msg.add_u8(0)?; // Reserved
    Ok(msg)
}

/// Output channel binary on/off (proprietary ID 6, 6 bytes).
pub fn create_channel_bin(
    destination: u8,
    source: u8,
    channel: u8,
    state: u8,
) -> Result<Message, MessageError> {
    let mut msg = poco_message(destination, source, ProprietaryId::OutputChannelBin)?;
    msg.add_u8(channel)?;
    msg.add_u8(state)?;
    msg.add_u8(0)?; // Reserved
    Ok(msg)
}

/// Output channel PWM dimming (proprietary ID 7, 8 bytes).
pub fn create_channel_pwm(
    destination: u8,
    source: u8,
    channel: u8,
    duty: u8,
    transition_time: u16,
) -> Result<Message, MessageError> {
    let mut msg = poco_message(destination, source, ProprietaryId::OutputChannelPwm)?;
    msg.add_u8(channel)?;
    msg.add_u8(duty)?;
    msg.add_u16(transition_time)?;
    Ok(msg)
}

/// Output channel PLI message (proprietary ID 8, 9 bytes).
pub fn create_channel_pli(
    destination: u8,
    source: u8,
    channel: u8,
    pli_message: u32,
) -> Result<Message, MessageError> {
    let mut msg = poco_message(destination, source, ProprietaryId::OutputChannelPli)?;
    msg.add_u8(channel)?;
    msg.add_u32(pli_message)?;
    msg.add_u8(0)?; // Reserved
    Ok(msg)
}

/// Output channel PLI T2HSB (proprietary ID 16, 8 bytes).
/// Clan/transition, brightness/hue, and hue/saturation share packed bytes.
#[allow(clippy::too_many_arguments)]
pub fn create_channel_pli_t2hsb(
    destination: u8,
    source: u8,
    channel: u8,
    pli_clan: u8,
    transition: u8,
    brightness: u8,
    hue: u8,
    saturation: u8,
) -> Result<Message, MessageError> {
    let mut msg = poco_message(destination, source, ProprietaryId::OutputChannelPliT2Hsb)?;
    msg.add_u8(channel)?;
    msg.add_u8((pli_clan & 0x3F) | (((transition as u16 & 0x07) << 6) as u8))?;
    msg.add_u8((brightness & 0x0F) | (hue & 0xF0))?;
    msg.add_u8(((hue & 0x0F) << 4) | ((saturation & 0x07) << 1))?;
    msg.add_u8(0)?; // Reserved
    Ok(msg)
}

//==================================================================================PARSED_STRUCTS
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SimpleAction {
    pub action_id: u8,
    pub switch_id: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StateInfo {
    pub switch_id: u8,
    pub switch_state: u8,
    pub switch_type: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CustomHsb {
    pub action_id: u8,
    pub switch_id: u8,
    pub hue: u8,
    pub saturation: u8,
    pub brightness: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StartPattern {
    pub switch_id: u8,
    pub pattern_id: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelStatus {
    pub channel: u8,
    pub channel_mode: u8,
    pub output_level: u8,
    /// 200 mV units.
    pub input_voltage: u8,
    /// 100 mA units.
    pub current: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelBin {
    pub channel: u8,
    pub state: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelPwm {
    pub channel: u8,
    pub duty: u8,
    pub transition_time: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelPli {
    pub channel: u8,
    pub pli_message: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelPliT2Hsb {
    pub channel: u8,
    pub pli_clan: u8,
    pub transition: u8,
    pub brightness: u8,
    pub hue: u8,
    pub saturation: u8,
}

//==================================================================================PARSERS
fn checked_payload(msg: &Message, id: ProprietaryId, min_len: usize) -> Option<&[u8]> {
    if proprietary_id(msg)? != id as u8 || msg.len() < min_len {
        return None;
    }
    Some(msg.data())
}

pub fn parse_simple_action(msg: &Message) -> Option<SimpleAction> {
    let data = checked_payload(msg, ProprietaryId::ExtSwSimpleActions, 6)?;
    Some(SimpleAction {
        action_id: data[3],
        switch_id: data[4],
    })
}

pub fn parse_state_info(msg: &Message) -> Option<StateInfo> {
    let data = checked_payload(msg, ProprietaryId::ExtSwStateInfo, 7)?;
    Some(StateInfo {
        switch_id: data[3],
        switch_state: data[4],
        switch_type: data[5],
    })
}

pub fn parse_custom_hsb(msg: &Message) -> Option<CustomHsb> {
    let data = checked_payload(msg, ProprietaryId::ExtSwCustomHsb, 8)?;
    Some(CustomHsb {
        action_id: data[3],
        switch_id: data[4],
        hue: data[5],
        saturation: data[6],
        brightness: data[7],
    })
}

pub fn parse_start_pattern(msg: &Message) -> Option<StartPattern> {
    let data = checked_payload(msg, ProprietaryId::ExtSwStartPattern, 6)?;
    Some(StartPattern {
        switch_id: data[3],
        pattern_id: data[4],
    })
}

pub fn parse_channel_status(msg: &Message) -> Option<ChannelStatus> {
    let data = checked_payload(msg, ProprietaryId::OutputChannelStatus, 8)?;
    Some(ChannelStatus {
        channel: data[3],
        channel_mode: data[4],
        output_level: data[5],
        input_voltage: data[6],
        current: data[7],
    })
}

pub fn parse_channel_bin(msg: &Message) -> Option<ChannelBin> {
    let data = checked_payload(msg, ProprietaryId::OutputChannelBin, 5)?;
    Some(ChannelBin {
        channel: data[3],
        state: data[4],
    })
}

pub fn parse_channel_pwm(msg: &Message) -> Option<ChannelPwm> {
    let data = checked_payload(msg, ProprietaryId::OutputChannelPwm, 7)?;
    Some(ChannelPwm {
        channel: data[3],
        duty: data[4],
        transition_time: u16::from_le_bytes([data[5], data[6]]),
    })
}

pub fn parse_channel_pli(msg: &Message) -> Option<ChannelPli> {
    let data = checked_payload(msg, ProprietaryId::OutputChannelPli, 8)?;
    Some(ChannelPli {
        channel: data[3],
        pli_message: u32::from_le_bytes([data[4], data[5], data[6], data[7]]),
    })
}

pub fn parse_channel_pli_t2hsb(msg: &Message) -> Option<ChannelPliT2Hsb> {
    let data = checked_payload(msg, ProprietaryId::OutputChannelPliT2Hsb, 7)?;
    let packed1 = data[4];
    let packed2 = data[5];
    let packed3 = data[6];
    Some(ChannelPliT2Hsb {
        channel: data[3],
        pli_clan: packed1 & 0x3F,
        transition: (packed1 >> 6) & 0x07,
        brightness: packed2 & 0x0F,
        hue: (packed2 & 0xF0) | ((packed3 >> 4) & 0x0F),
        saturation: (packed3 >> 1) & 0x07,
    })
}
