//! Static message descriptors for the standard PGNs the decode engine
//! understands out of the box. Layouts follow the NMEA 2000 field tables;
//! every entry respects the data contract in [`crate::core`].
use crate::core::{MessageDef, SignalDef};

const fn signal(
    name: &'static str,
    start_bit: u32,
    bit_length: u32,
    is_signed: bool,
    scale: f64,
    offset: f64,
    min: f64,
    max: f64,
    unit: &'static str,
    enum_table: &'static [(u64, &'static str)],
) -> SignalDef {
    SignalDef {
        name,
        start_bit,
        bit_length,
        is_signed,
        scale,
        offset,
        min,
        max,
        unit,
        enum_table,
    }
}

//==================================================================================PGN_127488
static ENGINE_RAPID_SIGNALS: [SignalDef; 4] = [
    signal("Engine Instance", 0, 8, false, 1.0, 0.0, 0.0, 251.0, "", &[]),
    signal("Engine Speed", 8, 16, false, 0.25, 0.0, 0.0, 16383.75, "rpm", &[]),
    signal(
        "Engine Boost Pressure",
        24,
        16,
        false,
        100.0,
        0.0,
        0.0,
        6_553_500.0,
        "Pa",
        &[],
    ),
    signal("Engine Tilt/Trim", 40, 8, true, 1.0, 0.0, -125.0, 125.0, "%", &[]),
];

static ENGINE_RAPID: MessageDef = MessageDef {
    pgn: 127488,
    name: "Engine Parameters, Rapid Update",
    description: "High frequency engine data",
    dlc: 8,
    signals: &ENGINE_RAPID_SIGNALS,
};

//==================================================================================PGN_127508
static BATTERY_STATUS_SIGNALS: [SignalDef; 4] = [
    signal("Battery Instance", 0, 8, false, 1.0, 0.0, 0.0, 252.0, "", &[]),
    signal("Battery Voltage", 8, 16, false, 0.01, 0.0, 0.0, 655.34, "V", &[]),
    signal(
        "Battery Current",
        24,
        16,
        true,
        0.1,
        0.0,
        -3276.7,
        3276.6,
        "A",
        &[],
    ),
    signal(
        "Battery Temperature",
        40,
        16,
        false,
        0.01,
        -273.15,
        -273.15,
        381.85,
        "K",
        &[],
    ),
];

static BATTERY_STATUS: MessageDef = MessageDef {
    pgn: 127508,
    name: "Battery Status",
    description: "DC battery status information",
    dlc: 8,
    signals: &BATTERY_STATUS_SIGNALS,
};

//==================================================================================PGN_129025
static POSITION_RAPID_SIGNALS: [SignalDef; 2] = [
    signal(
        "Latitude",
        0,
        32,
        true,
        1e-7,
        0.0,
        -214.748_364_7,
        214.748_364_6,
        "deg",
        &[],
    ),
    signal(
        "Longitude",
        32,
        32,
        true,
        1e-7,
        0.0,
        -214.748_364_7,
        214.748_364_6,
        "deg",
        &[],
    ),
];

static POSITION_RAPID: MessageDef = MessageDef {
    pgn: 129025,
    name: "Position, Rapid Update",
    description: "GPS position data at high frequency",
    dlc: 8,
    signals: &POSITION_RAPID_SIGNALS,
};

//==================================================================================PGN_130306
static WIND_REFERENCE_VALUES: [(u64, &str); 5] = [
    (0, "True (ground referenced to North)"),
    (1, "Magnetic (ground referenced to Magnetic North)"),
    (2, "Apparent"),
    (3, "True (boat referenced)"),
    (4, "True (water referenced)"),
];

static WIND_DATA_SIGNALS: [SignalDef; 4] = [
    signal("SID", 0, 8, false, 1.0, 0.0, 0.0, 252.0, "", &[]),
    signal("Wind Speed", 8, 16, false, 0.01, 0.0, 0.0, 655.34, "m/s", &[]),
    signal(
        "Wind Direction",
        24,
        16,
        false,
        0.0001,
        0.0,
        0.0,
        6.2831,
        "rad",
        &[],
    ),
    signal(
        "Wind Reference",
        40,
        3,
        false,
        1.0,
        0.0,
        0.0,
        7.0,
        "",
        &WIND_REFERENCE_VALUES,
    ),
];

static WIND_DATA: MessageDef = MessageDef {
    pgn: 130306,
    name: "Wind Data",
    description: "Wind speed and direction",
    dlc: 6,
    signals: &WIND_DATA_SIGNALS,
};

//==================================================================================PGN_130312
static TEMPERATURE_SOURCE_VALUES: [(u64, &str); 15] = [
    (0, "Sea Temperature"),
    (1, "Outside Temperature"),
    (2, "Inside Temperature"),
    (3, "Engine Room Temperature"),
    (4, "Main Cabin Temperature"),
    (5, "Live Well Temperature"),
    (6, "Bait Well Temperature"),
    (7, "Refrigeration Temperature"),
    (8, "Heating System Temperature"),
    (9, "Dewpoint Temperature"),
    (10, "Apparent Wind Chill Temperature"),
    (11, "Theoretical Wind Chill Temperature"),
    (12, "Heat Index Temperature"),
    (13, "Freezer Temperature"),
    (14, "Exhaust Gas Temperature"),
];

static TEMPERATURE_SIGNALS: [SignalDef; 5] = [
    signal("SID", 0, 8, false, 1.0, 0.0, 0.0, 252.0, "", &[]),
    signal(
        "Temperature Instance",
        8,
        8,
        false,
        1.0,
        0.0,
        0.0,
        252.0,
        "",
        &[],
    ),
    signal(
        "Temperature Source",
        16,
        8,
        false,
        1.0,
        0.0,
        0.0,
        252.0,
        "",
        &TEMPERATURE_SOURCE_VALUES,
    ),
    signal(
        "Actual Temperature",
        24,
        16,
        false,
        0.01,
        -273.15,
        -273.15,
        381.85,
        "K",
        &[],
    ),
    signal(
        "Set Temperature",
        40,
        16,
        false,
        0.01,
        -273.15,
        -273.15,
        381.85,
        "K",
        &[],
    ),
];

static TEMPERATURE: MessageDef = MessageDef {
    pgn: 130312,
    name: "Temperature",
    description: "Temperature measurement",
    dlc: 8,
    signals: &TEMPERATURE_SIGNALS,
};

//==================================================================================REGISTRY
/// Looks up the descriptor registered for a PGN.
pub fn message_def(pgn: u32) -> Option<&'static MessageDef> {
    match pgn {
        127488 => Some(&ENGINE_RAPID),
        127508 => Some(&BATTERY_STATUS),
        129025 => Some(&POSITION_RAPID),
        130306 => Some(&WIND_DATA),
        130312 => Some(&TEMPERATURE),
        _ => None,
    }
}

//==================================================================================TESTS
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
