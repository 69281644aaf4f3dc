//! Generic signal decode engine driven by compile-time message descriptors.
//! It controls the bit-level reader and turns raw payloads into decoded
//! signal lists, applying signedness, availability sentinels, scaling, and
//! enumerated value substitution.
use super::bits::BitReader;
use crate::core::{DecodedMessage, DecodedSignal, MessageDef, SignalDef, SignalValue};
use crate::error::DecodeError;

/// Scaled values above this threshold on a Celsius signal indicate a raw
/// field that carries hundredths of Kelvin instead of the declared unit.
const CELSIUS_PLAUSIBILITY_LIMIT: f64 = 200.0;

/// Decodes a full payload against a message descriptor.
///
/// Every signal is attempted independently; a signal whose bit range falls
/// outside the payload is reported as "not available" without aborting the
/// remaining signals. The result is built fresh on each call.
pub fn decode_with(descriptor: &'static MessageDef, payload: &[u8]) -> DecodedMessage {
    let mut decoded = DecodedMessage::new(descriptor.name, descriptor.description);
    for signal_def in descriptor.signals {
        decoded.push(decode_signal(payload, signal_def));
    }
    decoded
}

/// Decodes a single signal from a payload.
pub fn decode_signal(payload: &[u8], def: &'static SignalDef) -> DecodedSignal {
    let raw = match extract_raw(payload, def) {
        Ok(raw) => raw,
        Err(_) => return DecodedSignal::not_available(def.name, def.unit),
    };

    let numeric = if def.is_signed {
        sign_extend(raw, def.bit_length) as f64
    } else {
        raw as f64
    };

    // Reserved-band markers win over everything, enum entries included.
    if !is_available(numeric, def.bit_length) {
        return DecodedSignal::not_available(def.name, def.unit);
    }

    // Enumerated tables key off the raw integer, before any scaling.
    if let Ok(idx) = def.enum_table.binary_search_by_key(&raw, |entry| entry.0) {
        return DecodedSignal::new(
            def.name,
            def.unit,
            SignalValue::Enumerated(def.enum_table[idx].1),
            true,
        );
    }

    let mut value = numeric * def.scale + def.offset;

    // Some senders put hundredths of Kelvin into fields declared in Celsius.
    // A reading past the plausibility limit is reinterpreted accordingly.
    if def.unit == "°C" && value > CELSIUS_PLAUSIBILITY_LIMIT {
        value = numeric * 0.01 - 273.15;
    }

    DecodedSignal::new(def.name, def.unit, SignalValue::Number(value), true)
}

/// Extracts the raw unsigned field value described by `def`.
///
/// Byte-aligned fields take a direct little-endian byte loop; everything
/// else goes through the bit reader positioned at the signal's start bit.
pub fn extract_raw(payload: &[u8], def: &'static SignalDef) -> Result<u64, DecodeError> {
    if !(1..=64).contains(&def.bit_length) {
        return Err(DecodeError::InvalidBitLength {
            bit_length: def.bit_length,
        });
    }

    let payload_bits = payload.len() * 8;
    if def.start_bit as usize + def.bit_length as usize > payload_bits {
        return Err(DecodeError::SignalPastEnd {
            start_bit: def.start_bit,
            bit_length: def.bit_length,
            payload_bits,
        });
    }

    if def.start_bit % 8 == 0 && def.bit_length % 8 == 0 {
        // Aligned fast path: assemble whole bytes little-endian.
        let first = (def.start_bit / 8) as usize;
        let count = (def.bit_length / 8) as usize;
        let mut raw: u64 = 0;
        for i in 0..count {
            raw |= (payload[first + i] as u64) << (8 * i);
        }
        return Ok(raw);
    }

    let mut reader = BitReader::at(payload, def.start_bit as usize);
    Ok(reader.read_u64(def.bit_length as u8)?)
}

/// Two's complement helper.
/// Extends the sign of a value read on a limited number of bits.
/// If the sign bit is set, the function propagates it across the `i64` tail
/// to rebuild the negative value.
pub fn sign_extend(value: u64, bits: u32) -> i64 {
    // Reading the full 64 bits already yields the correct representation.
    if bits >= 64 {
        return value as i64;
    }

    // Locate the sign bit.
    let sign_bit_mask = 1u64 << (bits - 1);

    // Check whether the sign bit is set.
    if (value & sign_bit_mask) != 0 {
        // Extend the sign by filling the upper bits with ones.
        let extension_mask = u64::MAX << bits;
        (value | extension_mask) as i64
    } else {
        // Positive values are returned as-is.
        value as i64
    }
}

/// NMEA 2000 reserves the top of each unsigned range for "not available"
/// and error markers. Values inside that band must not be scaled.
fn is_available(numeric: f64, bit_length: u32) -> bool {
    match bit_length {
        8 => numeric < 250.0,
        16 => numeric < 65_530.0,
        32 => numeric < 4_294_967_290.0,
        _ => true,
    }
}

//==================================================================================TESTS
