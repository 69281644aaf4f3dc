//! Defines the "data contract" between the static signal tables and the
//! decode engine (the interpreter).
//!
//! The `protocol::messages` module provides static descriptors that follow
//! this contract. The `infra::codec::engine` module consumes those
//! descriptors to turn raw payloads into decoded signal lists.

use core::fmt;

/// Maximum payload carried by one assembled message (Fast Packet limit).
pub const MAX_MESSAGE_PAYLOAD: usize = 223;

/// Capacity of the inline text buffer used for decoded strings and
/// synthesized signal names (zone names are capped at 32 bytes on the wire).
pub const MAX_TEXT_BYTES: usize = 32;

/// Maximum number of signals a single decoded message can carry.
/// Sized for the group-function pair list worst case.
pub const MAX_DECODED_SIGNALS: usize = 40;

//==================================================================================SIGNAL_DEF

/// Descriptor for a single signal within a message layout.
/// Mirrors the DBC `SG_` attributes used by industry CAN decoders.
#[derive(Debug)]
pub struct SignalDef {
    /// Human-readable signal name.
    pub name: &'static str,
    /// Absolute bit offset of the least significant bit.
    pub start_bit: u32,
    /// Field bit length, 1 to 64.
    pub bit_length: u32,
    /// Two's-complement interpretation when set.
    pub is_signed: bool,
    /// Multiplier applied to the raw value.
    pub scale: f64,
    /// Offset added after scaling.
    pub offset: f64,
    /// Lower bound of the physical range (documentation, not enforced).
    pub min: f64,
    /// Upper bound of the physical range (documentation, not enforced).
    pub max: f64,
    /// Physical unit (e.g. "V", "rpm", "rad").
    pub unit: &'static str,
    /// Enumerated value table; raw integer hits replace the numeric value.
    pub enum_table: &'static [(u64, &'static str)],
}

/// Descriptor for an entire message layout.
#[derive(Debug)]
pub struct MessageDef {
    /// Parameter Group Number this layout decodes.
    pub pgn: u32,
    /// Message name (diagnostics and display).
    pub name: &'static str,
    /// User-facing description.
    pub description: &'static str,
    /// Expected payload length in bytes.
    pub dlc: usize,
    /// Ordered signal descriptors.
    pub signals: &'static [SignalDef],
}

//==================================================================================TEXT_BUF

/// Fixed-capacity byte string. Stores decoded payload text (zone names) and
/// synthesized per-index signal names without allocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextBuf {
    pub len: usize,
    pub data: [u8; MAX_TEXT_BYTES],
}

impl Default for TextBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuf {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self {
            len: 0,
            data: [0; MAX_TEXT_BYTES],
        }
    }

    /// Build a buffer from a string slice, truncating at capacity.
    pub fn from_str(s: &str) -> Self {
        let mut buf = Self::new();
        buf.copy_from_slice(s.as_bytes());
        buf
    }

    /// Number of valid bytes stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Copy bytes into the buffer, clamped to capacity, and update `len`.
    #[inline]
    pub fn copy_from_slice(&mut self, slice: &[u8]) {
        let clamped = slice.len().min(MAX_TEXT_BYTES);
        self.data[..clamped].copy_from_slice(&slice[..clamped]);
        self.len = clamped;
    }

    /// Immutable view over the populated bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// UTF-8 view; `None` when the stored bytes are not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(self.as_bytes()).ok()
    }
}

impl fmt::Write for TextBuf {
    /// Append formatted text, silently truncating at capacity.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = MAX_TEXT_BYTES - self.len;
        let take = s.len().min(room);
        self.data[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        Ok(())
    }
}

//==================================================================================DECODED

/// Value carried by one decoded signal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignalValue {
    /// Scaled numeric value (`raw * scale + offset`).
    Number(f64),
    /// Enumerated replacement text from the signal's value table.
    Enumerated(&'static str),
    /// Text decoded from the payload itself (length-prefixed strings).
    Text(TextBuf),
    /// Raw value sits in the protocol's reserved "unknown" range.
    NotAvailable,
}

/// One decoded signal, created fresh for every decode call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecodedSignal {
    /// Signal name; synthesized names (repeated blocks) carry an index suffix.
    pub name: TextBuf,
    /// Physical unit, empty for dimensionless signals.
    pub unit: &'static str,
    /// Decoded value.
    pub value: SignalValue,
    /// Cleared when the raw value is a "not available" sentinel or the
    /// signal's bit range falls outside the payload.
    pub valid: bool,
}

impl DecodedSignal {
    /// Build a signal from a static name.
    pub fn new(name: &'static str, unit: &'static str, value: SignalValue, valid: bool) -> Self {
        Self {
            name: TextBuf::from_str(name),
            unit,
            value,
            valid,
        }
    }

    /// Marker for a field whose raw value could not be interpreted.
    pub fn not_available(name: &'static str, unit: &'static str) -> Self {
        Self::new(name, unit, SignalValue::NotAvailable, false)
    }
}

/// Ordered list of decoded signals plus message identity.
/// Created per decode call; no shared mutable state.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecodedMessage {
    /// Message name from the matching descriptor.
    pub name: &'static str,
    /// Descriptor description.
    pub description: &'static str,
    /// Set when a decoder was registered for the observed PGN.
    pub decoded: bool,
    signals: [DecodedSignal; MAX_DECODED_SIGNALS],
    count: usize,
}

impl DecodedMessage {
    /// Empty, undecoded result ("raw data" fallback for the caller).
    pub const fn undecoded() -> Self {
        Self {
            name: "",
            description: "",
            decoded: false,
            signals: [DecodedSignal {
                name: TextBuf::new(),
                unit: "",
                value: SignalValue::NotAvailable,
                valid: false,
            }; MAX_DECODED_SIGNALS],
            count: 0,
        }
    }

    /// Decoded result carrying the descriptor identity, with no signals yet.
    pub fn new(name: &'static str, description: &'static str) -> Self {
        let mut decoded = Self::undecoded();
        decoded.name = name;
        decoded.description = description;
        decoded.decoded = true;
        decoded
    }

    /// Append a signal; silently dropped once the fixed capacity is reached.
    pub fn push(&mut self, signal: DecodedSignal) {
        if self.count < MAX_DECODED_SIGNALS {
            self.signals[self.count] = signal;
            self.count += 1;
        }
    }

    /// Decoded signals in wire order.
    #[inline]
    pub fn signals(&self) -> &[DecodedSignal] {
        &self.signals[..self.count]
    }

    /// Number of decoded signals.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Checks whether any signal was decoded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
