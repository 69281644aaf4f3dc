//! Error definitions shared across library modules.
//! Each type models a specific failure scenario (bit-level access, message
//! cursor reads/writes, signal decode).
use thiserror_no_std::Error;

//==================================================================================BITREADER_ERRORS
#[derive(Debug, Error, PartialEq, Eq)]
/// Errors raised during bitwise buffer reads.
pub enum BitReaderError {
    /// Attempted to read past the end of the buffer.
    #[error("Attempted to read out of bounds -> asked: {asked}, available: {available}")]
    OutOfBounds { asked: usize, available: usize },
    /// Requested more bits than the target type can hold.
    #[error("Cannot read more than {max} bits. Requested: {asked}")]
    TooLongForType { max: u8, asked: u8 },
    /// Cursor is not aligned on a byte boundary when required.
    #[error("Non aligned bit. Cursor: {cursor}")]
    NonAlignedBit { cursor: usize },
}

//==================================================================================MESSAGE_ERRORS
#[derive(Debug, Error, PartialEq, Eq)]
/// Errors raised by the message payload cursor.
pub enum MessageError {
    /// Positional read would cross the end of the payload.
    #[error("Read out of bounds -> asked: {asked}, remaining: {remaining}")]
    ReadOutOfBounds { asked: usize, remaining: usize },
    /// Appending would exceed the maximum payload size.
    #[error("Payload overflow -> asked: {asked}, capacity: {capacity}")]
    PayloadOverflow { asked: usize, capacity: usize },
}

//==================================================================================DECODE_ERRORS
#[derive(Debug, Error, PartialEq, Eq)]
/// Errors raised while extracting one signal from a payload.
/// A failed signal never aborts the surrounding message decode; the signal
/// is reported as "not available" instead.
pub enum DecodeError {
    /// The signal's bit range does not fit inside the payload.
    #[error("Signal past payload end -> start: {start_bit}, length: {bit_length}, payload bits: {payload_bits}")]
    SignalPastEnd {
        start_bit: u32,
        bit_length: u32,
        payload_bits: usize,
    },
    /// Descriptor declares a bit length outside 1..=64.
    #[error("Invalid bit length for signal: {bit_length}")]
    InvalidBitLength { bit_length: u32 },
    /// Bit-level access on the buffer failed.
    #[error("BitReader error: {err}")]
    BitReaderError { err: BitReaderError },
}

impl From<BitReaderError> for DecodeError {
    fn from(err: BitReaderError) -> Self {
        DecodeError::BitReaderError { err }
    }
}
