//! Logical NMEA 2000 message: addressing fields plus a bounded payload
//! with cursor-based little-endian accessors. This is the unit every
//! builder produces and every parser/decoder consumes; single-frame and
//! reassembled fast-packet payloads share the same shape.
use crate::core::{TextBuf, MAX_MESSAGE_PAYLOAD, MAX_TEXT_BYTES};
use crate::error::MessageError;
use crate::protocol::transport::can_id::{CanId, BROADCAST_ADDRESS};

//==================================================================================MESSAGE
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Addressing metadata and payload of one N2K message.
pub struct Message {
    pub pgn: u32,
    pub priority: u8,
    pub source: u8,
    pub destination: u8,
    len: usize,
    payload: [u8; MAX_MESSAGE_PAYLOAD],
}

impl Message {
    /// Creates an empty message with the given addressing fields.
    pub fn new(pgn: u32, source: u8, destination: u8, priority: u8) -> Self {
        Self {
            pgn,
            priority: priority & 0x07,
            source,
            destination,
            len: 0,
            payload: [0; MAX_MESSAGE_PAYLOAD],
        }
    }

    /// Creates an empty broadcast message.
    pub fn broadcast(pgn: u32, source: u8, priority: u8) -> Self {
        Self::new(pgn, source, BROADCAST_ADDRESS, priority)
    }

    /// Builds a message from a received payload, copying at most
    /// [`MAX_MESSAGE_PAYLOAD`] bytes.
    pub fn from_payload(
        pgn: u32,
        source: u8,
        destination: u8,
        priority: u8,
        payload: &[u8],
    ) -> Result<Self, MessageError> {
        if payload.len() > MAX_MESSAGE_PAYLOAD {
            return Err(MessageError::PayloadOverflow {
                asked: payload.len(),
                capacity: MAX_MESSAGE_PAYLOAD,
            });
        }
        let mut msg = Self::new(pgn, source, destination, priority);
        msg.payload[..payload.len()].copy_from_slice(payload);
        msg.len = payload.len();
        Ok(msg)
    }

    /// The 29-bit identifier this message travels under.
    pub fn can_id(&self) -> CanId {
        CanId::from_parts(self.pgn, self.source, self.destination, self.priority)
    }

    /// Payload bytes written so far.
    pub fn data(&self) -> &[u8] {
        &self.payload[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read-only cursor over the payload, positioned at the start.
    pub fn reader(&self) -> PayloadReader<'_> {
        PayloadReader {
            data: self.data(),
            cursor: 0,
        }
    }

    //------------------------------------------------------------------WRITES
    fn ensure_room(&self, asked: usize) -> Result<(), MessageError> {
        if self.len + asked > MAX_MESSAGE_PAYLOAD {
            return Err(MessageError::PayloadOverflow {
                asked,
                capacity: MAX_MESSAGE_PAYLOAD - self.len,
            });
        }
        Ok(())
    }

    /// Appends one byte at the write cursor.
    pub fn add_u8(&mut self, value: u8) -> Result<(), MessageError> {
        self.ensure_room(1)?;
        self.payload[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Appends a 16-bit value, little-endian.
    pub fn add_u16(&mut self, value: u16) -> Result<(), MessageError> {
        self.ensure_room(2)?;
        self.payload[self.len..self.len + 2].copy_from_slice(&value.to_le_bytes());
        self.len += 2;
        Ok(())
    }

    /// Appends the low 24 bits of a value, little-endian.
    pub fn add_u24(&mut self, value: u32) -> Result<(), MessageError> {
        self.ensure_room(3)?;
        self.payload[self.len..self.len + 3].copy_from_slice(&value.to_le_bytes()[..3]);
        self.len += 3;
        Ok(())
    }

    /// Appends a 32-bit value, little-endian.
    pub fn add_u32(&mut self, value: u32) -> Result<(), MessageError> {
        self.ensure_room(4)?;
        self.payload[self.len..self.len + 4].copy_from_slice(&value.to_le_bytes());
        self.len += 4;
        Ok(())
    }

    /// Appends raw bytes verbatim.
    pub fn add_slice(&mut self, bytes: &[u8]) -> Result<(), MessageError> {
        self.ensure_room(bytes.len())?;
        self.payload[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
        Ok(())
    }
}

//==================================================================================PAYLOAD_READER
/// Bounded read cursor over a message payload. Every accessor advances the
/// cursor and fails cleanly once the payload is exhausted, so parsers never
/// index past the end.
pub struct PayloadReader<'a> {
    data: &'a [u8],
    cursor: usize,
}

impl<'a> PayloadReader<'a> {
    /// Bytes left between the cursor and the end of the payload.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }

    /// Rewinds the cursor to the start of the payload.
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    fn take(&mut self, asked: usize) -> Result<&'a [u8], MessageError> {
        if asked > self.remaining() {
            return Err(MessageError::ReadOutOfBounds {
                asked,
                remaining: self.remaining(),
            });
        }
        let slice = &self.data[self.cursor..self.cursor + asked];
        self.cursor += asked;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8, MessageError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, MessageError> {
        let bytes = self.take(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u24(&mut self) -> Result<u32, MessageError> {
        let bytes = self.take(3)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], 0]))
    }

    pub fn read_u32(&mut self) -> Result<u32, MessageError> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Reads a length-prefixed string. The declared length is clamped to
    /// [`MAX_TEXT_BYTES`]; excess source bytes are consumed but dropped.
    pub fn read_str(&mut self) -> Result<TextBuf, MessageError> {
        let declared = self.read_u8()? as usize;
        let bytes = self.take(declared)?;
        let kept = declared.min(MAX_TEXT_BYTES);
        let mut text = TextBuf::new();
        text.copy_from_slice(&bytes[..kept]);
        Ok(text)
    }

    /// Skips `count` bytes without reading them.
    pub fn skip(&mut self, count: usize) -> Result<(), MessageError> {
        self.take(count).map(|_| ())
    }
}
