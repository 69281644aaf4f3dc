//! Low-level component dedicated to bit extraction from CAN buffers.
//! The reader abstraction is optimized for NMEA 2000 payloads where signal
//! fields seldom align with byte boundaries.
use crate::error::BitReaderError;

/// Generic reader that extracts bit segments from a `&[u8]`
/// without extra allocation or copies.
pub struct BitReader<'a> {
    /// Shared source buffer (typically a received payload).
    buffer: &'a [u8],
    /// Current index expressed as number of bits read from the beginning.
    bit_cursor: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader positioned at the start of the provided buffer.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            bit_cursor: 0,
        }
    }

    /// Create a reader positioned at an absolute bit offset.
    /// Out-of-range offsets are accepted here and rejected by the first read.
    pub fn at(buffer: &'a [u8], bit_offset: usize) -> Self {
        Self {
            buffer,
            bit_cursor: bit_offset,
        }
    }

    /// Number of unread bits left in the buffer.
    pub fn remaining_bits(&self) -> usize {
        (self.buffer.len() * 8).saturating_sub(self.bit_cursor)
    }

    /// Read `num_bits` bits starting at the current cursor and return a `u64`.
    /// `num_bits` must stay in the [1, 64] range. Bits accumulate
    /// little-endian: the first bit read lands in the result's bit 0.
    pub fn read_u64(&mut self, num_bits: u8) -> Result<u64, BitReaderError> {
        // Validate admissible bit length.
        if !(1..=64).contains(&num_bits) {
            return Err(BitReaderError::TooLongForType {
                max: 64,
                asked: num_bits,
            });
        }

        // Prevent reading beyond the buffer.
        if num_bits as usize > self.remaining_bits() {
            return Err(BitReaderError::OutOfBounds {
                asked: num_bits as usize,
                available: self.remaining_bits(),
            });
        }

        // Assemble the requested bits.
        let mut result: u64 = 0;
        let mut bits_read = 0;

        while bits_read < num_bits {
            let current_byte_index = (self.bit_cursor + bits_read as usize) / 8;
            let current_bit_offset = (self.bit_cursor + bits_read as usize) % 8;

            let byte = self.buffer[current_byte_index];

            // Number of bits still wanted from the current byte.
            let bits_to_read_this_iteration =
                (8 - current_bit_offset).min(num_bits as usize - bits_read as usize);

            // Extract only the relevant bits; masks leading bits on the
            // first byte when the cursor starts mid-byte.
            let mask = ((1u16 << bits_to_read_this_iteration) - 1) as u8;
            let masked_value = (byte >> current_bit_offset) & mask;

            // Merge bits into the output value while preserving ordering.
            result |= (masked_value as u64) << bits_read;

            bits_read += bits_to_read_this_iteration as u8;
        }
        // Update cursor once the read is complete.
        self.bit_cursor += num_bits as usize;
        Ok(result)
    }

    /// Read up to 8 bits and return a `u8`.
    pub fn read_u8(&mut self, num_bits: u8) -> Result<u8, BitReaderError> {
        if num_bits > 8 {
            return Err(BitReaderError::TooLongForType {
                max: 8,
                asked: num_bits,
            });
        }

        self.read_u64(num_bits).map(|val| val as u8)
    }

    /// Advance the cursor by `length` bits without reading data.
    pub fn advance(&mut self, length: u8) -> Result<(), BitReaderError> {
        if !(1..=64).contains(&length) {
            return Err(BitReaderError::TooLongForType {
                max: 64,
                asked: length,
            });
        }

        if length as usize > self.remaining_bits() {
            return Err(BitReaderError::OutOfBounds {
                asked: length as usize,
                available: self.remaining_bits(),
            });
        }
        self.bit_cursor += length as usize;

        Ok(())
    }

    /// Return a slice of `len` bytes from the current position.
    /// Cursor must be aligned on an octet boundary.
    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8], BitReaderError> {
        // Slices are only allowed when aligned.
        if self.bit_cursor % 8 != 0 {
            return Err(BitReaderError::NonAlignedBit {
                cursor: self.bit_cursor,
            });
        }

        let byte_start = self.bit_cursor / 8;
        let byte_end = byte_start + len;
        if byte_end > self.buffer.len() {
            return Err(BitReaderError::OutOfBounds {
                asked: byte_end,
                available: self.buffer.len(),
            });
        }
        let slice = &self.buffer[byte_start..byte_end];
        self.bit_cursor += len * 8;
        Ok(slice)
    }
}
