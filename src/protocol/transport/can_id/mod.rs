//! Creation and extraction of the 29-bit CAN identifiers used by
//! NMEA 2000 (derived from the SAE J1939 specification).

//==================================================================================CAN_ID
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Encapsulates an extended CAN identifier (29 bits) and exposes accessors
/// for priority, PGN, and source.
pub struct CanId(pub u32);

/// Destination address meaning "every node on the bus".
pub const BROADCAST_ADDRESS: u8 = 0xFF;

impl CanId {
    /// Assembles an identifier from its logical parts.
    ///
    /// The PGN occupies bits 8..26 and the priority bits 26..29. For an
    /// addressed message (`destination != 0xFF`) the destination replaces
    /// the low byte of the PGN field, per the J1939 PDU1 convention.
    pub fn from_parts(pgn: u32, source: u8, destination: u8, priority: u8) -> Self {
        let mut id = ((priority as u32 & 0x07) << 26) | ((pgn & 0x3FFFF) << 8) | source as u32;

        if destination != BROADCAST_ADDRESS {
            id = (id & !0x0000_FF00) | ((destination as u32) << 8);
        }
        Self(id)
    }

    // Getters used to deconstruct the identifier
    /// Returns the priority (3 bits, value 0-7) encoded in the CAN ID.
    pub fn priority(&self) -> u8 {
        ((self.0 >> 26) & 0x07) as u8
    }

    /// Extracts the 18-bit PGN, handling the PDU1/PDU2 distinction.
    pub fn pgn(&self) -> u32 {
        let ps = (self.0 >> 8) & 0xFF;
        let pf = (self.0 >> 16) & 0xFF;
        let dp = (self.0 >> 24) & 0x03;

        if pf >= 240 {
            // PDU2: implicit destination, PS is part of the PGN.
            (dp << 16) | (pf << 8) | ps
        } else {
            // PDU1: PS carries the explicit destination, not the PGN.
            (dp << 16) | (pf << 8)
        }
    }

    /// Returns the destination address (PDU1) when the PGN carries one.
    pub fn destination(&self) -> Option<u8> {
        let pf = ((self.0 >> 16) & 0xFF) as u8;
        if pf >= 240 {
            None
        } else {
            Some(((self.0 >> 8) & 0xFF) as u8)
        }
    }

    /// Eight-bit source address (logical node identifier on the N2K network).
    pub fn source_address(&self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}
