//! Message-level transport model: 29-bit identifier management and the
//! logical `Message` carrying a bounded payload with cursor access.
//! Physical bus I/O and Fast Packet reassembly live outside this crate;
//! a reassembled payload enters here through `Message::from_payload`.

pub mod can_id;
pub mod message;
