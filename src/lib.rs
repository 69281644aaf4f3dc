//! `poco-n2k` library: codec core for the Lumitec Poco lighting protocol
//! riding on NMEA 2000, usable in a `no_std` environment. The crate exposes
//! the bit-level codec infrastructure, the proprietary message codec over
//! PGN 61184, the schema-driven signal decode engine, and the per-PGN
//! instance conflict detector. Transport I/O, fast-packet reassembly and
//! any UI concerns live outside this crate; callers hand fully assembled
//! messages to the decode entry points and send the built frames themselves.
#![no_std]
//==================================================================================
/// Core data types shared by the static signal tables and the decode engine.
pub mod core;
/// Domain and low-level errors (bit access, message cursor, signal decode).
pub mod error;
/// Bit-level readers/writers underneath the codec layers.
pub mod infra;
/// Protocol implementation: frame model, proprietary codec, group function,
/// specialized decoders, and the instance conflict detector.
pub mod protocol;
//==================================================================================
