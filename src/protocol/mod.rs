//! High-level components of the NMEA 2000 protocol: the message transport
//! model, static signal tables, the proprietary lighting codec, group
//! function commands, specialized decoders, and instance conflict tracking.
pub mod conflict;
pub mod decoders;
pub mod group_function;
pub mod messages;
pub mod poco;
pub mod transport;
