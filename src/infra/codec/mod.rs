/// Bounded bit-level reader over CAN payload buffers.
pub mod bits;
/// Schema-driven signal decode engine.
pub mod engine;
