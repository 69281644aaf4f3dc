/// Bit-level codec infrastructure shared by every decode layer.
pub mod codec;
