//! Image encoding.
//!
//! The only supported output is the uncompressed true-color TGA byte layout
//! produced by [`encode_tga`]. The encoder returns the complete file as a
//! byte vector; persisting it is the caller's concern.

mod tga;

pub use tga::{encode_tga, EncodeError};
