//! The G3D2 codec: hex text whose digit pairs are stored low nibble first, decoded either on its
//! own or alpha-blended onto an existing packed-nibble buffer.
//!
//! All operations are pure, allocate exactly one output buffer and never touch their inputs.

pub mod compositor;
pub mod decoder;
pub mod error;
pub mod table;

pub use compositor::{blend_decode, blend_decode_from_bytes, blend_decode_from_text};
pub use decoder::{decode, encode};
pub use error::{Argument, DecodeError, LengthError};
