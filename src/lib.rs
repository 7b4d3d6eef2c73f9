//! Decoding of G3D2 hex, a packed 4-bit pixel format whose digit pairs are stored low nibble
//! first, and alpha compositing of decoded color+alpha nibbles onto an existing packed buffer.
//!
//! ```
//! assert_eq!(g3d2::codec::decode(b"1e").unwrap(), vec![0xe1]);
//! assert_eq!(g3d2::codec::blend_decode(b"f8f8", &[0x21]).unwrap(), vec![0x87]);
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod host;
pub mod util;
