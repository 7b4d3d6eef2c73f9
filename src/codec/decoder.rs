//! Plain G3D2 decoding: two hex digits per output byte, the first digit landing in the low
//! nibble

use log::trace;

use super::error::{DecodeError, LengthError};
use super::table::{nibble_of, NIBBLE_CHARS};

/// Decodes G3D2 hex data into packed nibbles.
///
/// For each digit pair `(c0, c1)` the output byte is `c0 | c1 << 4`, i.e. the reverse of
/// conventional hex. Empty input decodes to an empty buffer. Odd lengths are rejected before
/// anything is allocated, and the first non-hex byte aborts the whole decode.
pub fn decode(hex: &[u8]) -> Result<Vec<u8>, DecodeError> {
	if hex.len() % 2 != 0 {
		return Err(LengthError::Odd { len: hex.len() }.into());
	}

	trace!("decoding {} hex digits", hex.len());

	let mut result = Vec::with_capacity(hex.len() / 2);
	for (i, pair) in hex.chunks_exact(2).enumerate() {
		let lo = digit_at(2 * i, pair[0])?;
		let hi = digit_at(2 * i + 1, pair[1])?;
		result.push(lo | hi << 4);
	}

	Ok(result)
}

/// Produces lowercase G3D2 hex, low nibble first, so that `decode(&encode(x)) == x`
pub fn encode(bytes: &[u8]) -> Vec<u8> {
	let mut result = Vec::with_capacity(bytes.len() * 2);
	for byte in bytes {
		result.push(NIBBLE_CHARS[(*byte & 0x0F) as usize]);
		result.push(NIBBLE_CHARS[(*byte >> 4) as usize]);
	}
	result
}

/// Looks up `byte`, found at `offset` in the input, reporting its position if it's not a digit
#[inline]
pub(super) fn digit_at(offset: usize, byte: u8) -> Result<u8, DecodeError> {
	nibble_of(byte).ok_or(DecodeError::InvalidDigit { offset, byte })
}
