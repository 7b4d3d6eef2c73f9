//! G3D2 decoding fused with 4-bit alpha compositing onto an existing packed-nibble background.
//!
//! Every output byte consumes four foreground digits, `color_a alpha_a color_b alpha_b`, and
//! one background byte whose low nibble is slot A and whose high nibble is slot B. The two slots
//! are blended independently.

use log::trace;

use super::decoder::digit_at;
use super::error::{DecodeError, LengthError};

/// Hex digits consumed per output byte
pub const DIGITS_PER_BYTE: usize = 4;

/// Blends one 4-bit `color` with weight `alpha` over the 4-bit `old` value.
///
/// The sum is divided by 16 rather than 15, so a fully opaque color does not come out unchanged
/// (and neither does a fully transparent one). Existing encoded data depends on exactly this
/// rounding.
#[inline]
pub fn blend_nibble(old: u8, color: u8, alpha: u8) -> u8 {
	let (old, color, alpha) = (old as u16, color as u16, alpha as u16);
	(((old * (15 - alpha) + color * alpha) >> 4) & 0x0F) as u8
}

/// Decodes `fg_hex` and composites it onto `background`, returning a new buffer of the same
/// length as `background`.
///
/// Fails with [`LengthError`] if `fg_hex` has an odd length, a length that's not a multiple of
/// [`DIGITS_PER_BYTE`], or one that doesn't match `background.len()`. All of that is checked
/// before allocating. The first non-hex digit aborts the whole operation.
pub fn blend_decode(fg_hex: &[u8], background: &[u8]) -> Result<Vec<u8>, DecodeError> {
	check_lengths(fg_hex.len(), background.len())?;

	trace!(
		"blending {} hex digits onto {} background bytes",
		fg_hex.len(),
		background.len()
	);

	let mut result = Vec::with_capacity(background.len());
	for (i, (group, &bg)) in fg_hex
		.chunks_exact(DIGITS_PER_BYTE)
		.zip(background)
		.enumerate()
	{
		let base = i * DIGITS_PER_BYTE;
		let a = digit_at(base, group[0])?;
		let aa = digit_at(base + 1, group[1])?;
		let b = digit_at(base + 2, group[2])?;
		let ba = digit_at(base + 3, group[3])?;

		let result_a = blend_nibble(bg & 0x0F, a, aa);
		let result_b = blend_nibble(bg >> 4, b, ba);
		result.push(result_a | result_b << 4);
	}

	Ok(result)
}

/// Blends a foreground supplied as text
pub fn blend_decode_from_text(fg: &str, background: &[u8]) -> Result<Vec<u8>, DecodeError> {
	blend_decode(fg.as_bytes(), background)
}

/// Blends a foreground supplied as a byte buffer holding hex digits
pub fn blend_decode_from_bytes(fg: &[u8], background: &[u8]) -> Result<Vec<u8>, DecodeError> {
	blend_decode(fg, background)
}

fn check_lengths(fg_len: usize, background_len: usize) -> Result<(), LengthError> {
	if fg_len % 2 != 0 {
		return Err(LengthError::Odd { len: fg_len });
	}
	if fg_len % DIGITS_PER_BYTE != 0 {
		return Err(LengthError::NotMultipleOfFour { len: fg_len });
	}
	let expected = fg_len / DIGITS_PER_BYTE;
	if background_len != expected {
		return Err(LengthError::BackgroundMismatch {
			background: background_len,
			expected,
		});
	}
	Ok(())
}
