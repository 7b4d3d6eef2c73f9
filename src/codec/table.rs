//! Shared ASCII to nibble lookup used by both the plain decoder and the compositor

/// Marks bytes that are not hex digits. Never leaves this module.
const INVALID: u8 = 0xFF;

/// Lowercase digit alphabet, indexed by nibble value
pub const NIBBLE_CHARS: [u8; 16] = *b"0123456789abcdef";

// Built at compile time, so it is immutable and shareable across threads without locking
static HEX_TABLE: [u8; 256] = {
	let mut table = [INVALID; 256];
	let mut i = 0;
	while i < 16 {
		table[NIBBLE_CHARS[i] as usize] = i as u8;
		table[NIBBLE_CHARS[i].to_ascii_uppercase() as usize] = i as u8;
		i += 1;
	}
	table
};

/// Returns the 4-bit value of an ASCII hex digit (`0-9`, `a-f`, `A-F`), or `None` for any other
/// byte
#[inline]
pub fn nibble_of(byte: u8) -> Option<u8> {
	match HEX_TABLE[byte as usize] {
		INVALID => None,
		value => Some(value),
	}
}
