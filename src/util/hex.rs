//! Shaping of hex text on its way into and out of the codec

use crate::codec;
use crate::config::OutputFormat;

/// Strips surrounding ASCII whitespace, such as the trailing newline of a file, if `trim` is set
pub fn prepare(input: &[u8], trim: bool) -> &[u8] {
	if trim {
		input.trim_ascii()
	} else {
		input
	}
}

/// Renders decoded bytes in the configured output format.
///
/// Hex output is G3D2 encoded and newline terminated, unless there's nothing to write.
pub fn render(bytes: Vec<u8>, format: OutputFormat) -> Vec<u8> {
	match format {
		OutputFormat::Raw => bytes,
		OutputFormat::Hex if bytes.is_empty() => bytes,
		OutputFormat::Hex => {
			let mut result = codec::encode(&bytes);
			result.push(b'\n');
			result
		}
	}
}
