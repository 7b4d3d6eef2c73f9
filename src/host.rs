//! Boundary for embedding the codec in a dynamically typed host runtime.
//!
//! The host hands over whatever values it was called with; this module checks their types,
//! picks the matching codec operation and shapes the result the way the host expects it.

use log::trace;

use crate::codec::{self, Argument, DecodeError};

/// A value as received from the host
#[derive(Clone, Copy, Debug)]
pub enum HostValue<'a> {
	Buffer(&'a [u8]),
	Text(&'a str),
	/// Anything else, carrying the host's name for its type
	Other(&'static str),
}

/// What gets handed back to the host on success
#[derive(Debug, Eq, PartialEq)]
pub enum HostOutput {
	/// Empty input decodes to the host's empty value rather than a zero-length buffer
	Empty,
	Buffer(Vec<u8>),
}

impl From<Vec<u8>> for HostOutput {
	fn from(bytes: Vec<u8>) -> Self {
		if bytes.is_empty() {
			HostOutput::Empty
		} else {
			HostOutput::Buffer(bytes)
		}
	}
}

impl<'a> HostValue<'a> {
	fn as_buffer(&self, arg: Argument) -> Result<&'a [u8], DecodeError> {
		match *self {
			HostValue::Buffer(bytes) => Ok(bytes),
			ref other => {
				trace!("rejecting {other:?} for {arg:?}");
				Err(DecodeError::InvalidInputType(arg))
			}
		}
	}
}

/// `fromG3d2Encoding`: decodes the hex digits held in `this`
pub fn from_g3d2_encoding(this: &HostValue) -> Result<HostOutput, DecodeError> {
	let data = this.as_buffer(Argument::This)?;
	codec::decode(data).map(HostOutput::from)
}

/// `fromG3d2EncodingWithAlpha`: blends the foreground digits in `fg` onto the packed background
/// held in `this`
pub fn from_g3d2_encoding_with_alpha(
	this: &HostValue,
	fg: &HostValue,
) -> Result<HostOutput, DecodeError> {
	let background = this.as_buffer(Argument::This)?;
	let blended = match *fg {
		HostValue::Text(text) => codec::blend_decode_from_text(text, background),
		HostValue::Buffer(bytes) => codec::blend_decode_from_bytes(bytes, background),
		HostValue::Other(_) => return Err(DecodeError::InvalidInputType(Argument::Foreground)),
	}?;
	Ok(blended.into())
}
