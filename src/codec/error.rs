use thiserror::Error;

/// Which host-supplied argument had an unusable type
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Argument {
	/// The buffer the operation is invoked on
	This,
	/// The foreground stream given to the alpha-blending decode
	Foreground,
}

impl Argument {
	fn type_error_message(self) -> &'static str {
		match self {
			Argument::This => "Argument should be a buffer object.",
			Argument::Foreground => "Second argument must be a string or a buffer.",
		}
	}
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LengthError {
	#[error("Odd string length, this is not hexadecimal data.")]
	Odd { len: usize },

	#[error("hex length {len} is not a multiple of 4, cannot be alpha-blended")]
	NotMultipleOfFour { len: usize },

	#[error("background is {background} bytes long, expected {expected} for the foreground data")]
	BackgroundMismatch { background: usize, expected: usize },
}

// Messages for the odd-length, bad-digit and argument-type cases are relied upon verbatim by
// existing host callers
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DecodeError {
	#[error("{}", .0.type_error_message())]
	InvalidInputType(Argument),

	#[error(transparent)]
	MalformedLength(#[from] LengthError),

	#[error("This is not hexadecimal data.")]
	InvalidDigit { offset: usize, byte: u8 },
}

impl DecodeError {
	/// Human readable detail that the host-compatible `Display` output leaves out
	pub fn detail(&self) -> Option<String> {
		match self {
			DecodeError::InvalidDigit { offset, byte } => Some(format!(
				"unexpected byte {byte:#04x} ({:?}) at offset {offset}",
				char::from(*byte)
			)),
			DecodeError::MalformedLength(LengthError::Odd { len }) => {
				Some(format!("input is {len} bytes long"))
			}
			_ => None,
		}
	}
}
