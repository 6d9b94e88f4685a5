use std::fmt;

/// Canonical message carried by every failed encode.
pub const ENCODE_FAILED_MESSAGE: &str =
    "Encoding operation failed due to an invalid value or format provider.";

/// Canonical message carried by every failed decode.
pub const DECODE_FAILED_MESSAGE: &str =
    "Decoding operation failed due to an invalid value or format provider.";

/// Detailed failure kinds produced by the codec layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The input contains a symbol outside the provider's alphabet, or a
    /// letter in the wrong case for a case-specific provider
    InvalidCharacter { char: char, position: usize },
    /// Padding is missing, misplaced, of the wrong length, or the input is
    /// nothing but padding
    InvalidPadding,
    /// The provider's alphabet does not fit the radix it declares
    InvalidProvider { reason: String },
    /// The computed output length is larger than the configured limit
    CapacityExceeded { required: Option<usize>, limit: usize },
}

impl CodecError {
    pub fn invalid_provider(reason: impl Into<String>) -> Self {
        CodecError::InvalidProvider {
            reason: reason.into(),
        }
    }

    /// Short machine-friendly name of the kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            CodecError::InvalidCharacter { .. } => "invalid_character",
            CodecError::InvalidPadding => "invalid_padding",
            CodecError::InvalidProvider { .. } => "invalid_provider",
            CodecError::CapacityExceeded { .. } => "capacity_exceeded",
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidCharacter { char: c, position } => {
                write!(f, "invalid character '{}' at position {}", c, position)
            }
            CodecError::InvalidPadding => write!(f, "invalid padding"),
            CodecError::InvalidProvider { reason } => {
                write!(f, "invalid format provider: {}", reason)
            }
            CodecError::CapacityExceeded {
                required: Some(required),
                limit,
            } => write!(
                f,
                "output of {} symbols exceeds the limit of {}",
                required, limit
            ),
            CodecError::CapacityExceeded {
                required: None,
                limit,
            } => write!(
                f,
                "output length is not representable (limit {})",
                limit
            ),
        }
    }
}

impl std::error::Error for CodecError {}

/// Error returned by every encoding entry point.
///
/// Displays only the canonical encode message; the underlying
/// [`CodecError`] stays reachable through [`EncodeError::kind`] and
/// [`std::error::Error::source`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeError {
    kind: CodecError,
}

impl EncodeError {
    pub fn kind(&self) -> &CodecError {
        &self.kind
    }
}

impl From<CodecError> for EncodeError {
    fn from(kind: CodecError) -> Self {
        EncodeError { kind }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ENCODE_FAILED_MESSAGE)
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Error returned by every decoding entry point.
///
/// Displays only the canonical decode message; see [`EncodeError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    kind: CodecError,
}

impl DecodeError {
    pub fn kind(&self) -> &CodecError {
        &self.kind
    }
}

impl From<CodecError> for DecodeError {
    fn from(kind: CodecError) -> Self {
        DecodeError { kind }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(DECODE_FAILED_MESSAGE)
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
