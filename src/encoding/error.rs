//! Error types for encoding operations.

use std::error::Error;
use std::fmt;

/// Result type for encoding operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Errors that can occur while encoding a datagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Host integer representation is not two's complement.
    PlatformUnsupported,

    /// Native float representation does not match the wire width for its tag.
    UnsupportedFloatSize {
        /// Type tag of the float being encoded.
        tag: char,
        /// Number of bytes the wire format requires.
        expected: usize,
        /// Number of bytes the native representation produced.
        actual: usize,
    },

    /// Value cannot be converted to the requested type tag.
    UnsupportedType {
        /// The requested type tag.
        tag: char,
        /// Kind of the value that was rejected.
        kind: &'static str,
    },

    /// Type tag character outside the supported set.
    UnknownTypeTag {
        /// The unrecognized tag character.
        tag: char,
    },

    /// A write left the buffer off the 4-byte grid.
    AlignmentViolation {
        /// Type tag of the field that was being written.
        tag: char,
        /// Number of bytes the write appended.
        appended: usize,
    },

    /// Value exceeds the maximum representable in its length field.
    ValueTooLarge {
        /// Name of the field.
        field: &'static str,
        /// Maximum allowed value.
        max: u64,
        /// Actual value provided.
        actual: u64,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::PlatformUnsupported => {
                write!(
                    f,
                    "This machine does not use two's complement integers, negative numbers cannot be represented"
                )
            }
            EncodeError::UnsupportedFloatSize {
                tag,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Unsupported float size for tag '{}': expected {} bytes, got {}",
                    tag, expected, actual
                )
            }
            EncodeError::UnsupportedType { tag, kind } => {
                write!(f, "Cannot encode {} value as type tag '{}'", kind, tag)
            }
            EncodeError::UnknownTypeTag { tag } => {
                write!(f, "Unrecognized type tag '{}'", tag)
            }
            EncodeError::AlignmentViolation { tag, appended } => {
                write!(
                    f,
                    "Field with tag '{}' failed to align properly, appended {} bytes",
                    tag, appended
                )
            }
            EncodeError::ValueTooLarge { field, max, actual } => {
                write!(
                    f,
                    "Value too large for {}: {} > {} (max)",
                    field, actual, max
                )
            }
        }
    }
}

impl Error for EncodeError {}
