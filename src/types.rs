//! Core OSC value types.
//!
//! This module contains the argument types that can be carried by a
//! message: numbers, strings, booleans, timestamps, binary blobs, and
//! nested arrays of those.

use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds between the NTP epoch (1 Jan 1900) and the Unix epoch.
const NTP_UNIX_OFFSET_SECS: u64 = 2_208_988_800;

/// 64-bit OSC timetag, split NTP style.
///
/// `seconds` counts whole seconds since 1 Jan 1900 and `fraction` counts
/// 1/2^32 second units. The reserved pair `(0, 1)` means "immediate" and
/// should be used wherever an absolute time is not meaningful; it is also
/// the [`Default`].
///
/// # Examples
/// ```rust
/// use oscwire::Timetag;
///
/// assert!(Timetag::default().is_immediate());
/// assert!(!Timetag::new(3_923_662_800, 0).is_immediate());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timetag {
    /// Whole seconds since 1 Jan 1900.
    pub seconds: u32,
    /// Fraction of a second in 1/2^32 units.
    pub fraction: u32,
}

impl Timetag {
    /// The reserved "immediate" timetag.
    pub const IMMEDIATE: Timetag = Timetag {
        seconds: 0,
        fraction: 1,
    };

    /// Creates a timetag from raw seconds and fraction.
    pub fn new(seconds: u32, fraction: u32) -> Self {
        Self { seconds, fraction }
    }

    /// Returns true for the reserved "immediate" value.
    pub fn is_immediate(&self) -> bool {
        *self == Timetag::IMMEDIATE
    }

    /// Converts a wall-clock time to a timetag.
    ///
    /// Times before the Unix epoch collapse to [`Timetag::IMMEDIATE`].
    /// The seconds counter wraps at the 2036 NTP era boundary.
    pub fn from_system_time(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(since_epoch) => {
                let seconds = (since_epoch.as_secs() + NTP_UNIX_OFFSET_SECS) as u32;
                let fraction =
                    ((u64::from(since_epoch.subsec_nanos()) << 32) / 1_000_000_000) as u32;
                Self { seconds, fraction }
            }
            Err(_) => Timetag::IMMEDIATE,
        }
    }
}

impl Default for Timetag {
    fn default() -> Self {
        Timetag::IMMEDIATE
    }
}

/// Binary blob argument.
///
/// A blob is an opaque byte sequence with an explicit length; it is not
/// null-terminated and may contain zero bytes anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob(Vec<u8>);

impl Blob {
    /// Creates a blob from any byte source.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self(data.into())
    }

    /// Returns the payload bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the payload length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for a zero-length payload.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Blob {
    fn from(data: Vec<u8>) -> Self {
        Self(data)
    }
}

impl From<&[u8]> for Blob {
    fn from(data: &[u8]) -> Self {
        Self(data.to_vec())
    }
}

/// A single message argument.
///
/// The variant is the committed pairing of value and type tag: `Int32`
/// always travels as tag `i`, `Float32` as `f`, and so on. Conversions
/// between variants happen when an argument is added to a message with
/// an explicit tag hint, never at encode time.
///
/// `True`, `False`, `Nil`, and `Infinitum` occupy no bytes on the wire;
/// their type tag alone carries the value. `Array` expands to its
/// elements bracketed by `[` and `]` in the type tag string.
#[derive(Debug, Clone, PartialEq)]
pub enum OscArg {
    /// 32-bit signed integer, tag `i`.
    Int32(i32),
    /// 32-bit IEEE float, tag `f`.
    Float32(f32),
    /// 64-bit IEEE float, tag `d`.
    Float64(f64),
    /// String, tag `s`.
    Str(String),
    /// Boolean true, tag `T`, zero-width.
    True,
    /// Boolean false, tag `F`, zero-width.
    False,
    /// Null, tag `N`, zero-width.
    Nil,
    /// Infinitum (impulse), tag `I`, zero-width.
    Infinitum,
    /// Timestamp, tag `t`.
    Timetag(Timetag),
    /// Binary blob, tag `b`.
    Blob(Blob),
    /// Nested argument sequence, tags `[`...`]`.
    Array(Vec<OscArg>),
}

impl OscArg {
    /// Short name of the variant, used in error reports.
    pub fn kind(&self) -> &'static str {
        use OscArg::*;
        match self {
            Int32(_) => "int32",
            Float32(_) => "float32",
            Float64(_) => "float64",
            Str(_) => "string",
            True => "true",
            False => "false",
            Nil => "nil",
            Infinitum => "infinitum",
            Timetag(_) => "timetag",
            Blob(_) => "blob",
            Array(_) => "array",
        }
    }
}

impl From<i32> for OscArg {
    fn from(value: i32) -> Self {
        OscArg::Int32(value)
    }
}

impl From<f32> for OscArg {
    fn from(value: f32) -> Self {
        OscArg::Float32(value)
    }
}

impl From<f64> for OscArg {
    fn from(value: f64) -> Self {
        OscArg::Float64(value)
    }
}

impl From<bool> for OscArg {
    fn from(value: bool) -> Self {
        if value { OscArg::True } else { OscArg::False }
    }
}

impl From<&str> for OscArg {
    fn from(value: &str) -> Self {
        OscArg::Str(value.to_string())
    }
}

impl From<String> for OscArg {
    fn from(value: String) -> Self {
        OscArg::Str(value)
    }
}

impl From<Timetag> for OscArg {
    fn from(value: Timetag) -> Self {
        OscArg::Timetag(value)
    }
}

impl From<Blob> for OscArg {
    fn from(value: Blob) -> Self {
        OscArg::Blob(value)
    }
}

impl From<Vec<OscArg>> for OscArg {
    fn from(value: Vec<OscArg>) -> Self {
        OscArg::Array(value)
    }
}
