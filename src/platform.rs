//! Host platform detection and byte-order utilities.
//!
//! The wire format is big-endian and 4-byte aligned regardless of the
//! host, so encoding starts from a one-time probe of the machine's
//! integer representation.

use crate::encoding::{EncodeError, EncodeResult};

/// Number of zero bytes needed to bring `byte_length` to a 4-byte boundary.
///
/// The result is always in `0..=3`.
///
/// # Examples
/// ```rust
/// use oscwire::platform::pad_length;
///
/// assert_eq!(pad_length(0), 0);
/// assert_eq!(pad_length(5), 3);
/// assert_eq!(pad_length(8), 0);
/// ```
pub fn pad_length(byte_length: usize) -> usize {
    match byte_length % 4 {
        0 => 0,
        remainder => 4 - remainder,
    }
}

/// Immutable result of the host platform probe.
///
/// Obtained once from [`PlatformInfo::probe`] and passed explicitly to
/// every encode call; there is no hidden global state. The value is
/// `Copy` and can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformInfo {
    little_endian: bool,
}

impl PlatformInfo {
    /// Detects the host byte order and integer representation.
    ///
    /// # Errors
    /// Returns [`EncodeError::PlatformUnsupported`] when the host does
    /// not encode integers in two's complement.
    pub fn probe() -> EncodeResult<Self> {
        let native = 1i32.to_ne_bytes();
        let big_endian = 1i32.to_be_bytes();
        let little_endian = native[0] != big_endian[0];

        // Every byte of -1 is 0xFF in two's complement only.
        if (-1i32).to_ne_bytes()[0] != 0xFF {
            return Err(EncodeError::PlatformUnsupported);
        }

        Ok(Self { little_endian })
    }

    /// Returns true when the probe found a little-endian host.
    pub fn is_little_endian(&self) -> bool {
        self.little_endian
    }

    /// Converts a native numeric encoding to network (big-endian) order.
    pub fn to_network_order(&self, native: &[u8]) -> Vec<u8> {
        if self.little_endian {
            native.iter().rev().copied().collect()
        } else {
            native.to_vec()
        }
    }
}
