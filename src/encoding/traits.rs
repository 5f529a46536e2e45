//! Trait definitions for encodable datagrams.

use super::error::EncodeResult;
use crate::platform::PlatformInfo;
use std::fmt;

/// Trait for datagrams that can render themselves to wire bytes.
///
/// Implemented by messages, bundles, and the packet enum that stores
/// bundle children.
pub trait Datagram: fmt::Debug {
    /// Encode the datagram to its binary wire format.
    ///
    /// The first call renders and caches the buffer; later calls return
    /// the cached bytes until a mutating call invalidates them.
    fn encode(&mut self, platform: &PlatformInfo) -> EncodeResult<&[u8]>;

    /// Reset the datagram's internal data structures.
    fn clear(&mut self);
}

/// Extension trait for base64 encoding support.
#[cfg(feature = "base64")]
pub trait Base64Encodable: Datagram {
    /// Encode to the wire format, then render as base64 text.
    fn encode_base64(&mut self, platform: &PlatformInfo) -> EncodeResult<String> {
        use data_encoding::BASE64;
        let bytes = self.encode(platform)?;
        Ok(BASE64.encode(bytes))
    }
}

#[cfg(feature = "base64")]
impl<D: Datagram> Base64Encodable for D {}
