//! Binary encoding support for OSC datagrams.
//!
//! This module provides the byte writer that produces the 4-byte aligned,
//! big-endian wire format, the trait shared by encodable datagrams, and
//! the encoding error taxonomy.

/// Error types for encoding operations.
pub mod error;

/// Byte-level writer for encoding wire data.
pub mod writer;

/// Trait definitions for encodable datagrams.
pub mod traits;


// Re-export commonly used types
pub use error::{EncodeError, EncodeResult};
pub use traits::Datagram;
pub use writer::DatagramWriter;

// Re-export feature-gated traits
#[cfg(feature = "base64")]
pub use traits::Base64Encodable;
