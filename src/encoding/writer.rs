//! Byte-level writer for encoding wire data.

use super::error::{EncodeError, EncodeResult};
use crate::platform::{PlatformInfo, pad_length};
use crate::types::{Blob, OscArg, Timetag};

/// A writer that appends wire-format fields to a byte buffer.
///
/// Numeric fields are converted to network order through the probed
/// [`PlatformInfo`]; strings and blobs are zero-padded. Every push
/// checks that it appended a multiple of 4 bytes, so the buffer never
/// leaves the 4-byte grid the protocol requires.
pub struct DatagramWriter {
    /// Byte-order conversion context.
    platform: PlatformInfo,
    /// The output buffer.
    buffer: Vec<u8>,
}

impl DatagramWriter {
    /// Creates a new `DatagramWriter` with an empty buffer.
    pub fn new(platform: PlatformInfo) -> Self {
        Self {
            platform,
            buffer: Vec::new(),
        }
    }

    /// Creates a new `DatagramWriter` with a pre-allocated buffer capacity.
    pub fn with_capacity(platform: PlatformInfo, capacity: usize) -> Self {
        Self {
            platform,
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Writes one argument in its committed wire representation.
    ///
    /// `True`, `False`, `Nil`, and `Infinitum` have no allocated space;
    /// arrays write their elements in order, brackets consume no bytes.
    pub fn push_arg(&mut self, arg: &OscArg) -> EncodeResult<()> {
        match arg {
            OscArg::Int32(value) => self.push_i32(*value),
            OscArg::Float32(value) => self.push_f32(*value),
            OscArg::Float64(value) => self.push_f64(*value),
            OscArg::Str(value) => self.push_str(value),
            OscArg::True | OscArg::False | OscArg::Nil | OscArg::Infinitum => Ok(()),
            OscArg::Timetag(value) => self.push_timetag(*value),
            OscArg::Blob(value) => self.push_blob(value),
            OscArg::Array(elements) => {
                for element in elements {
                    self.push_arg(element)?;
                }
                Ok(())
            }
        }
    }

    /// Writes an osc-string: content, `\0` terminator, zero padding.
    ///
    /// The terminator is mandatory even when the content already ends on
    /// a 4-byte boundary.
    pub fn push_str(&mut self, value: &str) -> EncodeResult<()> {
        let start = self.buffer.len();
        self.buffer.extend_from_slice(value.as_bytes());
        self.buffer.push(0);
        self.pad();
        self.check_aligned('s', start)
    }

    /// Writes a 32-bit signed integer in network order.
    pub fn push_i32(&mut self, value: i32) -> EncodeResult<()> {
        let start = self.buffer.len();
        let bytes = self.platform.to_network_order(&value.to_ne_bytes());
        self.buffer.extend_from_slice(&bytes);
        self.check_aligned('i', start)
    }

    /// Writes a 32-bit float in network order.
    ///
    /// # Errors
    /// Returns an error if the native single-precision representation is
    /// not 4 bytes wide.
    pub fn push_f32(&mut self, value: f32) -> EncodeResult<()> {
        let start = self.buffer.len();
        let bytes = self.platform.to_network_order(&value.to_ne_bytes());
        if bytes.len() != 4 {
            return Err(EncodeError::UnsupportedFloatSize {
                tag: 'f',
                expected: 4,
                actual: bytes.len(),
            });
        }
        self.buffer.extend_from_slice(&bytes);
        self.check_aligned('f', start)
    }

    /// Writes a 64-bit float in network order.
    ///
    /// # Errors
    /// Returns an error if the native double-precision representation is
    /// not 8 bytes wide.
    pub fn push_f64(&mut self, value: f64) -> EncodeResult<()> {
        let start = self.buffer.len();
        let bytes = self.platform.to_network_order(&value.to_ne_bytes());
        if bytes.len() != 8 {
            return Err(EncodeError::UnsupportedFloatSize {
                tag: 'd',
                expected: 8,
                actual: bytes.len(),
            });
        }
        self.buffer.extend_from_slice(&bytes);
        self.check_aligned('d', start)
    }

    /// Writes a timetag as two 32-bit words, seconds then fraction.
    pub fn push_timetag(&mut self, value: Timetag) -> EncodeResult<()> {
        let start = self.buffer.len();
        let seconds = self.platform.to_network_order(&value.seconds.to_ne_bytes());
        let fraction = self
            .platform
            .to_network_order(&value.fraction.to_ne_bytes());
        self.buffer.extend_from_slice(&seconds);
        self.buffer.extend_from_slice(&fraction);
        self.check_aligned('t', start)
    }

    /// Writes a blob: 32-bit length prefix, payload, zero padding.
    ///
    /// # Errors
    /// Returns an error if the payload does not fit the signed 32-bit
    /// length prefix.
    pub fn push_blob(&mut self, value: &Blob) -> EncodeResult<()> {
        let start = self.buffer.len();
        let length = i32::try_from(value.len()).map_err(|_| EncodeError::ValueTooLarge {
            field: "blob length",
            max: i32::MAX as u64,
            actual: value.len() as u64,
        })?;
        self.push_i32(length)?;
        self.buffer.extend_from_slice(value.as_bytes());
        self.pad();
        self.check_aligned('b', start)
    }

    /// Appends an already-encoded datagram verbatim.
    ///
    /// # Errors
    /// Returns an error if the input is not itself 4-byte aligned.
    pub fn push_raw(&mut self, bytes: &[u8]) -> EncodeResult<()> {
        if bytes.len() % 4 != 0 {
            return Err(EncodeError::AlignmentViolation {
                tag: '#',
                appended: bytes.len(),
            });
        }
        self.buffer.extend_from_slice(bytes);
        Ok(())
    }

    /// Returns the current size of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Finishes writing and returns the complete buffer.
    pub fn finish(self) -> Vec<u8> {
        self.buffer
    }

    /// Zero-pads the buffer to the next 4-byte boundary.
    fn pad(&mut self) {
        let target = self.buffer.len() + pad_length(self.buffer.len());
        self.buffer.resize(target, 0);
    }

    /// Post-condition of every push: the appended byte count is a
    /// multiple of 4.
    fn check_aligned(&self, tag: char, start: usize) -> EncodeResult<()> {
        let appended = self.buffer.len() - start;
        if appended % 4 != 0 {
            return Err(EncodeError::AlignmentViolation { tag, appended });
        }
        Ok(())
    }
}

/// Encoded length of an osc-string, terminator and padding included.
pub(crate) fn str_encoded_len(value: &str) -> usize {
    let with_terminator = value.len() + 1;
    with_terminator + pad_length(with_terminator)
}

/// Encoded length of a single argument.
pub(crate) fn arg_encoded_len(arg: &OscArg) -> usize {
    match arg {
        OscArg::Int32(_) | OscArg::Float32(_) => 4,
        OscArg::Float64(_) | OscArg::Timetag(_) => 8,
        OscArg::True | OscArg::False | OscArg::Nil | OscArg::Infinitum => 0,
        OscArg::Str(value) => str_encoded_len(value),
        OscArg::Blob(value) => 4 + value.len() + pad_length(value.len()),
        OscArg::Array(elements) => elements.iter().map(arg_encoded_len).sum(),
    }
}
