//! Encoder for Open Sound Control 1.0 datagrams.
//!
//! This crate builds OSC messages and bundles and renders them into the
//! binary wire format: big-endian numerics, null-terminated strings,
//! and 4-byte alignment throughout. Encoded buffers are cached per
//! datagram and can be shipped over UDP with the bundled [`OscClient`].
//!
//! Type tags are committed when arguments are added, either inferred
//! from the value or forced with an explicit tag hint, so a datagram
//! can always report its type tag string before encoding.
//!
//! # Examples
//! ```rust
//! use oscwire::{OscMessage, PlatformInfo};
//!
//! let platform = PlatformInfo::probe()?;
//! let mut message = OscMessage::new("/test");
//! message.add_arg(1);
//! message.add_arg(2.0f32);
//!
//! let bytes = message.encode(&platform)?;
//! assert_eq!(bytes.len(), 20);
//! # Ok::<(), oscwire::EncodeError>(())
//! ```
//!
//! Bundles collect messages (and nested bundles) behind a shared
//! timetag:
//!
//! ```rust
//! use oscwire::{OscBundle, OscMessage, PlatformInfo, Timetag};
//!
//! let platform = PlatformInfo::probe()?;
//! let mut bundle = OscBundle::new();
//! bundle.set_timetag(Timetag::new(3_608_146_800, 0));
//! bundle.add_packet(OscMessage::new("/start"));
//! assert_eq!(&bundle.encode(&platform)?[..8], b"#bundle\0");
//! # Ok::<(), oscwire::EncodeError>(())
//! ```
//!
//! # Features
//! - `serde` (default): JSON-friendly serialization of datagrams and
//!   arguments via [serde](https://crates.io/crates/serde).
//! - `base64`: [`Base64Encodable`] for transport over text protocols.
//! - `cli`: the `oscwire` command-line encoder binary.

pub mod bundle;
pub mod client;
pub mod encoding;
pub mod fmt;
pub mod message;
pub mod platform;
mod tags;
pub mod types;

#[cfg(feature = "serde")]
mod serde;

pub use bundle::{OscBundle, OscPacket};
pub use client::{ClientError, ClientResult, OscClient};
#[cfg(feature = "base64")]
pub use encoding::Base64Encodable;
pub use encoding::{Datagram, DatagramWriter, EncodeError, EncodeResult};
pub use message::OscMessage;
pub use platform::{PlatformInfo, pad_length};
pub use types::{Blob, OscArg, Timetag};
