//! OSC message datagram.

use crate::encoding::writer::{arg_encoded_len, str_encoded_len};
use crate::encoding::{Datagram, DatagramWriter, EncodeResult};
use crate::platform::PlatformInfo;
use crate::tags;
use crate::types::OscArg;

/// An OSC message: an address pattern plus a typed argument list.
///
/// Arguments are committed when they are added. [`OscMessage::add_arg`]
/// infers the type tag from the value; [`OscMessage::add_arg_with_hint`]
/// coerces the value to an explicit tag instead. Either way the type tag
/// string grows in step with the argument list and the packer never has
/// to guess.
///
/// Encoding is cached: the first [`OscMessage::encode`] renders the wire
/// bytes, and every mutating call drops the cache.
///
/// # Examples
/// ```rust
/// use oscwire::{OscMessage, PlatformInfo};
///
/// let platform = PlatformInfo::probe()?;
/// let mut message = OscMessage::new("/test");
/// message.add_arg(1);
/// message.add_arg(2.0f32);
/// assert_eq!(message.type_tags(), ",if");
/// assert_eq!(message.encode(&platform)?.len(), 20);
/// # Ok::<(), oscwire::EncodeError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OscMessage {
    address: String,
    type_tags: String,
    args: Vec<OscArg>,
    cache: Option<Vec<u8>>,
}

impl OscMessage {
    /// Creates an empty message for the given address pattern.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            type_tags: String::from(","),
            args: Vec::new(),
            cache: None,
        }
    }

    /// Creates a message and adds each argument with an inferred tag.
    ///
    /// Explicit tag hints are not possible through this constructor; use
    /// [`OscMessage::add_arg_with_hint`] for those.
    pub fn with_args(address: impl Into<String>, args: Vec<OscArg>) -> Self {
        let mut message = Self::new(address);
        for arg in args {
            message.add_arg(arg);
        }
        message
    }

    /// Returns the address pattern.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Sets the address pattern, e.g. `/mixer/channel/1`.
    pub fn set_address(&mut self, address: impl Into<String>) {
        self.cache = None;
        self.address = address.into();
    }

    /// Returns the type tag string, including the leading comma.
    pub fn type_tags(&self) -> &str {
        &self.type_tags
    }

    /// Returns the committed arguments in insertion order.
    pub fn args(&self) -> &[OscArg] {
        &self.args
    }

    /// Appends an argument, inferring its type tag from the value.
    pub fn add_arg(&mut self, arg: impl Into<OscArg>) {
        let arg = arg.into();
        self.cache = None;
        tags::append_inferred(&arg, &mut self.type_tags);
        self.args.push(arg);
    }

    /// Appends an argument under an explicit type tag.
    ///
    /// The value is coerced to the canonical form for `hint` (see the
    /// crate documentation for the conversion table). On error the
    /// message is left unchanged.
    ///
    /// # Errors
    /// Returns [`crate::EncodeError::UnknownTypeTag`] for an unrecognized
    /// hint and [`crate::EncodeError::UnsupportedType`] when the value
    /// cannot be converted to it.
    pub fn add_arg_with_hint(&mut self, arg: impl Into<OscArg>, hint: char) -> EncodeResult<()> {
        let mut committed = String::new();
        let canonical = tags::coerce(arg.into(), hint, &mut committed)?;
        self.cache = None;
        self.type_tags.push_str(&committed);
        self.args.push(canonical);
        Ok(())
    }

    /// Resets the message to its pristine state: address `/`, no
    /// arguments, no cached encoding.
    pub fn clear(&mut self) {
        self.address = String::from("/");
        self.type_tags = String::from(",");
        self.args.clear();
        self.cache = None;
    }

    /// Encodes the message, reusing the cached bytes when nothing has
    /// changed since the last call.
    pub fn encode(&mut self, platform: &PlatformInfo) -> EncodeResult<&[u8]> {
        if self.cache.is_none() {
            let rendered = self.render(platform)?;
            self.cache = Some(rendered);
        }
        Ok(self.cache.as_deref().unwrap_or_default())
    }

    /// Exact size of the encoded message in bytes.
    pub(crate) fn encoded_len(&self) -> usize {
        str_encoded_len(&self.address)
            + str_encoded_len(&self.type_tags)
            + self.args.iter().map(arg_encoded_len).sum::<usize>()
    }

    fn render(&self, platform: &PlatformInfo) -> EncodeResult<Vec<u8>> {
        let mut writer = DatagramWriter::with_capacity(*platform, self.encoded_len());
        writer.push_str(&self.address)?;
        writer.push_str(&self.type_tags)?;
        for arg in &self.args {
            writer.push_arg(arg)?;
        }
        Ok(writer.finish())
    }
}

impl Default for OscMessage {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Datagram for OscMessage {
    fn encode(&mut self, platform: &PlatformInfo) -> EncodeResult<&[u8]> {
        OscMessage::encode(self, platform)
    }

    fn clear(&mut self) {
        OscMessage::clear(self);
    }
}
