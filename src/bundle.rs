//! OSC bundles and the packet enum that unifies them with messages.

use crate::encoding::{Datagram, DatagramWriter, EncodeError, EncodeResult};
use crate::message::OscMessage;
use crate::platform::PlatformInfo;
use crate::types::Timetag;

/// Either kind of OSC packet. Bundles nest through this type.
#[derive(Debug, Clone, PartialEq)]
pub enum OscPacket {
    Message(OscMessage),
    Bundle(OscBundle),
}

impl OscPacket {
    /// Encodes the wrapped packet.
    pub fn encode(&mut self, platform: &PlatformInfo) -> EncodeResult<&[u8]> {
        match self {
            OscPacket::Message(message) => message.encode(platform),
            OscPacket::Bundle(bundle) => bundle.encode(platform),
        }
    }

    /// Clears the wrapped packet.
    pub fn clear(&mut self) {
        match self {
            OscPacket::Message(message) => message.clear(),
            OscPacket::Bundle(bundle) => bundle.clear(),
        }
    }

    pub(crate) fn encoded_len(&self) -> usize {
        match self {
            OscPacket::Message(message) => message.encoded_len(),
            OscPacket::Bundle(bundle) => bundle.encoded_len(),
        }
    }
}

impl From<OscMessage> for OscPacket {
    fn from(message: OscMessage) -> Self {
        OscPacket::Message(message)
    }
}

impl From<OscBundle> for OscPacket {
    fn from(bundle: OscBundle) -> Self {
        OscPacket::Bundle(bundle)
    }
}

impl Datagram for OscPacket {
    fn encode(&mut self, platform: &PlatformInfo) -> EncodeResult<&[u8]> {
        OscPacket::encode(self, platform)
    }

    fn clear(&mut self) {
        OscPacket::clear(self);
    }
}

/// An OSC bundle: a timetag plus a list of child packets, each prefixed
/// on the wire with its own length.
///
/// A bundle without an explicit timetag encodes the immediate sentinel.
/// Children keep their own encoding caches, so re-encoding a bundle
/// after one child changed only re-renders that child.
///
/// # Examples
/// ```rust
/// use oscwire::{OscBundle, OscMessage, PlatformInfo, Timetag};
///
/// let platform = PlatformInfo::probe()?;
/// let mut bundle = OscBundle::new();
/// bundle.set_timetag(Timetag::new(3_608_146_800, 0));
/// bundle.add_packet(OscMessage::new("/test"));
/// let bytes = bundle.encode(&platform)?;
/// assert_eq!(&bytes[..8], b"#bundle\0");
/// assert_eq!(bytes.len(), 32);
/// # Ok::<(), oscwire::EncodeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OscBundle {
    timetag: Option<Timetag>,
    children: Vec<OscPacket>,
    cache: Option<Vec<u8>>,
}

impl OscBundle {
    /// Creates an empty bundle with an immediate timetag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bundle from an initial set of packets.
    pub fn with_packets(packets: Vec<OscPacket>) -> Self {
        Self {
            timetag: None,
            children: packets,
            cache: None,
        }
    }

    /// Returns the explicit timetag, if one was set.
    pub fn timetag(&self) -> Option<Timetag> {
        self.timetag
    }

    /// Sets or removes the bundle timetag. `None` falls back to the
    /// immediate sentinel on the wire.
    pub fn set_timetag(&mut self, timetag: impl Into<Option<Timetag>>) {
        self.cache = None;
        self.timetag = timetag.into();
    }

    /// Returns the child packets in insertion order.
    pub fn packets(&self) -> &[OscPacket] {
        &self.children
    }

    /// Appends a message or nested bundle.
    pub fn add_packet(&mut self, packet: impl Into<OscPacket>) {
        self.cache = None;
        self.children.push(packet.into());
    }

    /// Removes every child packet. The timetag is kept.
    pub fn clear(&mut self) {
        self.children.clear();
        self.cache = None;
    }

    /// Encodes the bundle, reusing the cached bytes when nothing has
    /// changed since the last call.
    pub fn encode(&mut self, platform: &PlatformInfo) -> EncodeResult<&[u8]> {
        if self.cache.is_none() {
            let rendered = self.render(platform)?;
            self.cache = Some(rendered);
        }
        Ok(self.cache.as_deref().unwrap_or_default())
    }

    /// Exact size of the encoded bundle in bytes.
    pub(crate) fn encoded_len(&self) -> usize {
        16 + self
            .children
            .iter()
            .map(|child| 4 + child.encoded_len())
            .sum::<usize>()
    }

    fn render(&mut self, platform: &PlatformInfo) -> EncodeResult<Vec<u8>> {
        let mut writer = DatagramWriter::with_capacity(*platform, self.encoded_len());
        writer.push_str("#bundle")?;
        writer.push_timetag(self.timetag.unwrap_or_default())?;
        for child in &mut self.children {
            let bytes = child.encode(platform)?;
            let length =
                i32::try_from(bytes.len()).map_err(|_| EncodeError::ValueTooLarge {
                    field: "bundle element length",
                    max: i32::MAX as u64,
                    actual: bytes.len() as u64,
                })?;
            writer.push_i32(length)?;
            writer.push_raw(bytes)?;
        }
        Ok(writer.finish())
    }
}

impl Datagram for OscBundle {
    fn encode(&mut self, platform: &PlatformInfo) -> EncodeResult<&[u8]> {
        OscBundle::encode(self, platform)
    }

    fn clear(&mut self) {
        OscBundle::clear(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> PlatformInfo {
        PlatformInfo::probe().unwrap()
    }

    #[test]
    fn test_empty_bundle_is_header_and_immediate_timetag() {
        let platform = platform();
        let mut bundle = OscBundle::new();
        let bytes = bundle.encode(&platform).unwrap();
        assert_eq!(bytes, b"#bundle\0\x00\x00\x00\x00\x00\x00\x00\x01");
    }

    #[test]
    fn test_explicit_timetag_on_the_wire() {
        let platform = platform();
        let mut bundle = OscBundle::new();
        bundle.set_timetag(Timetag::new(0xD693_A400, 0x8000_0000));
        let bytes = bundle.encode(&platform).unwrap();
        assert_eq!(&bytes[8..16], &[0xD6, 0x93, 0xA4, 0x00, 0x80, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_children_carry_length_prefixes() {
        let platform = platform();
        let mut inner = OscBundle::new();
        inner.add_packet(OscMessage::new("/x"));

        let mut message = OscMessage::new("/a");
        message.add_arg(7);

        let mut outer = OscBundle::with_packets(vec![inner.into(), message.into()]);
        let bytes = outer.encode(&platform).unwrap().to_vec();

        // 16 header + (4 + 28) inner bundle + (4 + 12) message
        assert_eq!(bytes.len(), 64);
        assert_eq!(&bytes[..8], b"#bundle\0");
        assert_eq!(&bytes[16..20], &[0x00, 0x00, 0x00, 0x1C]);
        assert_eq!(&bytes[20..28], b"#bundle\0");
        assert_eq!(&bytes[48..52], &[0x00, 0x00, 0x00, 0x0C]);
        assert_eq!(&bytes[52..56], b"/a\0\0");
        assert_eq!(&bytes[56..64], &[0x2C, 0x69, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07]);
        assert_eq!(outer.encoded_len(), bytes.len());
    }

    #[test]
    fn test_set_timetag_invalidates_cache() {
        let platform = platform();
        let mut bundle = OscBundle::new();
        let immediate = bundle.encode(&platform).unwrap().to_vec();

        bundle.set_timetag(Timetag::new(5, 0));
        let scheduled = bundle.encode(&platform).unwrap();
        assert_ne!(immediate, scheduled);
        assert_eq!(&scheduled[8..16], &[0, 0, 0, 5, 0, 0, 0, 0]);
    }

    #[test]
    fn test_clear_drops_children_but_keeps_timetag() {
        let platform = platform();
        let mut bundle = OscBundle::new();
        bundle.set_timetag(Timetag::new(9, 9));
        bundle.add_packet(OscMessage::new("/gone"));

        bundle.clear();
        assert!(bundle.packets().is_empty());
        assert_eq!(bundle.timetag(), Some(Timetag::new(9, 9)));

        let bytes = bundle.encode(&platform).unwrap();
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[8..16], &[0, 0, 0, 9, 0, 0, 0, 9]);
    }

    #[test]
    fn test_packet_enum_dispatches_both_ways() {
        let platform = platform();
        let mut packets: Vec<OscPacket> = vec![
            OscMessage::new("/m").into(),
            OscBundle::new().into(),
        ];
        let lengths: Vec<usize> = packets
            .iter_mut()
            .map(|packet| packet.encode(&platform).unwrap().len())
            .collect();
        assert_eq!(lengths, vec![8, 16]);
    }

    #[test]
    fn test_clear_through_datagram_trait() {
        let platform = platform();
        let mut message = OscMessage::new("/trait");
        message.add_arg(1);
        let mut packet: OscPacket = message.into();
        let datagram: &mut dyn Datagram = &mut packet;
        datagram.clear();
        assert_eq!(datagram.encode(&platform).unwrap(), b"/\0\0\0,\0\0\0");
    }

    #[test]
    fn test_bundle_encodes_through_datagram_trait() {
        let platform = platform();
        let mut bundle = OscBundle::new();
        bundle.add_packet(OscMessage::new("/dyn"));
        let datagram: &mut dyn Datagram = &mut bundle;

        let bytes = datagram.encode(&platform).unwrap();
        assert_eq!(&bytes[..8], b"#bundle\0");
        assert_eq!(bytes.len(), 32);

        datagram.clear();
        assert_eq!(datagram.encode(&platform).unwrap().len(), 16);
    }
}
