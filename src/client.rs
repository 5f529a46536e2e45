//! UDP transport for encoded OSC datagrams.

use std::error::Error;
use std::fmt;
use std::io;
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

use crate::encoding::{Datagram, EncodeError};
use crate::platform::PlatformInfo;

/// Errors that can occur while sending a datagram.
#[derive(Debug)]
pub enum ClientError {
    /// The underlying socket operation failed.
    Io(io::Error),
    /// The datagram could not be encoded.
    Encode(EncodeError),
    /// No destination was configured before sending.
    NoDestination,
    /// The socket accepted fewer bytes than the datagram contains.
    PartialSend {
        /// Bytes the socket actually sent.
        sent: usize,
        /// Bytes the encoded datagram contains.
        expected: usize,
    },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Io(err) => write!(f, "Socket error: {}", err),
            ClientError::Encode(err) => write!(f, "Encoding error: {}", err),
            ClientError::NoDestination => {
                write!(f, "Destination is not well-defined, use set_destination() first")
            }
            ClientError::PartialSend { sent, expected } => write!(
                f,
                "Could not send the entire datagram, only {} of {} bytes were sent",
                sent, expected
            ),
        }
    }
}

impl Error for ClientError {}

impl From<io::Error> for ClientError {
    fn from(err: io::Error) -> Self {
        ClientError::Io(err)
    }
}

impl From<EncodeError> for ClientError {
    fn from(err: EncodeError) -> Self {
        ClientError::Encode(err)
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// A UDP client that encodes and sends OSC datagrams.
///
/// The client owns an unconnected socket bound to an ephemeral port and
/// a probed [`PlatformInfo`], so callers can hand it any [`Datagram`]
/// without carrying platform context themselves.
///
/// # Examples
/// ```rust
/// use oscwire::OscClient;
///
/// let mut client = OscClient::new()?;
/// client.set_destination("127.0.0.1:9000")?;
/// assert!(client.destination().is_some());
/// # Ok::<(), oscwire::ClientError>(())
/// ```
#[derive(Debug)]
pub struct OscClient {
    socket: UdpSocket,
    destination: Option<SocketAddr>,
    platform: PlatformInfo,
}

impl OscClient {
    /// Creates a client with no destination yet.
    ///
    /// # Errors
    /// Fails when no socket can be bound or the platform probe rejects
    /// this machine.
    pub fn new() -> ClientResult<Self> {
        let socket = UdpSocket::bind(("0.0.0.0", 0))?;
        let platform = PlatformInfo::probe()?;
        Ok(Self {
            socket,
            destination: None,
            platform,
        })
    }

    /// Creates a client that sends to the given destination.
    pub fn with_destination(destination: impl ToSocketAddrs) -> ClientResult<Self> {
        let mut client = Self::new()?;
        client.set_destination(destination)?;
        Ok(client)
    }

    /// Points the client at a new destination, e.g. `"192.168.1.20:57120"`.
    ///
    /// When the argument resolves to several addresses the first one is
    /// used.
    pub fn set_destination(&mut self, destination: impl ToSocketAddrs) -> ClientResult<()> {
        let resolved = destination.to_socket_addrs()?.next().ok_or_else(|| {
            ClientError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                "destination did not resolve to any address",
            ))
        })?;
        self.destination = Some(resolved);
        Ok(())
    }

    /// Returns the configured destination, if any.
    pub fn destination(&self) -> Option<SocketAddr> {
        self.destination
    }

    /// Returns the address the socket is bound to.
    pub fn local_addr(&self) -> ClientResult<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// Enables or disables broadcast sends on the socket.
    pub fn set_broadcast(&self, broadcast: bool) -> ClientResult<()> {
        self.socket.set_broadcast(broadcast)?;
        Ok(())
    }

    /// Returns the platform description the client encodes with.
    pub fn platform(&self) -> &PlatformInfo {
        &self.platform
    }

    /// Encodes the datagram and sends it to the configured destination.
    ///
    /// Returns the number of bytes sent, which always equals the
    /// encoded length on success.
    ///
    /// # Errors
    /// Returns [`ClientError::NoDestination`] when no destination is
    /// configured, [`ClientError::Encode`] when encoding fails, and
    /// [`ClientError::PartialSend`] when the socket truncates the
    /// datagram.
    pub fn send<D>(&self, datagram: &mut D) -> ClientResult<usize>
    where
        D: Datagram + ?Sized,
    {
        let bytes = datagram.encode(&self.platform)?;
        self.send_bytes(bytes)
    }

    /// Sends an already-encoded datagram.
    pub fn send_bytes(&self, bytes: &[u8]) -> ClientResult<usize> {
        let destination = self.destination.ok_or(ClientError::NoDestination)?;
        log::debug!("sending {} bytes to {}", bytes.len(), destination);
        let sent = self.socket.send_to(bytes, destination)?;
        if sent != bytes.len() {
            return Err(ClientError::PartialSend {
                sent,
                expected: bytes.len(),
            });
        }
        Ok(sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::OscBundle;
    use crate::message::OscMessage;
    use std::time::Duration;

    #[test]
    fn test_send_without_destination_fails() {
        let client = OscClient::new().unwrap();
        let mut message = OscMessage::new("/nowhere");
        let err = client.send(&mut message).unwrap_err();
        assert!(matches!(err, ClientError::NoDestination));
    }

    #[test]
    fn test_send_reaches_a_local_receiver() {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        receiver
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();

        let client = OscClient::with_destination(receiver.local_addr().unwrap()).unwrap();

        let mut message = OscMessage::new("/test");
        message.add_arg(1);
        message.add_arg(2.0f32);
        let expected = message.encode(client.platform()).unwrap().to_vec();

        let sent = client.send(&mut message).unwrap();
        assert_eq!(sent, 20);

        let mut buffer = [0u8; 64];
        let (received, _) = receiver.recv_from(&mut buffer).unwrap();
        assert_eq!(&buffer[..received], expected.as_slice());
    }

    #[test]
    fn test_send_accepts_bundles() {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        receiver
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();

        let client = OscClient::with_destination(receiver.local_addr().unwrap()).unwrap();

        let mut bundle = OscBundle::new();
        bundle.add_packet(OscMessage::new("/test"));
        let sent = client.send(&mut bundle).unwrap();
        assert_eq!(sent, 32);

        let mut buffer = [0u8; 64];
        let (received, _) = receiver.recv_from(&mut buffer).unwrap();
        assert_eq!(received, 32);
        assert_eq!(&buffer[..8], b"#bundle\0");
    }

    #[test]
    fn test_send_bytes_passes_raw_buffers_through() {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        receiver
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();

        let client = OscClient::with_destination(receiver.local_addr().unwrap()).unwrap();
        let sent = client.send_bytes(b"/raw\0\0\0\0,\0\0\0").unwrap();
        assert_eq!(sent, 12);

        let mut buffer = [0u8; 64];
        let (received, _) = receiver.recv_from(&mut buffer).unwrap();
        assert_eq!(&buffer[..received], b"/raw\0\0\0\0,\0\0\0");
    }

    #[test]
    fn test_destination_tracking() {
        let mut client = OscClient::new().unwrap();
        assert!(client.destination().is_none());

        client.set_destination("127.0.0.1:9000").unwrap();
        let destination = client.destination().unwrap();
        assert_eq!(destination.port(), 9000);
        assert!(client.local_addr().is_ok());
    }
}
