//! Formatting utilities for encoded OSC datagrams.
//!
//! This module provides debug-oriented renderings of wire buffers in
//! 4-byte clusters, the natural unit of an OSC datagram, with
//! intelligent handling of printable vs binary bytes.

/// Renders a wire buffer as space-separated 4-byte clusters, showing
/// printable ASCII bytes as `_c` and everything else as two hex digits.
///
/// Both forms occupy two characters, so the clusters line up no matter
/// how text and binary data interleave.
///
/// # Arguments
/// * `bytes` - Encoded datagram to render
///
/// # Examples
/// ```rust
/// use oscwire::fmt::human_readable;
///
/// assert_eq!(human_readable(b"/hi\0"), "_/_h_i00");
/// assert_eq!(
///     human_readable(&[0x2C, 0x69, 0x66, 0x00, 0x00, 0x00, 0x00, 0x01]),
///     "_,_i_f00 00000001"
/// );
/// ```
pub fn human_readable(bytes: &[u8]) -> String {
    render(bytes, false)
}

/// Renders a wire buffer as space-separated 4-byte clusters of hex
/// digits, with no printable-character substitution.
///
/// # Arguments
/// * `bytes` - Encoded datagram to render
///
/// # Examples
/// ```rust
/// use oscwire::fmt::hex_dump;
///
/// assert_eq!(hex_dump(b"/hi\0"), "2f686900");
/// assert_eq!(hex_dump(&[0xDE, 0xAD, 0xBE, 0xEF, 0x00]), "deadbeef 00");
/// ```
pub fn hex_dump(bytes: &[u8]) -> String {
    render(bytes, true)
}

fn render(bytes: &[u8], hex_only: bool) -> String {
    bytes
        .chunks(4)
        .map(|cluster| {
            cluster
                .iter()
                .map(|&byte| {
                    if !hex_only && (33..=126).contains(&byte) {
                        format!("_{}", byte as char)
                    } else {
                        format!("{:02x}", byte)
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}
