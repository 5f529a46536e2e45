//! Demonstrates building and encoding OSC datagrams.
//!
//! This example walks through messages with inferred and hinted type
//! tags, nested arrays, blobs, and bundles, and shows what the encoder
//! reports when a value cannot satisfy a requested tag.

use oscwire::fmt::{hex_dump, human_readable};
use oscwire::{Blob, EncodeError, OscArg, OscBundle, OscMessage, PlatformInfo, Timetag};
use std::time::SystemTime;

fn main() -> oscwire::EncodeResult<()> {
    println!("=== OSC Encoding Demo ===\n");

    let platform = PlatformInfo::probe()?;

    // Example 1: Message with inferred type tags
    println!("1. Encoding a fader move with inferred tags:");

    let mut message = OscMessage::new("/mixer/channel/1");
    message.add_arg(1);
    message.add_arg(0.5f32);

    // Repeated encode calls hit the cache, so reborrowing is free.
    let length = message.encode(&platform)?.len();
    println!("   Type tags: {}", message.type_tags());
    println!("   Length: {} bytes", length);
    println!("   Bytes: {}\n", human_readable(message.encode(&platform)?));

    // Example 2: Explicit tag hints
    println!("2. Forcing tags with hints:");

    let mut message = OscMessage::new("/synth/detune");
    message.add_arg_with_hint(1, 'd')?;
    message.add_arg_with_hint("relative", 'c')?;

    println!("   Committed tags: {}", message.type_tags());
    println!("   The integer became a float64, the 'c' hint a string\n");

    // Example 3: Nested arrays
    println!("3. Grouping arguments with arrays:");

    let mut message = OscMessage::new("/sequencer/pattern");
    message.add_arg(4);
    message.add_arg(vec![
        OscArg::Int32(60),
        OscArg::Int32(64),
        OscArg::Array(vec![OscArg::True, OscArg::Str("accent".to_string())]),
    ]);

    println!("   Type tags: {}", message.type_tags());
    println!(
        "   Brackets shape the tag string only, payloads stay flat: {} bytes\n",
        message.encode(&platform)?.len()
    );

    // Example 4: Binary payloads
    println!("4. Carrying raw bytes in a blob:");

    let mut message = OscMessage::new("/sampler/load");
    message.add_arg(Blob::new(vec![0xDE, 0xAD, 0xBE, 0xEF, 0x00]));

    println!("   Hex: {}\n", hex_dump(message.encode(&platform)?));

    // Example 5: Bundles and timetags
    println!("5. Scheduling messages in a bundle:");

    let mut bundle = OscBundle::new();
    bundle.set_timetag(Timetag::from_system_time(SystemTime::now()));
    bundle.add_packet(OscMessage::new("/transport/start"));

    let mut stop = OscMessage::new("/transport/stop");
    stop.add_arg(16);
    bundle.add_packet(stop);

    let encoded_len = bundle.encode(&platform)?.len();
    println!("   Children: {}", bundle.packets().len());
    println!("   Encoded: {} bytes", encoded_len);
    println!(
        "   Header: {}\n",
        human_readable(&bundle.encode(&platform)?[..8])
    );

    // Example 6: Error Handling
    println!("6. Demonstrating error handling:");

    let mut message = OscMessage::new("/strict");
    match message.add_arg_with_hint(2, 't') {
        Ok(_) => println!("   Unexpected success"),
        Err(EncodeError::UnsupportedType { tag, kind }) => {
            println!("   ✓ Caught mismatched hint: '{}' cannot take a {}", tag, kind);
        }
        Err(e) => println!("   Unexpected error: {}", e),
    }

    match message.add_arg_with_hint(2, 'x') {
        Ok(_) => println!("   Unexpected success"),
        Err(EncodeError::UnknownTypeTag { tag }) => {
            println!("   ✓ Caught unknown tag: '{}'", tag);
        }
        Err(e) => println!("   Unexpected error: {}", e),
    }

    println!("\n=== Demo completed successfully! ===");
    Ok(())
}
