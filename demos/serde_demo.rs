//! Demonstrates JSON serialization of OSC datagrams.
//!
//! Requires the `serde` feature (enabled by default). Messages and
//! bundles serialize to plain JSON objects, blobs as base64 strings,
//! zero-width arguments as bare type markers.

use oscwire::{Blob, OscArg, OscBundle, OscMessage, Timetag};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== OSC JSON Demo ===\n");

    println!("1. A message with every payload shape:");

    let mut message = OscMessage::new("/status/report");
    message.add_arg(42);
    message.add_arg(0.25f32);
    message.add_arg("online");
    message.add_arg(true);
    message.add_arg(OscArg::Nil);
    message.add_arg(Timetag::new(3_913_056_000, 0));
    message.add_arg(Blob::new(vec![0xCA, 0xFE]));
    message.add_arg(vec![OscArg::Int32(1), OscArg::Int32(2)]);

    println!("{}\n", serde_json::to_string_pretty(&message)?);

    println!("2. A bundle, immediate and scheduled:");

    let mut bundle = OscBundle::new();
    bundle.add_packet(message.clone());
    println!("{}\n", serde_json::to_string_pretty(&bundle)?);

    bundle.set_timetag(Timetag::new(3_913_056_000, 1 << 31));
    println!("{}\n", serde_json::to_string_pretty(&bundle)?);

    println!("=== Demo completed successfully! ===");
    Ok(())
}
