use clap::{Parser, ValueEnum};
use data_encoding::BASE64;
use serde_json::json;
use std::process;

use oscwire::fmt::{hex_dump, human_readable};
use oscwire::{
    Blob, OscArg, OscBundle, OscClient, OscMessage, OscPacket, PlatformInfo, Timetag,
};

#[derive(Parser)]
#[command(
    name = "oscwire",
    version,
    about = "Encode OSC messages and bundles from command-line arguments"
)]
struct Cli {
    /// OSC address pattern, e.g. /mixer/channel/1
    address: String,

    /// Arguments as TAG:VALUE pairs (i:1, f:2.5, d:2.5, s:text, c:text,
    /// t:SEC:FRAC, b:BASE64) or bare T, F, N, I. Untagged values are
    /// inferred as int32, float32, then string.
    args: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "dump")]
    output: OutputFormat,

    /// Wrap the message in a bundle
    #[arg(long)]
    bundle: bool,

    /// Bundle timetag as SEC:FRAC (implies --bundle)
    #[arg(long, value_name = "SEC:FRAC")]
    timetag: Option<String>,

    /// Send the encoded datagram over UDP
    #[arg(long, value_name = "HOST:PORT")]
    send: Option<String>,

    /// Allow sending to broadcast addresses
    #[arg(long)]
    broadcast: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Annotated byte dump
    Dump,
    /// Raw hex clusters
    Hex,
    /// Base64 of the datagram
    Base64,
    /// Machine-readable JSON
    Json,
}

fn parse_timetag(input: &str) -> Result<Timetag, String> {
    let invalid = || format!("invalid timetag '{input}', expected SEC:FRAC");
    let (seconds, fraction) = input.split_once(':').ok_or_else(invalid)?;
    let seconds = seconds.parse().map_err(|_| invalid())?;
    let fraction = fraction.parse().map_err(|_| invalid())?;
    Ok(Timetag::new(seconds, fraction))
}

/// Turns one command-line token into a message argument.
///
/// Recognized tag prefixes commit that tag; anything else falls back to
/// untagged inference, so strings containing colons still work.
fn add_token(message: &mut OscMessage, token: &str) -> Result<(), String> {
    match token {
        "T" => {
            message.add_arg(true);
            return Ok(());
        }
        "F" => {
            message.add_arg(false);
            return Ok(());
        }
        "N" => {
            message.add_arg(OscArg::Nil);
            return Ok(());
        }
        "I" => {
            message.add_arg(OscArg::Infinitum);
            return Ok(());
        }
        _ => {}
    }

    if let Some((tag, value)) = token.split_once(':') {
        match tag {
            "i" => {
                let parsed: i32 = value
                    .parse()
                    .map_err(|_| format!("invalid int32 value '{value}'"))?;
                message.add_arg(parsed);
                return Ok(());
            }
            "f" => {
                let parsed: f32 = value
                    .parse()
                    .map_err(|_| format!("invalid float32 value '{value}'"))?;
                message.add_arg(parsed);
                return Ok(());
            }
            "d" => {
                let parsed: f64 = value
                    .parse()
                    .map_err(|_| format!("invalid float64 value '{value}'"))?;
                message.add_arg(parsed);
                return Ok(());
            }
            "s" => {
                message.add_arg(value);
                return Ok(());
            }
            "c" => {
                message
                    .add_arg_with_hint(value, 'c')
                    .map_err(|err| err.to_string())?;
                return Ok(());
            }
            "t" => {
                message.add_arg(parse_timetag(value)?);
                return Ok(());
            }
            "b" => {
                let decoded = BASE64
                    .decode(value.as_bytes())
                    .map_err(|_| format!("invalid base64 blob '{value}'"))?;
                message.add_arg(Blob::new(decoded));
                return Ok(());
            }
            _ => {}
        }
    }

    if let Ok(parsed) = token.parse::<i32>() {
        message.add_arg(parsed);
    } else if let Ok(parsed) = token.parse::<f32>() {
        message.add_arg(parsed);
    } else {
        message.add_arg(token);
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), String> {
    let platform = PlatformInfo::probe().map_err(|err| err.to_string())?;

    let mut message = OscMessage::new(&cli.address);
    for token in &cli.args {
        add_token(&mut message, token)?;
    }

    let address = message.address().to_string();
    let type_tags = message.type_tags().to_string();

    let wrap_in_bundle = cli.bundle || cli.timetag.is_some();
    let mut datagram: OscPacket = if wrap_in_bundle {
        let mut bundle = OscBundle::new();
        if let Some(timetag) = &cli.timetag {
            bundle.set_timetag(parse_timetag(timetag)?);
        }
        bundle.add_packet(message);
        bundle.into()
    } else {
        message.into()
    };

    let encoded = datagram
        .encode(&platform)
        .map_err(|err| err.to_string())?
        .to_vec();

    let sent = match &cli.send {
        Some(destination) => {
            let mut client = OscClient::new().map_err(|err| err.to_string())?;
            client
                .set_destination(destination.as_str())
                .map_err(|err| err.to_string())?;
            if cli.broadcast {
                client.set_broadcast(true).map_err(|err| err.to_string())?;
            }
            Some(client.send_bytes(&encoded).map_err(|err| err.to_string())?)
        }
        None => None,
    };

    match cli.output {
        OutputFormat::Dump => {
            println!("Encoded OSC datagram: {} bytes", encoded.len());
            println!("  Address: {}", address);
            println!("  Type tags: {}", type_tags);
            println!("  Bytes: {}", human_readable(&encoded));
            if let Some(sent) = sent {
                println!(
                    "  Sent: {} bytes to {}",
                    sent,
                    cli.send.as_deref().unwrap_or_default()
                );
            }
        }
        OutputFormat::Hex => println!("{}", hex_dump(&encoded)),
        OutputFormat::Base64 => println!("{}", BASE64.encode(&encoded)),
        OutputFormat::Json => {
            let mut value = json!({
                "status": "success",
                "address": address,
                "type_tags": type_tags,
                "length": encoded.len(),
                "encoded": BASE64.encode(&encoded),
                "bundle": wrap_in_bundle,
            });
            if let Some(sent) = sent {
                value["sent"] = json!(sent);
            }
            let rendered =
                serde_json::to_string_pretty(&value).map_err(|err| err.to_string())?;
            println!("{}", rendered);
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        if cli.output == OutputFormat::Json {
            let value = json!({
                "status": "error",
                "error": error,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&value).unwrap_or_default()
            );
        } else {
            eprintln!("Error: {}", error);
        }
        process::exit(1);
    }
}
