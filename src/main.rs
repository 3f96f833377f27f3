use anyhow::Context;
use clap::{Parser, Subcommand};
use powerlink_rs::frame::{parse_frame, FrameData, MessageType};
use powerlink_rs::init_logger;
use powerlink_rs::util::hex::{format_hex_compact, parse_hex_lenient, pretty_hex};

#[derive(Parser)]
#[command(name = "plk-cli")]
#[command(about = "CLI tool for POWERLINK frame inspection")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a hex-encoded POWERLINK frame and print its fields
    Decode {
        /// Frame bytes as hex; separators and whitespace are ignored
        hex: String,
    },
    /// Classify a message type tag byte
    Classify {
        /// Tag byte, e.g. 01 or 0x0D
        tag: String,
    },
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode { hex } => {
            let bytes = parse_hex_lenient(&hex).context("invalid hex input")?;
            let frame = parse_frame(&bytes).context("frame decode failed")?;

            println!(
                "{:?} frame, {} octets, node {} -> {}",
                frame.message_type(),
                frame.total_len(),
                frame.src_node_id,
                frame.dst_node_id
            );
            println!("dst mac    {}", format_hex_compact(&frame.dst_mac));
            println!("src mac    {}", format_hex_compact(&frame.src_mac));
            println!("ether type 0x{:04X}", frame.ether_type);

            match &frame.data {
                FrameData::Soc(body) => {
                    println!("flags      {:?}", body.flags());
                    println!("net time   {}s {}ns", body.net_time.sec, body.net_time.nsec);
                    println!("rel time   {} us", body.relative_time);
                }
                FrameData::Preq(body) => {
                    println!("flags      {:?}", body.flags());
                    println!("pdo ver    {}", body.pdo_version);
                    println!("size       {}", body.size);
                    if !body.payload().is_empty() {
                        println!("{}", pretty_hex(body.payload(), 16));
                    }
                }
                FrameData::Pres(body) => {
                    println!("nmt status 0x{:02X}", body.nmt_status);
                    println!("flags      {:?}", body.flags());
                    println!("pr/rs      {}/{}", body.priority(), body.request_to_send());
                    println!("pdo ver    {}", body.pdo_version);
                    println!("size       {}", body.size);
                    if !body.payload().is_empty() {
                        println!("{}", pretty_hex(body.payload(), 16));
                    }
                }
                FrameData::Soa(body) => {
                    println!("opaque SoA body, {} octets", body.raw.len());
                    if !body.raw.is_empty() {
                        println!("{}", pretty_hex(&body.raw, 16));
                    }
                }
                FrameData::Asnd(body) => {
                    println!("opaque ASnd body, {} octets", body.raw.len());
                    if !body.raw.is_empty() {
                        println!("{}", pretty_hex(&body.raw, 16));
                    }
                }
            }
        }
        Commands::Classify { tag } => {
            let cleaned = tag.trim_start_matches("0x").trim_start_matches("0X");
            let value =
                u8::from_str_radix(cleaned, 16).context("tag must be a hex byte, e.g. 01 or 0x0D")?;
            println!("0x{value:02X} -> {:?}", MessageType::from_byte(value));
        }
    }

    Ok(())
}
