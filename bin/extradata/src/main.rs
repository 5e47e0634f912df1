//! CLI for building and inspecting Istanbul BFT extra-data.
//!
//! `extradata encode` reads a JSON array of validator addresses from piped
//! stdin and prints the header extra-data as a hex string; `extradata decode`
//! pretty-prints the fields of an existing extra-data blob.

use std::io::{self, IsTerminal, Read};

use alloy_primitives::hex;
use clap::{Args, Parser, Subcommand};
use ibft_primitives::{encode_extra_data, parse_validator_list, IstanbulExtra, EXTRA_VANITY};
use tracing::debug;

/// Istanbul BFT extra-data tool.
#[derive(Debug, Parser)]
#[command(author, version, about = "Istanbul BFT extra-data tool", long_about = None)]
struct Cli {
    /// The command to run; defaults to `encode`.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Commands to be executed.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Build extra-data from a JSON validator list read from stdin.
    Encode(EncodeCommand),
    /// Decode an extra-data blob and print its fields.
    Decode(DecodeCommand),
}

/// `extradata encode`
#[derive(Debug, Args)]
struct EncodeCommand {
    /// Vanity prefix as hex; padded or truncated to 32 bytes.
    #[arg(long, value_name = "HEX", default_value = "0x00")]
    vanity: String,
}

impl Default for EncodeCommand {
    fn default() -> Self {
        Self { vanity: "0x00".to_string() }
    }
}

impl EncodeCommand {
    fn execute(self) -> eyre::Result<()> {
        if io::stdin().is_terminal() {
            println!("no piped data; pipe a JSON array of validator addresses to encode");
            return Ok(());
        }

        let mut input = Vec::new();
        io::stdin().read_to_end(&mut input)?;
        debug!(bytes = input.len(), "read validator list from stdin");

        println!("{}", self.report(&input)?);
        Ok(())
    }

    /// Renders the extra-data for a JSON validator list.
    fn report(&self, input: &[u8]) -> eyre::Result<String> {
        let validators = parse_validator_list(input)?;
        let extra_data = encode_extra_data(&self.vanity, validators)?;
        Ok(format!("{{{extra_data}}}"))
    }
}

/// `extradata decode`
#[derive(Debug, Args)]
struct DecodeCommand {
    /// Extra-data region of a header as hex.
    #[arg(long, value_name = "HEX")]
    extradata: String,
}

impl DecodeCommand {
    fn execute(self) -> eyre::Result<()> {
        println!("{}", self.report()?);
        Ok(())
    }

    /// Renders the fields of the extra-data blob, one per line.
    fn report(&self) -> eyre::Result<String> {
        let raw = hex::decode(&self.extradata)?;
        let extra = IstanbulExtra::extract(&raw)?;

        let mut lines = vec![format!("vanity: {}", hex::encode_prefixed(&raw[..EXTRA_VANITY]))];
        lines.extend(extra.validators.iter().map(|validator| format!("validator: {validator}")));
        lines.push(format!("seal: {}", hex::encode_prefixed(&extra.seal)));
        lines.extend(
            extra
                .committed_seals
                .iter()
                .map(|seal| format!("committed seal: {}", hex::encode_prefixed(seal))),
        );
        Ok(lines.join("\n"))
    }
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Some(Commands::Encode(cmd)) => cmd.execute(),
        Some(Commands::Decode(cmd)) => cmd.execute(),
        None => EncodeCommand::default().execute(),
    }
}
