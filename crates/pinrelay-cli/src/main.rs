//! Pinrelay CLI: pin a local file directly, or talk to a running relay.
//!
//! `pin` reads PINATA_JWT (and the other relay settings) from the environment or `.env`.

use anyhow::Context;
use clap::{Parser, Subcommand};
use pinrelay_cli::{format_upload_result, init_tracing, resolve_file, RelayClient};
use pinrelay_core::Config;
use pinrelay_pinning::{PinSource, PinataClient, PinningError, PinningService};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pinrelay", about = "Pin files to IPFS through Pinata")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pin a local file straight to Pinata
    Pin {
        /// Path to the file to pin
        file: PathBuf,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Upload a file through a running relay server
    Upload {
        /// Path to the file to upload
        file: PathBuf,
        /// Relay base URL
        #[arg(long, env = "PINRELAY_SERVER", default_value = "http://localhost:3001")]
        server: String,
    },
    /// Check that a relay server is running
    Health {
        /// Relay base URL
        #[arg(long, env = "PINRELAY_SERVER", default_value = "http://localhost:3001")]
        server: String,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

async fn pin(file: PathBuf, json: bool) -> anyhow::Result<()> {
    let path = resolve_file(&file)?;
    let config = Config::from_env().context("Invalid configuration")?;
    let client = PinataClient::from_config(&config)?;

    let source = PinSource::from_path(&path);
    let pinned = client.pin_file(&source).await.map_err(|e| match &e {
        PinningError::Upstream { status, .. } => anyhow::anyhow!(
            "Upload failed ({}): {}",
            status,
            e.detail().unwrap_or("no details")
        ),
        _ => anyhow::anyhow!("Upload failed: {}", e),
    })?;

    let result = pinned.into_upload_result(config.gateway_base_url());
    if json {
        print_json(&result)?;
    } else {
        println!("{}", format_upload_result(&source.file_name, &result));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pin { file, json } => pin(file, json).await?,
        Commands::Upload { file, server } => {
            let path = resolve_file(&file)?;
            let client = RelayClient::new(server)?;
            let response = client.upload(&path).await?;
            print_json(&response)?;
        }
        Commands::Health { server } => {
            let client = RelayClient::new(server)?;
            let health = client.health().await?;
            print_json(&health)?;
        }
    }

    Ok(())
}
