//! `packgen`: generate monster packs from the command line.
//!
//! Run with: `cargo run -p pack-cli -- spawn blood_moor hell 42`

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Spawn, Validate, Zones};

/// Deterministic monster pack generator
#[derive(Parser)]
#[command(name = "packgen")]
#[command(about = "Generate monster packs from zone, difficulty and seed", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Spawn one pack
    Spawn(Spawn),

    /// List zones and their level ranges
    Zones(Zones),

    /// Load and validate the content documents
    Validate(Validate),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (PACK_DATA_DIR, PACK_DEBUG, RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Spawn(cmd) => cmd.execute().await,
        Command::Zones(cmd) => cmd.execute().await,
        Command::Validate(cmd) => cmd.execute().await,
    }
}
