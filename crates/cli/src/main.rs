//! Handora CLI - data directory management tools.
//!
//! # Usage
//!
//! ```bash
//! # Write the seed collections into the data directory
//! handora-cli seed
//!
//! # Overwrite existing collections with the seed
//! handora-cli seed --force
//!
//! # Remove all collections from the data directory
//! handora-cli wipe
//! ```
//!
//! # Commands
//!
//! - `seed` - Write the starter catalog and journal
//! - `wipe` - Remove all persisted collections

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "handora-cli")]
#[command(author, version, about = "Handora CLI tools")]
struct Cli {
    /// Data directory holding the JSON collections.
    #[arg(long, default_value = "data", global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the seed collections
    Seed {
        /// Overwrite collections that already exist
        #[arg(long)]
        force: bool,
    },
    /// Remove all persisted collections
    Wipe,
}

fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "handora_cli=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Seed { force } => commands::seed::run(&cli.data_dir, force),
        Commands::Wipe => commands::seed::wipe(&cli.data_dir),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
