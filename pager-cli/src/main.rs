//! # pager-cli
//!
//! Headless simulator for menu/content pager synchronization.
//!
//! ## Commands
//!
//! - `init`: Write a starter page set (`pager.toml`)
//! - `layout`: Show menu item frames and page offsets
//! - `simulate`: Replay taps, scrolls and swipes and print what was relayed
//!
//! ## Example
//!
//! ```bash
//! # Create the page set
//! pager-cli init
//!
//! # Tap the second menu item, then swipe back to the first page
//! pager-cli simulate tap:1 swipe:0
//!
//! # Overscroll past the last page with a 300-wide viewport
//! pager-cli simulate scroll:480:300 --json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod pages;
mod simulator;
mod transcript;

use commands::{init, layout, simulate};

/// Headless simulator for menu/content pager synchronization.
#[derive(Parser, Debug)]
#[command(name = "pager-cli")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding pager.toml
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log relayed changes and dropped events (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a starter page set
    Init {
        /// Overwrite an existing page set
        #[arg(long)]
        force: bool,
    },

    /// Show menu item frames and page offsets
    Layout,

    /// Replay input events and print the relay transcript
    Simulate {
        /// Inputs: tap:N, scroll:OFFSET[:WIDTH], drag, swipe:N, reload
        inputs: Vec<String>,

        /// Read further inputs from a file, one per line
        #[arg(long, short)]
        script: Option<PathBuf>,

        /// Print the transcript as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };

    tokio::fs::create_dir_all(&data_dir)
        .await
        .context("Failed to create data directory")?;

    match cli.command {
        Commands::Init { force } => {
            init::run(&data_dir, force).await?;
        }
        Commands::Layout => {
            layout::run(&data_dir).await?;
        }
        Commands::Simulate {
            inputs,
            script,
            json,
        } => {
            if inputs.is_empty() && script.is_none() {
                anyhow::bail!("Must give at least one input or --script");
            }
            simulate::run(&data_dir, &inputs, script.as_deref(), json).await?;
        }
    }

    Ok(())
}

/// Install the log subscriber. Logs go to stderr so transcripts stay clean.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Get the default data directory for pager-cli.
fn default_data_dir() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("io", "pager", "pager-cli")
        .context("Could not determine home directory")?;
    Ok(dirs.data_dir().to_path_buf())
}
