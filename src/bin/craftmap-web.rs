//! Craft Map Web Server Binary
//!
//! Starts the web host that serves the interactive map page and its API.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (127.0.0.1:3001, ./india_states.geojson)
//! craftmap-web
//!
//! # Specify port and document
//! craftmap-web --port 8080 --geojson data/india_states.geojson
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use craftmap::cli::ServeArgs;
use craftmap::config::Config;
use craftmap::logging;

/// Craft Map Web Server - interactive map of Indian artisan crafts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    serve: ServeArgs,

    /// Configuration file (defaults to the platform config directory)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init(args.verbose);

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    args.serve.execute(&config).await?;
    Ok(())
}
