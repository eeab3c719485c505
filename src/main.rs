//! Craft Map - interactive map of Indian states and their artisan crafts
//!
//! The `serve` subcommand hosts the map page; the other subcommands give
//! headless access to the craft registry and the GeoJSON loader.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use craftmap::cli::{self, CliError, CliResult, ConfigArgs, CraftsArgs, InspectArgs, LookupArgs};
use craftmap::config::Config;
use craftmap::constants::APP_BINARY_NAME;
use craftmap::logging;

/// Craft Map - interactive map of Indian artisan crafts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up the crafts of one state
    Lookup(LookupArgs),
    /// List the craft registry
    Crafts(CraftsArgs),
    /// Load a GeoJSON document and report registry coverage
    Inspect(InspectArgs),
    /// Show or initialize configuration
    Config(ConfigArgs),
    /// Serve the interactive map
    #[cfg(feature = "web")]
    Serve(cli::ServeArgs),
}

async fn run(cli: Cli) -> CliResult<()> {
    let config_path = cli::config::resolve_config_path(cli.config.as_ref())?;

    let loaded = Config::load_from(&config_path);
    let config = match &cli.command {
        Command::Config(args) if !args.requires_valid_config() => loaded.unwrap_or_default(),
        _ => loaded.map_err(|e| {
            CliError::validation(format!(
                "Failed to load configuration from {}: {e:#}",
                config_path.display()
            ))
        })?,
    };

    match &cli.command {
        Command::Lookup(args) => args.execute(&config),
        Command::Crafts(args) => args.execute(&config),
        Command::Inspect(args) => args.execute(&config).await,
        Command::Config(args) => args.execute(&config, &config_path),
        #[cfg(feature = "web")]
        Command::Serve(args) => args.execute(&config).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("{}: {}", APP_BINARY_NAME, err);
        std::process::exit(err.exit_code.code());
    }
}
