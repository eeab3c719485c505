//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display the effective configuration
    Show(ConfigShowArgs),
    /// Print the configuration file path
    Path,
    /// Write a configuration file with default values
    Init(ConfigInitArgs),
}

/// Display the effective configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Write a configuration file with default values
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

impl ConfigArgs {
    /// Returns true if the subcommand reports the loaded configuration.
    ///
    /// `path` and `init` must work while the file is missing or broken.
    pub fn requires_valid_config(&self) -> bool {
        matches!(self.command, ConfigCommand::Show(_))
    }

    /// Execute config subcommand.
    ///
    /// `path` is the configuration file in effect (from `--config` or the
    /// platform default).
    pub fn execute(&self, config: &Config, path: &Path) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(config),
            ConfigCommand::Path => {
                println!("{}", path.display());
                Ok(())
            }
            ConfigCommand::Init(args) => args.execute(path),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        if self.json {
            print_json(config)
        } else {
            let toml = toml::to_string_pretty(config)
                .map_err(|e| CliError::io(format!("Failed to serialize configuration: {e}")))?;
            print!("{toml}");
            Ok(())
        }
    }
}

impl ConfigInitArgs {
    /// Execute init command
    pub fn execute(&self, path: &Path) -> CliResult<()> {
        if path.exists() && !self.force {
            return Err(CliError::validation(format!(
                "Configuration file already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                CliError::io(format!(
                    "Failed to create config directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        Config::default()
            .save_to(path)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("Wrote default configuration to {}", path.display());
        Ok(())
    }
}

/// Resolves the configuration file: the explicit path, else the platform default.
pub fn resolve_config_path(explicit: Option<&PathBuf>) -> CliResult<PathBuf> {
    match explicit {
        Some(path) => Ok(path.clone()),
        None => Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to locate configuration: {e}"))),
    }
}
