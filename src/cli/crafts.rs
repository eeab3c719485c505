//! Craft registry listing command.

use crate::cli::common::{print_json, CliResult};
use crate::config::Config;
use clap::Args;
use serde::Serialize;

/// List every state in the craft registry
#[derive(Debug, Clone, Args)]
pub struct CraftsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CraftEntry<'a> {
    state: &'a str,
    crafts: &'a str,
}

impl CraftsArgs {
    /// Execute the crafts command.
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let registry = config.registry();
        let entries: Vec<_> = registry
            .entries()
            .map(|(state, crafts)| CraftEntry { state, crafts })
            .collect();

        if self.json {
            print_json(&entries)?;
        } else {
            let width = entries.iter().map(|e| e.state.len()).max().unwrap_or(0);
            for entry in &entries {
                println!("{:width$}  {}", entry.state, entry.crafts, width = width);
            }
            println!();
            println!("{} states", entries.len());
        }

        Ok(())
    }
}
