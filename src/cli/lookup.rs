//! Craft lookup command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::crafts::MatchMode;
use crate::models::Popup;
use clap::Args;
use serde::Serialize;

/// Look up the traditional crafts of a state
#[derive(Debug, Clone, Args)]
pub struct LookupArgs {
    /// State name exactly as it appears in the GeoJSON `name` property
    #[arg(value_name = "STATE")]
    pub state: String,

    /// Match case-, whitespace- and `&`-insensitively
    #[arg(long)]
    pub normalize: bool,

    /// Print the popup HTML instead of plain text
    #[arg(long, conflicts_with = "json")]
    pub html: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LookupResult<'a> {
    state: &'a str,
    crafts: &'a str,
    found: bool,
}

impl LookupArgs {
    /// Execute the lookup command.
    ///
    /// Prints the fallback text on a miss and exits with a validation error.
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let mut config = config.clone();
        if self.normalize {
            config.registry.match_mode = MatchMode::Normalized;
        }
        let registry = config.registry();

        let found = registry.contains(&self.state);
        let crafts = registry.lookup(&self.state);

        if self.json {
            print_json(&LookupResult {
                state: &self.state,
                crafts,
                found,
            })?;
        } else if self.html {
            println!("{}", Popup::new(self.state.as_str(), crafts).to_html());
        } else {
            println!("State:  {}", self.state);
            println!("Crafts: {}", crafts);
        }

        if !found {
            return Err(CliError::validation(format!(
                "No craft entry for '{}'",
                self.state
            )));
        }

        Ok(())
    }
}
