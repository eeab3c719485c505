//! CLI command handlers for craftmap.
//!
//! This module provides headless, scriptable access to the craft registry and
//! the map bootstrap, plus the command that starts the web host.

pub mod common;
pub mod config;
pub mod crafts;
pub mod inspect;
pub mod lookup;
#[cfg(feature = "web")]
pub mod serve;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use crafts::CraftsArgs;
pub use inspect::InspectArgs;
pub use lookup::LookupArgs;
#[cfg(feature = "web")]
pub use serve::ServeArgs;
