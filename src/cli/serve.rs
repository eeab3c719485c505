//! Web host command.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::web;
use clap::Args;
use std::net::SocketAddr;

/// Serve the interactive map and its JSON API
#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Port to listen on (defaults to server.port)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Host to bind to (defaults to server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// GeoJSON file path or URL (defaults to map.geojson)
    #[arg(long, value_name = "SOURCE")]
    pub geojson: Option<String>,
}

impl ServeArgs {
    /// Applies command-line overrides to `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(geojson) = &self.geojson {
            config.map.geojson.clone_from(geojson);
        }
    }

    /// Execute the serve command; runs until the server stops.
    pub async fn execute(&self, config: &Config) -> CliResult<()> {
        let mut config = config.clone();
        self.apply(&mut config);

        let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .map_err(|e| CliError::validation(format!("Invalid listen address: {e}")))?;

        web::run_server(config, addr)
            .await
            .map_err(|e| CliError::io(format!("Server error: {e:#}")))
    }
}
