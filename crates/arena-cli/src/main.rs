//! Arena client
//!
//! Connects `MyStrategy` to a running game server.
//!
//! # Usage
//!
//! ```bash
//! # Defaults: 127.0.0.1 31001 0000000000000000
//! arena-client
//!
//! # Explicit server and token
//! arena-client 10.0.0.5 31002 my-token
//!
//! # Settings from a JSON file, positionals still override
//! arena-client --config arena.json
//! ```
//!
//! Logs go to stderr; set `RUST_LOG` to change verbosity.

use anyhow::{Context, Result};
use arena_cli::{DemoGame, MyStrategy};
use arena_client::{ClientConfig, Runner};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Arena client - runs your strategy against a game server
#[derive(Parser)]
#[command(name = "arena-client")]
#[command(version)]
struct Cli {
    /// Server host [default: 127.0.0.1]
    host: Option<String>,

    /// Server port [default: 31001]
    port: Option<u16>,

    /// Token identifying this player [default: 0000000000000000]
    token: Option<String>,

    /// Load settings from a JSON file
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::load(path)?,
            None => ClientConfig::default(),
        };
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(token) = self.token {
            config.token = token;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::parse().into_config()?;

    let runner = Runner::<DemoGame, _, _>::connect(&config)
        .with_context(|| format!("Failed to connect to {}", config.address()))?;
    let summary = runner.run(&mut MyStrategy::new())?;

    info!(
        "Session complete: {} actions, {} debug updates",
        summary.actions, summary.debug_updates
    );
    Ok(())
}
