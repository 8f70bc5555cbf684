//! HTTP server command
//!
//! Runs the gymctl HTTP server with the member and workout routes.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use super::StoreArgs;
use crate::config::GymConfig;
use gymctl_server::{run_server, ConnectionProvider};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5000)
    #[arg(long, short = 'b', env = "GYMCTL_BIND")]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: GymConfig) -> Result<()> {
    let mut server = config.server_config();
    if let Some(bind) = args.bind {
        server.bind_addr = bind;
    }
    server.cors_permissive |= args.cors_permissive;

    let store = args.store.apply(config.store);
    let connections =
        ConnectionProvider::new(&store).context("Invalid store configuration")?;

    tracing::info!("Starting gymctl server on {}", server.bind_addr);

    // Run server (blocks until shutdown)
    run_server(connections, server)
        .await
        .context("Server error")?;

    Ok(())
}
