//! gymctl CLI - gym membership service
//!
//! Entry point for the gymctl command-line tool:
//! - `serve`: run the members/workouts HTTP API
//! - `check`: verify the configured store is reachable and has its tables

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use config::GymConfig;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "gymctl",
    author,
    version,
    about = "HTTP service for gym members and their scheduled workouts"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (default: ~/.gymctl/config.toml if present)
    #[arg(long, short = 'c', global = true, env = "GYMCTL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run HTTP API server (members, workouts)
    Serve(commands::serve::ServeArgs),
    /// Check store connectivity and tables
    Check(commands::check::CheckArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before parsing so env-backed flags see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    let config = GymConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args, config).await,
        Commands::Check(args) => commands::check::run_check(args, config).await,
    }
}
