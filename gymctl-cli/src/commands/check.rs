//! Store connectivity check
//!
//! Opens one connection the same way request handlers do, reports the row
//! count of each table, and releases it.

use anyhow::{Context, Result};
use clap::Parser;

use super::StoreArgs;
use crate::config::GymConfig;
use gymctl_server::ConnectionProvider;

const TABLES: [&str; 2] = ["Members", "Workouts"];

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub store: StoreArgs,
}

pub async fn run_check(args: CheckArgs, config: GymConfig) -> Result<()> {
    let store = args.store.apply(config.store);
    let connections =
        ConnectionProvider::new(&store).context("Invalid store configuration")?;

    println!("Checking store at {}", connections.target());

    let mut conn = connections
        .acquire()
        .await
        .context("Failed to connect to store")?;
    println!("   ✓ connected");

    let mut missing = Vec::new();
    for table in TABLES {
        let sql = format!("SELECT COUNT(*) FROM {table}");
        let count: Result<i64, sqlx::Error> =
            sqlx::query_scalar(&sql).fetch_one(&mut *conn).await;
        match count {
            Ok(count) => println!("   ✓ {table}: {count} rows"),
            Err(e) => {
                println!("   ✗ {table}: {e}");
                missing.push(table);
            }
        }
    }
    conn.release().await;

    if !missing.is_empty() {
        anyhow::bail!("Store is reachable but not usable: {}", missing.join(", "));
    }

    println!("\n✅ Store ready");
    Ok(())
}
