pub mod check;
pub mod serve;

use clap::Args;
use gymctl_server::StoreConfig;

/// Store connection overrides shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct StoreArgs {
    /// Database URL (overrides the [store] section of the config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Postgres schema to use for the Members and Workouts tables
    #[arg(long, env = "GYMCTL_DB_SCHEMA")]
    pub db_schema: Option<String>,
}

impl StoreArgs {
    /// Apply overrides on top of the file config.
    pub fn apply(self, mut store: StoreConfig) -> StoreConfig {
        if let Some(url) = self.database_url {
            store.url = Some(url);
        }
        if let Some(schema) = self.db_schema {
            store.schema = Some(schema);
        }
        store
    }
}
