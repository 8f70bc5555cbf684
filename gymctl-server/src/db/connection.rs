//! Per-request store connections
//!
//! No pool: every repository operation opens its own connection and releases
//! it when done. [`ScopedConnection`] closes the socket on drop, so early
//! returns, errors and cancelled requests never leak a connection.

use std::ops::{Deref, DerefMut};
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;

use crate::config::StoreConfig;

/// Failure to obtain a store connection
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("invalid store configuration: {0}")]
    Config(#[source] sqlx::Error),

    #[error("could not connect to {target}: {source}")]
    Connect {
        target: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("timed out after {seconds}s connecting to {target}")]
    Timeout { target: String, seconds: u64 },
}

/// Opens connections from a fixed [`StoreConfig`].
#[derive(Debug, Clone)]
pub struct ConnectionProvider {
    options: PgConnectOptions,
    timeout: Duration,
    target: String,
}

impl ConnectionProvider {
    /// Build a provider; fails only if the configured URL does not parse.
    pub fn new(config: &StoreConfig) -> Result<Self, ConnectionError> {
        let mut options = match &config.url {
            Some(url) => url
                .parse::<PgConnectOptions>()
                .map_err(ConnectionError::Config)?,
            None => {
                let options = PgConnectOptions::new()
                    .host(&config.host)
                    .port(config.port)
                    .username(&config.user)
                    .database(&config.database);
                match &config.password {
                    Some(password) => options.password(password),
                    None => options,
                }
            }
        };

        if let Some(schema) = &config.schema {
            options = options.options([("search_path", schema.as_str())]);
        }

        Ok(Self {
            options,
            timeout: config.connect_timeout(),
            target: config.describe(),
        })
    }

    /// Connection target, safe to log.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Open a new connection, bounded by the configured timeout.
    pub async fn acquire(&self) -> Result<ScopedConnection, ConnectionError> {
        let connect = PgConnection::connect_with(&self.options);

        match tokio::time::timeout(self.timeout, connect).await {
            Ok(Ok(conn)) => {
                tracing::debug!(target_db = %self.target, "store connection opened");
                Ok(ScopedConnection { conn: Some(conn) })
            }
            Ok(Err(source)) => {
                tracing::error!(target_db = %self.target, error = %source, "store connection failed");
                Err(ConnectionError::Connect {
                    target: self.target.clone(),
                    source,
                })
            }
            Err(_) => {
                tracing::error!(target_db = %self.target, "store connection timed out");
                Err(ConnectionError::Timeout {
                    target: self.target.clone(),
                    seconds: self.timeout.as_secs(),
                })
            }
        }
    }
}

/// An open connection owned by one operation.
///
/// Call [`release`](Self::release) for a graceful close. Dropping it without
/// releasing still closes the socket.
pub struct ScopedConnection {
    conn: Option<PgConnection>,
}

impl ScopedConnection {
    /// Close the connection, sending a terminate message to the server.
    pub async fn release(mut self) {
        if let Some(conn) = self.conn.take() {
            match conn.close().await {
                Ok(()) => tracing::debug!("store connection released"),
                Err(e) => tracing::warn!(error = %e, "store connection did not close cleanly"),
            }
        }
    }
}

impl Deref for ScopedConnection {
    type Target = PgConnection;

    fn deref(&self) -> &PgConnection {
        // Only `release` takes the connection, and it consumes `self`.
        self.conn.as_ref().expect("connection present until released")
    }
}

impl DerefMut for ScopedConnection {
    fn deref_mut(&mut self) -> &mut PgConnection {
        self.conn.as_mut().expect("connection present until released")
    }
}

impl Drop for ScopedConnection {
    fn drop(&mut self) {
        if self.conn.take().is_some() {
            tracing::debug!("store connection dropped without release, socket closed");
        }
    }
}
