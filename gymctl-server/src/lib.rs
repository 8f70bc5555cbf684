//! gymctl-server: HTTP service for gym members and their workouts
//!
//! Request pipeline: handler → schema validation → per-request store
//! connection → repository → JSON response.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::StoreConfig;
pub use db::{ConnectionError, ConnectionProvider, DbError};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
