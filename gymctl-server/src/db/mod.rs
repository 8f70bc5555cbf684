//! Database layer - per-request connections and repositories
//!
//! # Design Principles
//!
//! - One connection per operation, released on every exit path
//! - No pool, no cache: the store is the single source of truth
//! - Referential checks live in the repositories, not in the schema

pub mod connection;
pub mod repos;

pub use connection::{ConnectionError, ConnectionProvider, ScopedConnection};
pub use repos::*;
