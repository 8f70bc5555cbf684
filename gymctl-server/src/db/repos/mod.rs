//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Every operation acquires its own connection and releases it on all paths
//! - Single-statement writes, no explicit transactions
//! - Lists return rows in store order (no ORDER BY)

pub mod members;
pub mod workouts;

pub use members::{Member, MemberDeletion, MemberRepo};
pub use workouts::{Workout, WorkoutRepo};

use super::connection::ConnectionError;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
