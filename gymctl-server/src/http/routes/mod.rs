//! Route handlers organized by resource

pub mod health;
pub mod members;
pub mod workouts;

use serde::Serialize;

/// Plain confirmation body for updates and deletes
#[derive(Debug, Serialize)]
pub struct Confirmation {
    pub message: &'static str,
}

impl Confirmation {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
