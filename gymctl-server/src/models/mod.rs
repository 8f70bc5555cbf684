//! Domain models with validation at construction
//!
//! Request bodies arrive as untyped JSON and are checked against a
//! [`Schema`]. Invalid input returns [`ValidationErrors`], not panic.

pub mod validation;
pub mod schema;
pub mod member;
pub mod workout;

pub use validation::{FieldError, ValidationErrors};
pub use schema::{validate, FieldKind, FieldSpec, FieldValue, Record, Schema};
pub use member::{NewMember, MEMBER_SCHEMA};
pub use workout::{NewWorkout, WORKOUT_SCHEMA};
