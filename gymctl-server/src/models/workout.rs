//! Workout payload schema

use chrono::NaiveDate;
use serde_json::Value;

use super::schema::{FieldSpec, Record, Schema};
use super::validation::{FieldError, ValidationErrors};

const WORKOUT_FIELDS: &[FieldSpec] = &[FieldSpec::integer("member_id"), FieldSpec::date("date")];

/// `{member_id, date}`, both required
pub const WORKOUT_SCHEMA: Schema = Schema::new("workout", WORKOUT_FIELDS);

/// Validated workout fields, used for both create and update.
///
/// `member_id` is not checked against the members table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewWorkout {
    pub member_id: i64,
    pub date: NaiveDate,
}

impl NewWorkout {
    /// Validate a raw request body.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        WORKOUT_SCHEMA.validate(payload)?.try_into()
    }
}

impl TryFrom<Record> for NewWorkout {
    type Error = ValidationErrors;

    fn try_from(record: Record) -> Result<Self, Self::Error> {
        let member_id = record
            .integer("member_id")
            .ok_or_else(|| ValidationErrors::single("member_id", FieldError::Missing))?;
        let date = record
            .date("date")
            .ok_or_else(|| ValidationErrors::single("date", FieldError::Missing))?;

        Ok(Self { member_id, date })
    }
}
