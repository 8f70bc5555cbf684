//! Member payload schema

use serde_json::Value;

use super::schema::{FieldSpec, Record, Schema};
use super::validation::{FieldError, ValidationErrors};

const MEMBER_FIELDS: &[FieldSpec] = &[
    FieldSpec::string("name").non_blank(),
    FieldSpec::string("email"),
    FieldSpec::string("phone"),
];

/// `{name, email, phone}`, all required; name must not be blank
pub const MEMBER_SCHEMA: Schema = Schema::new("member", MEMBER_FIELDS);

/// Validated member fields, used for both create and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl NewMember {
    /// Validate a raw request body.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        MEMBER_SCHEMA.validate(payload)?.try_into()
    }
}

impl TryFrom<Record> for NewMember {
    type Error = ValidationErrors;

    fn try_from(mut record: Record) -> Result<Self, Self::Error> {
        let mut take = |field: &'static str| {
            record
                .take_string(field)
                .ok_or_else(|| ValidationErrors::single(field, FieldError::Missing))
        };

        Ok(Self {
            name: take("name")?,
            email: take("email")?,
            phone: take("phone")?,
        })
    }
}
