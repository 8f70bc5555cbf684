//! Declarative payload schemas
//!
//! A [`Schema`] is a fixed list of typed field validators. Validating a JSON
//! payload either yields a [`Record`] holding exactly the declared fields,
//! coerced to their declared types, or a [`ValidationErrors`] with one entry
//! per offending field. All fields are checked before returning.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde_json::{Map, Number, Value};

use super::validation::{FieldError, ValidationErrors, SCHEMA_KEY};

/// Wire format for date fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Declared type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Date,
}

/// One declared field: name, type and constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Reject blank strings (only meaningful for `FieldKind::String`)
    pub non_blank: bool,
}

impl FieldSpec {
    const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            non_blank: false,
        }
    }

    /// Required string field.
    pub const fn string(name: &'static str) -> Self {
        Self::new(name, FieldKind::String)
    }

    /// Required integer field.
    pub const fn integer(name: &'static str) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    /// Required ISO date field.
    pub const fn date(name: &'static str) -> Self {
        Self::new(name, FieldKind::Date)
    }

    pub const fn optional(self) -> Self {
        Self {
            required: false,
            ..self
        }
    }

    pub const fn non_blank(self) -> Self {
        Self {
            non_blank: true,
            ..self
        }
    }

    fn coerce(&self, value: &Value) -> Result<FieldValue, FieldError> {
        match self.kind {
            FieldKind::String => {
                let s = value.as_str().ok_or(FieldError::NotAString)?;
                if self.non_blank && s.trim().is_empty() {
                    return Err(FieldError::Blank);
                }
                Ok(FieldValue::String(s.to_owned()))
            }
            FieldKind::Integer => coerce_integer(value)
                .map(FieldValue::Integer)
                .ok_or(FieldError::NotAnInteger),
            FieldKind::Date => value
                .as_str()
                .and_then(parse_date)
                .map(FieldValue::Date)
                .ok_or(FieldError::NotADate),
        }
    }
}

/// `YYYY-MM-DD` with a four-digit year; no sign, no surrounding whitespace.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() < 8 || !bytes[..4].iter().all(u8::is_ascii_digit) || bytes[4] != b'-' {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Integers, integral floats and numeric strings; never booleans.
fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => number_as_i64(n),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn number_as_i64(n: &Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    let f = n.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// A validated, typed field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Date(NaiveDate),
}

/// Output of a successful validation: declared fields only
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    values: BTreeMap<&'static str, FieldValue>,
}

impl Record {
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }

    /// Remove a string field.
    pub fn take_string(&mut self, field: &str) -> Option<String> {
        match self.values.remove(field)? {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn integer(&self, field: &str) -> Option<i64> {
        match self.values.get(field)? {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn date(&self, field: &str) -> Option<NaiveDate> {
        match self.values.get(field)? {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }
}

/// A named, ordered set of field validators
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub name: &'static str,
    fields: &'static [FieldSpec],
}

impl Schema {
    pub const fn new(name: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self { name, fields }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Validate a raw JSON payload against this schema.
    pub fn validate(&self, payload: &Value) -> Result<Record, ValidationErrors> {
        let Some(object) = payload.as_object() else {
            return Err(ValidationErrors::single(SCHEMA_KEY, FieldError::InvalidInput));
        };
        self.validate_object(object)
    }

    fn validate_object(&self, object: &Map<String, Value>) -> Result<Record, ValidationErrors> {
        let mut record = Record::default();
        let mut errors = ValidationErrors::new();

        for spec in self.fields {
            match object.get(spec.name) {
                None if spec.required => errors.push(spec.name, FieldError::Missing),
                Some(Value::Null) if spec.required => errors.push(spec.name, FieldError::Null),
                None | Some(Value::Null) => {}
                Some(value) => match spec.coerce(value) {
                    Ok(v) => {
                        record.values.insert(spec.name, v);
                    }
                    Err(e) => errors.push(spec.name, e),
                },
            }
        }

        if errors.is_empty() {
            Ok(record)
        } else {
            Err(errors)
        }
    }
}

/// Validate `payload` against `schema`.
pub fn validate(payload: &Value, schema: &Schema) -> Result<Record, ValidationErrors> {
    schema.validate(payload)
}
