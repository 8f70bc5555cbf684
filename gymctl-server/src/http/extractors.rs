//! Custom Axum extractors
//!
//! Both reject with [`ApiError::Validation`] so malformed input gets the same
//! 400 body as a schema failure.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde_json::Value;

use super::error::ApiError;
use crate::models::validation::SCHEMA_KEY;
use crate::models::{FieldError, ValidationErrors};

/// Untyped JSON body, checked against a schema by the handler
pub struct JsonPayload(pub Value);

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(reason = %rejection.body_text(), "rejected request body");
                ApiError::Validation(ValidationErrors::single(SCHEMA_KEY, FieldError::InvalidInput))
            })?;

        Ok(Self(value))
    }
}

/// Extract an integer row id from the `{id}` path segment
pub struct ValidId(pub i64);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationErrors::single("id", FieldError::Missing)))?;

        let id = id
            .parse::<i64>()
            .map_err(|_| ApiError::Validation(ValidationErrors::single("id", FieldError::NotAnInteger)))?;

        Ok(Self(id))
    }
}
