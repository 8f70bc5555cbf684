//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes:
//! `{"error": <code>, "message": <text>}`, plus `"fields"` for validation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::{ConnectionError, DbError};
use crate::models::ValidationErrors;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Payload or path failed validation (400)
    Validation(ValidationErrors),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: i64 },

    /// Delete refused because other rows reference the target (400)
    Blocked {
        resource: &'static str,
        id: i64,
        dependents: &'static str,
    },

    /// Store unreachable (500, generic message)
    Connection(ConnectionError),

    /// SQL execution failed (500, detail included)
    Store(sqlx::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Blocked { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Connection(_) | Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Validation(errors) => json!({
                "error": "validation_error",
                "message": errors.to_string(),
                "fields": errors,
            }),
            Self::NotFound { resource, id } => json!({
                "error": "not_found",
                "message": format!("{} {} not found", resource, id)
            }),
            Self::Blocked {
                resource,
                id,
                dependents,
            } => json!({
                "error": "blocked",
                "message": format!(
                    "{} {} has associated {}, cannot delete",
                    resource, id, dependents
                )
            }),
            Self::Connection(e) => {
                // Log the actual error, return generic message
                tracing::error!("Store connection error: {}", e);
                json!({
                    "error": "connection_error",
                    "message": "Database connection failed"
                })
            }
            Self::Store(e) => {
                tracing::error!("Store error: {}", e);
                json!({
                    "error": "store_error",
                    "message": e.to_string()
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(e: ValidationErrors) -> Self {
        Self::Validation(e)
    }
}

impl From<ConnectionError> for ApiError {
    fn from(e: ConnectionError) -> Self {
        Self::Connection(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::Connection(e) => Self::Connection(e),
            DbError::Sqlx(e) => Self::Store(e),
        }
    }
}
