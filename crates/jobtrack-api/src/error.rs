//! API error types.

use std::collections::HashMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use jobtrack_db::DbError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("One or more validation errors occurred.")]
    Validation(HashMap<String, Vec<String>>),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Db(DbError),
}

impl ApiError {
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Build a 400 response body from validator output, keyed by
    /// lowerCamelCase field names.
    pub fn from_validation(errors: ValidationErrors) -> Self {
        let map = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("invalid value ({})", e.code))
                    })
                    .collect();
                (snake_to_camel(&field), messages)
            })
            .collect();
        Self::Validation(map)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) | ApiError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        // A unique-constraint hit means a concurrent request won a race
        // the service pre-check could not see; it is a conflict, not a
        // server fault.
        match err {
            DbError::UniqueViolation(msg) => ApiError::Conflict(msg),
            other => ApiError::Db(other),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    status_code: u16,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<HashMap<String, Vec<String>>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Don't expose internal error details in production
        let message = match &self {
            ApiError::Internal(_) | ApiError::Db(_) => {
                if std::env::var("ENVIRONMENT").unwrap_or_default() == "production" {
                    "An internal server error has occurred.".to_string()
                } else {
                    self.to_string()
                }
            }
            _ => self.to_string(),
        };

        let details = match self {
            ApiError::Validation(map) => Some(map),
            _ => None,
        };

        let body = ErrorResponse {
            status_code: status.as_u16(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Convert a snake_case field name to lowerCamelCase for response maps.
fn snake_to_camel(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn snake_case_fields_become_camel_case() {
        assert_eq!(snake_to_camel("resume_url"), "resumeUrl");
        assert_eq!(snake_to_camel("full_name"), "fullName");
        assert_eq!(snake_to_camel("email"), "email");
    }

    #[test]
    fn validation_errors_are_grouped_by_field() {
        let dto = jobtrack_models::CreateCandidate {
            full_name: String::new(),
            email: "nope".to_string(),
        };
        let err = ApiError::from_validation(dto.validate().unwrap_err());
        match err {
            ApiError::Validation(map) => {
                assert!(map.contains_key("fullName"));
                assert!(map.contains_key("email"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn unique_violation_maps_to_conflict() {
        let err: ApiError = DbError::UniqueViolation("dup".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }
}
