//! Error handling module for the members backend.
//!
//! Provides a centralized error type with mapping to HTTP status codes and response bodies.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const UNSUPPORTED_MEDIA_TYPE: &str = "UNSUPPORTED_MEDIA_TYPE";
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
}

/// Body detail returned for every missing resource.
pub const NOT_FOUND_DETAIL: &str = "Not found.";

/// Body detail returned for server-side failures. The cause is only logged.
pub const SERVER_ERROR_DETAIL: &str = "A server error occurred.";

/// Key used for errors that do not belong to a single field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Field-level validation messages, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Move every message from `other` into `self`.
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`, if any.
    #[allow(dead_code)]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<validator::ValidationErrors> for FieldErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            for err in errs.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                fields.add(field.to_string(), message);
            }
        }
        fields
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Input failed field validation
    Validation(FieldErrors),
    /// Bad request (malformed body)
    BadRequest(String),
    /// Request body in a format we do not parse
    UnsupportedMediaType(String),
    /// Database error
    Database(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => codes::NOT_FOUND,
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::BadRequest(_) => codes::BAD_REQUEST,
            AppError::UnsupportedMediaType(_) => codes::UNSUPPORTED_MEDIA_TYPE,
            AppError::Database(_) => codes::DATABASE_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::NotFound(msg) => msg.clone(),
            AppError::Validation(errors) => {
                let fields: Vec<&str> = errors.fields().collect();
                format!("Invalid fields: {}", fields.join(", "))
            }
            AppError::BadRequest(msg) => msg.clone(),
            AppError::UnsupportedMediaType(msg) => msg.clone(),
            AppError::Database(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        AppError::Database(format!("Database error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::debug!("JSON error: {:?}", err);
        AppError::BadRequest(format!("JSON parse error - {}", err))
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Validation(errors)
    }
}

/// Error response body.
///
/// Validation failures render as the bare field map; everything else as `{"detail": ...}`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ErrorResponse {
    Detail { detail: String },
    Fields(FieldErrors),
}

impl ErrorResponse {
    pub fn new(error: &AppError) -> Self {
        match error {
            AppError::Validation(errors) => ErrorResponse::Fields(errors.clone()),
            AppError::NotFound(_) => ErrorResponse::Detail {
                detail: NOT_FOUND_DETAIL.to_string(),
            },
            AppError::BadRequest(msg) | AppError::UnsupportedMediaType(msg) => {
                ErrorResponse::Detail {
                    detail: msg.clone(),
                }
            }
            AppError::Database(_) => ErrorResponse::Detail {
                detail: SERVER_ERROR_DETAIL.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), "{}", self.message());
        } else {
            tracing::debug!(code = self.error_code(), "{}", self.message());
        }

        let body = ErrorResponse::new(&self);
        (status, Json(body)).into_response()
    }
}
