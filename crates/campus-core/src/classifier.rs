//! Translation of [`AppError`] into HTTP responses.
//!
//! The mapping is a single exhaustive `match`, so adding a failure variant
//! without deciding its status is a compile error.
//!
//! | Failure | Status | `type` | Log level |
//! |---|---|---|---|
//! | `BadRequest`, `MissingParameter`, `ConversionFailed` | 400 | `BAD_REQUEST` | info |
//! | `TooManyRequests` | 429 | `TOO_MANY_REQUESTS` | info |
//! | `LockUnavailable` | 429 | `TOO_MANY_REQUESTS` | warn |
//! | `InvalidCredentials`, `Forbidden` | 403 | `FORBIDDEN` | info |
//! | `NotFound` | 404 | `NOT_FOUND` | info |
//! | `NotImplemented` | 501 | `NOT_IMPLEMENTED` | error |
//! | `Internal` | 500 | `INTERNAL` | error |
//!
//! Lock contention is reported exactly like rate limiting so clients can retry
//! both with the same backoff. Authentication failures are reported as 403,
//! never 401.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::errors::AppError;

const LOCK_UNAVAILABLE_MESSAGE: &str = "Resource is busy, retry later";
const INTERNAL_MESSAGE: &str = "Internal server error";

/// Externally visible error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorType {
    BadRequest,
    TooManyRequests,
    Forbidden,
    NotFound,
    NotImplemented,
    Internal,
}

/// Body of every error response.
///
/// ```json
/// { "type": "FORBIDDEN", "message": "Access is denied" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResource {
    #[serde(rename = "type")]
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorResource {
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

/// Outcome of classifying one failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub status: StatusCode,
    pub body: ErrorResource,
    pub severity: Severity,
    /// Short label for the log record.
    pub summary: &'static str,
}

impl Classification {
    fn new(
        status: StatusCode,
        error_type: ErrorType,
        message: impl Into<String>,
        severity: Severity,
        summary: &'static str,
    ) -> Self {
        Self {
            status,
            body: ErrorResource::new(error_type, message),
            severity,
            summary,
        }
    }

    /// Emits the single log record for `error` at this classification's
    /// severity.
    pub fn log(&self, error: &AppError) {
        let status = self.status.as_u16();
        match self.severity {
            Severity::Info => info!(status, error = ?error, "{}", self.summary),
            Severity::Warn => warn!(status, error = ?error, "{}", self.summary),
            Severity::Error => error!(status, error = ?error, "{}", self.summary),
        }
    }
}

/// Maps a failure to its status, body and log severity.
///
/// Never fails: a conversion failure without a cause gets a generic message,
/// and `Internal` bodies never carry the underlying error chain.
pub fn classify(error: &AppError) -> Classification {
    match error {
        AppError::BadRequest(message) => bad_request(message.clone(), "Bad request"),
        AppError::MissingParameter { name } => bad_request(
            format!("Required request parameter '{name}' is not present"),
            "Missing parameter",
        ),
        AppError::ConversionFailed { parameter, cause } => {
            let message = match cause {
                Some(cause) => cause.root_cause().to_string(),
                None => format!("Invalid value for parameter '{parameter}'"),
            };
            bad_request(message, "Conversion failed")
        }
        AppError::TooManyRequests(message) => Classification::new(
            StatusCode::TOO_MANY_REQUESTS,
            ErrorType::TooManyRequests,
            message.clone(),
            Severity::Info,
            "Too many requests",
        ),
        AppError::LockUnavailable(_) => Classification::new(
            StatusCode::TOO_MANY_REQUESTS,
            ErrorType::TooManyRequests,
            LOCK_UNAVAILABLE_MESSAGE,
            Severity::Warn,
            "Database lock could not be acquired: too many requests assumed",
        ),
        AppError::InvalidCredentials(message) | AppError::Forbidden(message) => {
            Classification::new(
                StatusCode::FORBIDDEN,
                ErrorType::Forbidden,
                message.clone(),
                Severity::Info,
                "Forbidden",
            )
        }
        AppError::NotFound(message) => Classification::new(
            StatusCode::NOT_FOUND,
            ErrorType::NotFound,
            message.clone(),
            Severity::Info,
            "Not found",
        ),
        AppError::NotImplemented(message) => Classification::new(
            StatusCode::NOT_IMPLEMENTED,
            ErrorType::NotImplemented,
            message.clone(),
            Severity::Error,
            "Not implemented",
        ),
        AppError::Internal(_) => Classification::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorType::Internal,
            INTERNAL_MESSAGE,
            Severity::Error,
            "Internal error",
        ),
    }
}

fn bad_request(message: String, summary: &'static str) -> Classification {
    Classification::new(
        StatusCode::BAD_REQUEST,
        ErrorType::BadRequest,
        message,
        Severity::Info,
        summary,
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let classification = classify(&self);
        classification.log(&self);

        (classification.status, Json(classification.body)).into_response()
    }
}
