//! Application failures.
//!
//! Every failure a handler, extractor or repository can produce is one of the
//! [`AppError`] variants. Turning a failure into a response is the job of
//! [`crate::classifier`]; this module only names the failures and offers
//! constructors for them.

use std::fmt;

use anyhow::Error;
use axum::extract::path::ErrorKind;
use axum::extract::rejection::{PathRejection, QueryRejection};
use validator::ValidationErrors;

#[derive(Debug)]
pub enum AppError {
    /// Malformed input.
    BadRequest(String),
    /// A required query parameter was absent.
    MissingParameter { name: String },
    /// A request argument could not be converted to its target type.
    ///
    /// The externally visible message comes from the innermost cause.
    ConversionFailed {
        parameter: String,
        cause: Option<Error>,
    },
    /// Explicit rate limiting.
    TooManyRequests(String),
    /// A database lock (pessimistic, optimistic or deadlock-broken) could not
    /// be acquired.
    LockUnavailable(Error),
    /// The bearer credentials could not be resolved to a known caller.
    InvalidCredentials(String),
    /// The caller is known but not permitted.
    Forbidden(String),
    NotFound(String),
    NotImplemented(String),
    /// Anything else.
    Internal(Error),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    pub fn conversion_failed<E>(parameter: impl Into<String>, cause: E) -> Self
    where
        E: Into<Error>,
    {
        Self::ConversionFailed {
            parameter: parameter.into(),
            cause: Some(cause.into()),
        }
    }

    pub fn too_many_requests(message: impl Into<String>) -> Self {
        Self::TooManyRequests(message.into())
    }

    pub fn lock_unavailable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::LockUnavailable(err.into())
    }

    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::InvalidCredentials(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::NotImplemented(message.into())
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::Internal(err.into())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(message) => write!(f, "bad request: {message}"),
            Self::MissingParameter { name } => {
                write!(f, "required request parameter `{name}` is not present")
            }
            Self::ConversionFailed { parameter, cause } => match cause {
                Some(cause) => write!(f, "failed to convert `{parameter}`: {cause:#}"),
                None => write!(f, "failed to convert `{parameter}`"),
            },
            Self::TooManyRequests(message) => write!(f, "too many requests: {message}"),
            Self::LockUnavailable(err) => write!(f, "lock unavailable: {err:#}"),
            Self::InvalidCredentials(message) => write!(f, "invalid credentials: {message}"),
            Self::Forbidden(message) => write!(f, "forbidden: {message}"),
            Self::NotFound(message) => write!(f, "not found: {message}"),
            Self::NotImplemented(message) => write!(f, "not implemented: {message}"),
            Self::Internal(err) => write!(f, "internal error: {err:#}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConversionFailed {
                cause: Some(cause), ..
            } => Some(&**cause),
            Self::LockUnavailable(err) | Self::Internal(err) => Some(&**err),
            _ => None,
        }
    }
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::BadRequest(format!("Validation failed: {errors}"))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        let inner = match rejection {
            PathRejection::FailedToDeserializePathParams(inner) => inner,
            other => return Self::internal(anyhow::anyhow!(other.body_text())),
        };

        let (parameter, cause) = match inner.kind() {
            ErrorKind::ParseErrorAtKey {
                key,
                value,
                expected_type,
            } => (
                key.clone(),
                Some(anyhow::anyhow!(
                    "cannot parse `{value}` to a `{expected_type}`"
                )),
            ),
            ErrorKind::ParseError {
                value,
                expected_type,
            } => (
                "path".to_string(),
                Some(anyhow::anyhow!(
                    "cannot parse `{value}` to a `{expected_type}`"
                )),
            ),
            ErrorKind::Message(message) => {
                ("path".to_string(), Some(anyhow::anyhow!(message.clone())))
            }
            _ => ("path".to_string(), None),
        };

        // Keep the rejection as outer context; the classifier reads the root.
        let cause = cause.map(|cause| cause.context(inner.body_text()));
        Self::ConversionFailed { parameter, cause }
    }
}

const QUERY_REJECTION_PREFIX: &str = "Failed to deserialize query string: ";

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        let inner = match rejection {
            QueryRejection::FailedToDeserializeQueryString(inner) => inner,
            other => return Self::BadRequest(other.body_text()),
        };

        // Reads as `Failed to deserialize query string: <key>: <reason>`.
        let text = inner.body_text();
        let detail = text.strip_prefix(QUERY_REJECTION_PREFIX).unwrap_or(&text);
        let (parameter, reason) = match detail.split_once(": ") {
            Some((key, reason)) if is_query_key(key) => (key.to_string(), reason),
            _ => ("query".to_string(), detail),
        };

        let cause = anyhow::anyhow!(reason.to_string()).context(text.clone());
        Self::ConversionFailed {
            parameter,
            cause: Some(cause),
        }
    }
}

fn is_query_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '[' | ']'))
}
