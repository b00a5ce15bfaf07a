//! # Campus Core
//!
//! Core types, errors, and utilities for the Campus API.
//!
//! - [`errors`]: The closed set of failures a request can end with
//! - [`classifier`]: Translation of those failures into HTTP status codes and
//!   externally shaped error bodies
//! - [`pagination`]: Page-based pagination parameters for listing endpoints
//!
//! # Example
//!
//! ```ignore
//! use campus_core::{AppError, classify};
//!
//! let error = AppError::not_found("Student#42 not found");
//! let classification = classify(&error);
//! assert_eq!(classification.status.as_u16(), 404);
//! ```

pub mod classifier;
pub mod errors;
pub mod pagination;

// Re-export commonly used types at crate root
pub use classifier::{Classification, ErrorResource, ErrorType, Severity, classify};
pub use errors::AppError;
pub use pagination::{Page, PageParams, PaginationMeta};
