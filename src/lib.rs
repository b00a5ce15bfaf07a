//! # Campus API
//!
//! A REST API built with Rust, Axum, and PostgreSQL serving student and
//! teacher records behind a role-directional access policy.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Administrative commands (token issuing, seeding)
//! ├── middleware/       # Bearer auth and classifier-aware extractors
//! ├── modules/          # Feature modules
//! │   ├── students/    # GET /students, GET /students/{id}
//! │   ├── teachers/    # GET /teachers/{id}
//! │   └── whoami/      # GET /whoami
//! ├── docs.rs           # OpenAPI document
//! ├── logging.rs        # Subscriber setup and request logging
//! ├── router.rs         # Main application router
//! └── state.rs          # Shared application state
//! ```
//!
//! Workspace crates:
//!
//! - [`campus_core`]: `AppError` and the error classifier
//! - [`campus_auth`]: callers, the access policy, identity resolution
//! - [`campus_config`]: environment-driven configuration
//! - [`campus_db`]: user repository and SQLx implementation
//!
//! ## Access policy
//!
//! | Caller | May read |
//! |--------|----------|
//! | Student | their own student record only |
//! | Teacher | their own teacher record, every student record, the student listing |
//!
//! ## Errors
//!
//! Every failure becomes `{ "type": ..., "message": ... }` with one of
//! 400, 403, 404, 429, 500 or 501. Database lock contention is reported as
//! 429, and bad credentials as 403.

pub mod cli;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use campus_auth;
pub use campus_config;
pub use campus_core;
pub use campus_db;
pub use campus_models;
