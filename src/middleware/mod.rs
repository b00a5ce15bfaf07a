//! Extractors for cross-cutting request concerns.
//!
//! - [`auth`]: Resolves the bearer token into the calling [`campus_auth::Caller`]
//! - [`extract`]: `Path` and `Query` whose rejections are [`campus_core::AppError`]s
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. The configured [`campus_auth::IdentityResolver`] turns the token into an email
//! 3. The email is looked up in the user repository to get role and record id
//! 4. Handlers evaluate the access policy before touching any record
//!
//! Every failure along the way is reported as 403 FORBIDDEN.

pub mod auth;
pub mod extract;
