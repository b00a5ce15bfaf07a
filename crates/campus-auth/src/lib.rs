//! # Campus Auth
//!
//! Caller identity and authorization for the Campus API.
//!
//! - [`identity`]: Who is calling ([`Caller`], [`Role`]) and what they ask for
//!   ([`Target`])
//! - [`policy`]: The access policy deciding whether a caller may read a target
//! - [`resolver`]: The [`IdentityResolver`] seam turning a bearer token into an
//!   email address
//! - [`jwt`]: An HS256 token implementation of that seam
//!
//! # Example
//!
//! ```ignore
//! use campus_auth::{Caller, Role, Target, policy};
//!
//! let caller = Caller::new("ryan@hei.school", Role::Student, student_id);
//! policy::authorize(&caller, &Target::Student(student_id))?;
//! ```

pub mod identity;
pub mod jwt;
pub mod policy;
pub mod resolver;

// Re-export commonly used types at crate root
pub use identity::{Caller, Role, Target, UnknownRole};
pub use jwt::{Claims, JwtIdentityResolver, create_access_token, verify_token};
pub use policy::{AccessDecision, authorize, decide};
pub use resolver::IdentityResolver;
#[cfg(any(test, feature = "test-utils"))]
pub use resolver::StaticIdentityResolver;
