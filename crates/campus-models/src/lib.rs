//! # Campus Models
//!
//! Domain models and DTOs for the Campus API.
//!
//! - [`users`]: The stored user row shared by students and teachers
//! - [`students`]: Student resources and listings
//! - [`teachers`]: Teacher resources
//! - [`whoami`]: The resolved caller as returned to clients

pub mod students;
pub mod teachers;
pub mod users;
pub mod whoami;

pub use students::{PaginatedStudents, Student};
pub use teachers::Teacher;
pub use users::{User, UserRow};
pub use whoami::WhoAmI;
