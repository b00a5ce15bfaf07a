//! Callers and the resources they ask for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// The authenticated actor behind a request.
///
/// Resolved once per request from the bearer token; `id` is the caller's own
/// student or teacher record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub email: String,
    pub role: Role,
    pub id: Uuid,
}

impl Caller {
    pub fn new(email: impl Into<String>, role: Role, id: Uuid) -> Self {
        Self {
            email: email.into(),
            role,
            id,
        }
    }
}

/// A resource a caller asks to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Student(Uuid),
    Teacher(Uuid),
    /// The whole student listing.
    Students,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Student(id) => write!(f, "Student#{id}"),
            Target::Teacher(id) => write!(f, "Teacher#{id}"),
            Target::Students => f.write_str("Students"),
        }
    }
}
