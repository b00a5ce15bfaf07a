//! Who may read what.
//!
//! | Caller | Target | Decision |
//! |---|---|---|
//! | Student X | Student X | allowed |
//! | Student X | any other student, any teacher, the student listing | forbidden |
//! | Teacher X | Teacher X | allowed |
//! | Teacher X | any other teacher | forbidden |
//! | Teacher X | any student, the student listing | allowed |
//!
//! Pairs missing from the match below are denied.

use campus_core::AppError;
use tracing::debug;

use crate::identity::{Caller, Role, Target};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed,
    Forbidden,
}

impl AccessDecision {
    pub fn is_allowed(self) -> bool {
        self == AccessDecision::Allowed
    }
}

pub fn decide(caller: &Caller, target: &Target) -> AccessDecision {
    let allowed = match (caller.role, target) {
        (Role::Student, Target::Student(id)) => *id == caller.id,
        (Role::Teacher, Target::Teacher(id)) => *id == caller.id,
        (Role::Teacher, Target::Student(_) | Target::Students) => true,
        _ => false,
    };

    if allowed {
        AccessDecision::Allowed
    } else {
        AccessDecision::Forbidden
    }
}

/// Like [`decide`], but a denial becomes [`AppError::Forbidden`].
pub fn authorize(caller: &Caller, target: &Target) -> Result<(), AppError> {
    match decide(caller, target) {
        AccessDecision::Allowed => Ok(()),
        AccessDecision::Forbidden => {
            debug!(caller = %caller.email, role = %caller.role, %target, "access denied");
            Err(AppError::forbidden("Access is denied"))
        }
    }
}
