//! Student resources.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use campus_core::PaginationMeta;

use crate::users::User;

/// A student as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: Uuid,
    #[serde(rename = "ref")]
    pub reference: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birth_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for Student {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            reference: user.reference,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            birth_date: user.birth_date,
            created_at: user.created_at,
        }
    }
}

/// Paginated response containing students.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedStudents {
    pub data: Vec<Student>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_auth::Role;

    #[test]
    fn test_student_serializes_camel_case() {
        let user = User {
            id: Uuid::nil(),
            reference: "STD21001".to_string(),
            first_name: "Ryan".to_string(),
            last_name: "Andria".to_string(),
            email: "ryan@hei.school".to_string(),
            role: Role::Student,
            birth_date: NaiveDate::from_ymd_opt(2000, 1, 1),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(Student::from(user)).unwrap();
        assert_eq!(json["firstName"], "Ryan");
        assert_eq!(json["ref"], "STD21001");
        assert_eq!(json["birthDate"], "2000-01-01");
        assert!(json.get("role").is_none());
    }
}
