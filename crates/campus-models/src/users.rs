//! The `users` table.
//!
//! Students and teachers live in one table, told apart by `role`.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use campus_auth::{Caller, Role};
use campus_core::AppError;

/// A row as stored, before the role column is checked.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    #[sqlx(rename = "ref")]
    pub reference: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub birth_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub reference: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub birth_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// The caller this user acts as once their token is resolved.
    pub fn caller(&self) -> Caller {
        Caller::new(self.email.clone(), self.role, self.id)
    }
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = row.role.parse::<Role>().map_err(AppError::internal)?;

        Ok(Self {
            id: row.id,
            reference: row.reference,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            role,
            birth_date: row.birth_date,
            created_at: row.created_at,
        })
    }
}
