use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use campus_auth::Role;
use campus_core::{AppError, Page};
use campus_models::{User, UserRow};

use crate::errors::map_sqlx_error;
use crate::repository::UserRepository;

const USER_COLUMNS: &str = "id, ref, first_name, last_name, email, role, birth_date, created_at";

#[derive(Debug, Clone)]
pub struct PgUserRepository {
    db: PgPool,
}

impl PgUserRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.db)
        .await
        .map_err(map_sqlx_error)?;

        row.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid, role: Role) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1 AND role = $2"
        ))
        .bind(id)
        .bind(role.as_str())
        .fetch_optional(&self.db)
        .await
        .map_err(map_sqlx_error)?;

        row.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_by_role(&self, role: Role, page: Page) -> Result<(Vec<User>, i64), AppError> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE role = $1 ORDER BY ref LIMIT $2 OFFSET $3"
        ))
        .bind(role.as_str())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.db)
        .await
        .map_err(map_sqlx_error)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = $1")
            .bind(role.as_str())
            .fetch_one(&self.db)
            .await
            .map_err(map_sqlx_error)?;

        let users = rows
            .into_iter()
            .map(User::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }
}
