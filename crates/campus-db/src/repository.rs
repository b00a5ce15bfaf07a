use async_trait::async_trait;
use uuid::Uuid;

use campus_auth::Role;
use campus_core::{AppError, Page};
use campus_models::User;

/// Read access to stored users.
///
/// Implementations report lock contention as
/// [`AppError::LockUnavailable`] so it reaches clients as a retryable 429.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Finds the user with `id` holding `role`.
    async fn find_by_id(&self, id: Uuid, role: Role) -> Result<Option<User>, AppError>;

    /// One page of users holding `role`, ordered by reference, plus the total
    /// count.
    async fn list_by_role(&self, role: Role, page: Page) -> Result<(Vec<User>, i64), AppError>;
}
