//! In-memory [`UserRepository`] for tests.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use campus_auth::Role;
use campus_core::{AppError, Page};
use campus_models::User;

use crate::repository::UserRepository;

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    pub async fn insert(&self, user: User) {
        self.users.write().await.push(user);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid, role: Role) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.id == id && u.role == role)
            .cloned())
    }

    async fn list_by_role(&self, role: Role, page: Page) -> Result<(Vec<User>, i64), AppError> {
        let users = self.users.read().await;
        let mut matching: Vec<User> = users.iter().filter(|u| u.role == role).cloned().collect();
        matching.sort_by(|a, b| a.reference.cmp(&b.reference));

        let total = i64::try_from(matching.len()).map_err(AppError::internal)?;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(0);
        let data = matching.into_iter().skip(offset).take(limit).collect();

        Ok((data, total))
    }
}
