//! Bearer token to email resolution.
//!
//! The identity provider is a collaborator: the rest of the service only sees
//! [`IdentityResolver`], so tests swap in [`StaticIdentityResolver`] the same
//! way they would mock the provider.

use async_trait::async_trait;

use campus_core::AppError;

#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Returns the email behind `bearer`.
    ///
    /// Any failure must be [`AppError::InvalidCredentials`]; a caller that
    /// cannot be identified is never an internal error.
    async fn resolve_email(&self, bearer: &str) -> Result<String, AppError>;
}

/// Fixed token to email table.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, Default)]
pub struct StaticIdentityResolver {
    emails: std::collections::HashMap<String, String>,
}

#[cfg(any(test, feature = "test-utils"))]
impl StaticIdentityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, token: impl Into<String>, email: impl Into<String>) -> Self {
        self.emails.insert(token.into(), email.into());
        self
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl IdentityResolver for StaticIdentityResolver {
    async fn resolve_email(&self, bearer: &str) -> Result<String, AppError> {
        self.emails
            .get(bearer)
            .cloned()
            .ok_or_else(|| AppError::invalid_credentials("Bad credentials"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_resolver() {
        let resolver = StaticIdentityResolver::new().with("token-1", "ryan@hei.school");

        assert_eq!(
            resolver.resolve_email("token-1").await.unwrap(),
            "ryan@hei.school"
        );
        assert!(matches!(
            resolver.resolve_email("token-2").await,
            Err(AppError::InvalidCredentials(_))
        ));
    }
}
