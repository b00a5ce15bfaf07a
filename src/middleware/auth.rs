use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::{Authorization, authorization::Bearer};
use tracing::debug;

use campus_auth::Caller;
use campus_core::AppError;

use crate::state::AppState;

/// Extractor that resolves the bearer token into the calling user.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Caller);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    debug!(%rejection, "missing or malformed authorization header");
                    AppError::invalid_credentials("Bad credentials")
                })?;

        let email = state.identity.resolve_email(bearer.token()).await?;

        let user = state
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                debug!(%email, "token resolved to an unknown user");
                AppError::invalid_credentials("Bad credentials")
            })?;

        Ok(AuthUser(user.caller()))
    }
}
