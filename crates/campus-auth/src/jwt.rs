//! HS256 bearer tokens.
//!
//! Tokens carry only the caller's email as the subject; role and record id
//! are looked up per request, so a token never grants more than the user row
//! behind it.
//!
//! # Example
//!
//! ```ignore
//! use campus_auth::{create_access_token, verify_token};
//! use campus_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token("ryan@hei.school", &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.sub, "ryan@hei.school");
//! ```

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use campus_config::JwtConfig;
use campus_core::AppError;

use crate::resolver::IdentityResolver;

/// JWT claims for access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Caller email (subject claim)
    pub sub: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

/// Creates an access token for `email`, valid for
/// [`JwtConfig::access_token_expiry`] seconds.
///
/// # Errors
///
/// Returns an internal error if token encoding fails.
pub fn create_access_token(email: &str, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = now + jwt_config.access_token_expiry;

    let claims = Claims {
        sub: email.to_string(),
        exp: exp.max(0) as usize,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(AppError::internal)
}

/// Verifies signature and expiry, returning the embedded claims.
///
/// # Errors
///
/// Returns [`AppError::InvalidCredentials`] if the token is malformed, signed
/// with another secret, or expired.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        debug!(error = %e, "bearer token rejected");
        AppError::invalid_credentials("Bad credentials")
    })
}

/// Resolves bearer tokens issued by [`create_access_token`].
#[derive(Debug, Clone)]
pub struct JwtIdentityResolver {
    config: JwtConfig,
}

impl JwtIdentityResolver {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl IdentityResolver for JwtIdentityResolver {
    async fn resolve_email(&self, bearer: &str) -> Result<String, AppError> {
        verify_token(bearer, &self.config).map(|claims| claims.sub)
    }
}
