use std::sync::Arc;

use campus_auth::IdentityResolver;
use campus_config::CorsConfig;
use campus_db::UserRepository;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub identity: Arc<dyn IdentityResolver>,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        identity: Arc<dyn IdentityResolver>,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            users,
            identity,
            cors_config,
        }
    }
}
