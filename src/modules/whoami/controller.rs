use axum::Json;
use campus_core::ErrorResource;
use campus_models::WhoAmI;

use crate::middleware::auth::AuthUser;

#[utoipa::path(
    get,
    path = "/whoami",
    responses(
        (status = 200, description = "The resolved caller", body = WhoAmI),
        (status = 403, description = "Bad credentials", body = ErrorResource)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Security"
)]
pub async fn whoami(AuthUser(caller): AuthUser) -> Json<WhoAmI> {
    Json(WhoAmI::from(&caller))
}
