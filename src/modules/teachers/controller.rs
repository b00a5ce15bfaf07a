use axum::{Json, extract::State};
use campus_core::{AppError, ErrorResource};
use campus_models::Teacher;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::extract::Path;
use crate::modules::teachers::service::TeacherService;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/teachers/{id}",
    params(
        ("id" = Uuid, Path, description = "Teacher id")
    ),
    responses(
        (status = 200, description = "Teacher found", body = Teacher),
        (status = 400, description = "Malformed id", body = ErrorResource),
        (status = 403, description = "Bad credentials or not allowed to read this teacher", body = ErrorResource),
        (status = 404, description = "Teacher not found", body = ErrorResource),
        (status = 429, description = "Resource busy, retry later", body = ErrorResource),
        (status = 500, description = "Internal server error", body = ErrorResource)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teacher(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = TeacherService::get_teacher(state.users.as_ref(), &caller, id).await?;
    Ok(Json(teacher))
}
