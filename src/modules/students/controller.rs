use axum::{Json, extract::State};
use campus_core::{AppError, ErrorResource, PageParams};
use campus_models::{PaginatedStudents, Student};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::extract::{Path, Query};
use crate::modules::students::service::StudentService;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/students/{id}",
    params(
        ("id" = Uuid, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "Student found", body = Student),
        (status = 400, description = "Malformed id", body = ErrorResource),
        (status = 403, description = "Bad credentials or not allowed to read this student", body = ErrorResource),
        (status = 404, description = "Student not found", body = ErrorResource),
        (status = 429, description = "Resource busy, retry later", body = ErrorResource),
        (status = 500, description = "Internal server error", body = ErrorResource)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::get_student(state.users.as_ref(), &caller, id).await?;
    Ok(Json(student))
}

#[utoipa::path(
    get,
    path = "/students",
    params(
        PageParams
    ),
    responses(
        (status = 200, description = "Page of students", body = PaginatedStudents),
        (status = 400, description = "Missing or invalid pagination parameters", body = ErrorResource),
        (status = 403, description = "Bad credentials or not a teacher", body = ErrorResource),
        (status = 429, description = "Resource busy, retry later", body = ErrorResource),
        (status = 500, description = "Internal server error", body = ErrorResource)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Query(params): Query<PageParams>,
) -> Result<Json<PaginatedStudents>, AppError> {
    let page = params.resolve()?;
    let students = StudentService::list_students(state.users.as_ref(), &caller, page).await?;
    Ok(Json(students))
}
