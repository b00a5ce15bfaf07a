use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use campus::campus_auth::{Role, StaticIdentityResolver};
use campus::campus_config::CorsConfig;
use campus::campus_db::{InMemoryUserRepository, UserRepository};
use campus::campus_models::User;
use campus::router::init_router;
use campus::state::AppState;
use chrono::{NaiveDate, TimeZone, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

/// Fixed record ids shared by every test app.
#[allow(dead_code)]
pub mod ids {
    use uuid::Uuid;
    pub const STUDENT1: Uuid = Uuid::from_u128(0x00000000_0000_0000_0000_000000000101);
    pub const STUDENT2: Uuid = Uuid::from_u128(0x00000000_0000_0000_0000_000000000102);
    pub const TEACHER1: Uuid = Uuid::from_u128(0x00000000_0000_0000_0000_000000000201);
    pub const TEACHER2: Uuid = Uuid::from_u128(0x00000000_0000_0000_0000_000000000202);
}

/// Bearer tokens the static resolver accepts.
#[allow(dead_code)]
pub mod tokens {
    pub const STUDENT1: &str = "student1-token";
    pub const STUDENT2: &str = "student2-token";
    pub const TEACHER1: &str = "teacher1-token";
    pub const TEACHER2: &str = "teacher2-token";
    /// Resolves to an email with no user row.
    pub const STRANGER: &str = "stranger-token";
}

fn user(
    id: Uuid,
    reference: &str,
    first_name: &str,
    last_name: &str,
    email: &str,
    role: Role,
) -> User {
    User {
        id,
        reference: reference.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        role,
        birth_date: NaiveDate::from_ymd_opt(2000, 1, 1),
        created_at: Utc.with_ymd_and_hms(2021, 11, 8, 8, 25, 24).unwrap(),
    }
}

pub fn test_users() -> Vec<User> {
    vec![
        user(
            ids::STUDENT1,
            "STD21001",
            "Ryan",
            "Andria",
            "ryan@hei.school",
            Role::Student,
        ),
        user(
            ids::STUDENT2,
            "STD21002",
            "Two",
            "Student",
            "student2@hei.school",
            Role::Student,
        ),
        user(
            ids::TEACHER1,
            "TCR21001",
            "Teacher",
            "One",
            "teacher1@hei.school",
            Role::Teacher,
        ),
        user(
            ids::TEACHER2,
            "TCR21002",
            "Teacher",
            "Two",
            "teacher2@hei.school",
            Role::Teacher,
        ),
    ]
}

pub fn test_resolver() -> StaticIdentityResolver {
    StaticIdentityResolver::new()
        .with(tokens::STUDENT1, "ryan@hei.school")
        .with(tokens::STUDENT2, "student2@hei.school")
        .with(tokens::TEACHER1, "teacher1@hei.school")
        .with(tokens::TEACHER2, "teacher2@hei.school")
        .with(tokens::STRANGER, "nobody@hei.school")
}

/// Builds the router over `users` with the standard resolver.
pub fn setup_app_with(users: Arc<dyn UserRepository>) -> Router {
    let state = AppState::new(
        users,
        Arc::new(test_resolver()),
        CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
    );
    init_router(state)
}

#[allow(dead_code)]
pub fn setup_test_app() -> Router {
    setup_app_with(Arc::new(InMemoryUserRepository::new(test_users())))
}

/// Sends a GET to `uri`, with a bearer token when given, and returns the
/// status and the JSON body.
pub async fn get_json(app: Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let response = app
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

/// Asserts an error body of the given type.
#[allow(dead_code)]
pub fn assert_error(body: &Value, error_type: &str) {
    assert_eq!(body["type"], error_type, "body: {body}");
    assert!(body["message"].is_string(), "body: {body}");
}
