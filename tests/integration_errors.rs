mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use campus::campus_auth::Role;
use campus::campus_core::{AppError, Page};
use campus::campus_db::{InMemoryUserRepository, UserRepository};
use campus::campus_models::User;
use common::{assert_error, get_json, ids, setup_app_with, setup_test_app, test_users, tokens};
use uuid::Uuid;

/// Resolves callers normally but reports every record lookup as contended.
struct ContendedRepository {
    inner: InMemoryUserRepository,
}

#[async_trait]
impl UserRepository for ContendedRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.inner.find_by_email(email).await
    }

    async fn find_by_id(&self, _id: Uuid, _role: Role) -> Result<Option<User>, AppError> {
        Err(AppError::lock_unavailable(anyhow::anyhow!(
            "canceling statement due to lock timeout"
        )))
    }

    async fn list_by_role(&self, _role: Role, _page: Page) -> Result<(Vec<User>, i64), AppError> {
        Err(AppError::internal(anyhow::anyhow!(
            "relation \"users\" does not exist"
        )))
    }
}

fn contended_app() -> axum::Router {
    setup_app_with(Arc::new(ContendedRepository {
        inner: InMemoryUserRepository::new(test_users()),
    }))
}

mod credentials {
    use super::*;

    #[tokio::test]
    async fn test_missing_authorization_is_forbidden() {
        let app = setup_test_app();

        let (status, body) = get_json(app, &format!("/students/{}", ids::STUDENT1), None).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_error(&body, "FORBIDDEN");
        assert_eq!(body["message"], "Bad credentials");
    }

    #[tokio::test]
    async fn test_unknown_token_is_forbidden() {
        let app = setup_test_app();

        let (status, body) = get_json(app, "/whoami", Some("not-a-known-token")).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_error(&body, "FORBIDDEN");
    }

    #[tokio::test]
    async fn test_token_for_unknown_user_is_forbidden() {
        let app = setup_test_app();

        let (status, body) = get_json(app, "/whoami", Some(tokens::STRANGER)).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "Bad credentials");
    }
}

mod bad_requests {
    use super::*;

    #[tokio::test]
    async fn test_malformed_id_is_bad_request() {
        let app = setup_test_app();

        let (status, body) = get_json(app, "/students/not-a-uuid", Some(tokens::TEACHER1)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_error(&body, "BAD_REQUEST");
        assert!(!body["message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_page_is_bad_request() {
        let app = setup_test_app();

        let (status, body) = get_json(app, "/students?page_size=10", Some(tokens::TEACHER1)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_error(&body, "BAD_REQUEST");
        assert!(body["message"].as_str().unwrap().contains("page"));
    }

    #[tokio::test]
    async fn test_missing_page_size_is_bad_request() {
        let app = setup_test_app();

        let (status, body) = get_json(app, "/students?page=1", Some(tokens::TEACHER1)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("page_size"));
    }

    #[tokio::test]
    async fn test_page_size_out_of_range_is_bad_request() {
        let app = setup_test_app();

        let (status, body) =
            get_json(app, "/students?page=1&page_size=501", Some(tokens::TEACHER1)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_error(&body, "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_non_numeric_page_is_bad_request() {
        let app = setup_test_app();

        let (status, body) =
            get_json(app, "/students?page=abc&page_size=10", Some(tokens::TEACHER1)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_error(&body, "BAD_REQUEST");
        assert_eq!(body["message"], "invalid digit found in string");
    }

    #[tokio::test]
    async fn test_unaddressable_page_is_bad_request() {
        let app = setup_test_app();

        let (status, body) = get_json(
            app,
            "/students?page=9223372036854775807&page_size=2",
            Some(tokens::TEACHER1),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_error(&body, "BAD_REQUEST");
        assert!(body["message"].as_str().unwrap().contains("out of range"));
    }
}

mod not_found {
    use super::*;

    #[tokio::test]
    async fn test_teacher_reading_absent_student_is_not_found() {
        let app = setup_test_app();
        let absent = Uuid::from_u128(0xffff);

        let (status, body) =
            get_json(app, &format!("/students/{absent}"), Some(tokens::TEACHER1)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_error(&body, "NOT_FOUND");
        assert_eq!(body["message"], format!("Student#{absent} not found"));
    }
}

mod infrastructure {
    use super::*;

    #[tokio::test]
    async fn test_lock_contention_is_too_many_requests() {
        let app = contended_app();

        let (status, body) = get_json(
            app,
            &format!("/students/{}", ids::STUDENT1),
            Some(tokens::TEACHER1),
        )
        .await;

        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_error(&body, "TOO_MANY_REQUESTS");
        assert!(!body["message"].as_str().unwrap().contains("lock timeout"));
    }

    #[tokio::test]
    async fn test_internal_failure_hides_details() {
        let app = contended_app();

        let (status, body) =
            get_json(app, "/students?page=1&page_size=10", Some(tokens::TEACHER1)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_error(&body, "INTERNAL");
        assert!(!body["message"].as_str().unwrap().contains("relation"));
    }

    #[tokio::test]
    async fn test_policy_runs_before_contended_lookup() {
        let app = contended_app();

        let (status, _) = get_json(
            app,
            &format!("/students/{}", ids::STUDENT2),
            Some(tokens::STUDENT1),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}

mod responses {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/whoami")
                    .header("authorization", format!("Bearer {}", tokens::TEACHER1))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let request_id = response.headers().get("x-request-id").unwrap();
        assert!(Uuid::parse_str(request_id.to_str().unwrap()).is_ok());
    }
}
