//! Integration tests for API endpoints.
//!
//! These tests drive the real router with a mock user service, so they
//! exercise routing, extraction, status mapping, and error bodies without
//! requiring a database.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use user_api::api::{create_router, AppState};
use user_api::domain::{Email, User, UserResponse};
use user_api::errors::AppResult;
use user_api::services::UserService;

/// Mock user service backed by domain validation and a single known user.
struct MockUserService;

#[async_trait]
impl UserService for MockUserService {
    async fn create_user(&self, name: String, email_value: String) -> AppResult<User> {
        // Validate exactly like the real service, then pretend the store
        // assigned identifier 1.
        let email = Email::parse(email_value)?;
        let user = User::new(name, email)?;
        Ok(User::from_record(1, user.name, user.email))
    }

    async fn find_user_by_id(&self, id: i64) -> AppResult<Option<User>> {
        if id == 1 {
            Ok(Some(User::from_record(
                1,
                "Ada".to_string(),
                Email::parse("ada@example.com").unwrap(),
            )))
        } else {
            Ok(None)
        }
    }
}

fn test_app() -> Router {
    create_router(AppState::new(Arc::new(MockUserService)))
}

fn post_users(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_user_returns_201_with_location_header() {
    let response = test_app()
        .oneshot(post_users(r#"{"name":"Ada","email":"ada@example.com"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/users/1"
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let user: UserResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.name, "Ada");
    assert_eq!(user.email, "ada@example.com");
}

#[tokio::test]
async fn test_create_user_with_malformed_email_returns_400() {
    let response = test_app()
        .oneshot(post_users(r#"{"name":"Ada","email":"not-an-email"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_FORMAT");
}

#[tokio::test]
async fn test_create_user_with_blank_name_returns_400() {
    let response = test_app()
        .oneshot(post_users(r#"{"name":"","email":"ada@example.com"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_get_user_returns_200_with_user() {
    let request = Request::builder()
        .uri("/users/1")
        .body(Body::empty())
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let user: UserResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.email, "ada@example.com");
}

#[tokio::test]
async fn test_get_missing_user_returns_404() {
    let request = Request::builder()
        .uri("/users/999999")
        .body(Body::empty())
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_health_endpoint_returns_ok() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_root_endpoint_returns_welcome_message() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"Welcome to User API");
}
