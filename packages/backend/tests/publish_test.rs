//! HTTP-level tests for the form endpoints, backed by the in-memory store.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use backend::{app, AppState};
use store::{
    Form, FormStore, MemoryStore, PasswordHash, SiteSettings, StoreError, UpsertOutcome, User,
    UserStore,
};
use tower::ServiceExt;
use uuid::Uuid;

struct TestApp {
    router: Router,
    store: MemoryStore,
}

impl TestApp {
    fn with_form(id: &str, is_published: bool) -> Self {
        let store = MemoryStore::new();
        let mut form = Form::new(id, "Customer feedback");
        form.is_published = is_published;
        store.insert_form(form).unwrap();
        let router = app::router(AppState::from_store(store.clone(), SiteSettings::default()));
        Self { router, store }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        send(&self.router, request).await
    }

    async fn publish(&self, id: &str, body: &str) -> (StatusCode, Value) {
        self.send(publish_request(id, body)).await
    }

    async fn stored(&self, id: &str) -> Form {
        self.store.get_form(id).await.unwrap().unwrap()
    }
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn publish_request(id: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::PATCH)
        .uri(format!("/api/forms/{id}/publish"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Every call fails as if the database had gone away.
struct UnavailableStore;

fn unavailable() -> StoreError {
    StoreError::backend(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "connection refused: db down",
    ))
}

#[async_trait]
impl FormStore for UnavailableStore {
    async fn get_form(&self, _id: &str) -> Result<Option<Form>, StoreError> {
        Err(unavailable())
    }

    async fn set_published(&self, _id: &str, _is_published: bool) -> Result<Option<Form>, StoreError> {
        Err(unavailable())
    }
}

#[async_trait]
impl UserStore for UnavailableStore {
    async fn find_user_by_email(&self, _email: &str) -> Result<Option<User>, StoreError> {
        Err(unavailable())
    }

    async fn find_user_by_id(&self, _id: Uuid) -> Result<Option<User>, StoreError> {
        Err(unavailable())
    }

    async fn upsert_credentials(
        &self,
        _email: &str,
        _name: &str,
        _password_hash: &PasswordHash,
    ) -> Result<(User, UpsertOutcome), StoreError> {
        Err(unavailable())
    }
}

fn updated_at(body: &Value) -> DateTime<Utc> {
    body["updatedAt"].as_str().unwrap().parse().unwrap()
}

#[tokio::test]
async fn publish_sets_flag_and_advances_timestamp() {
    let app = TestApp::with_form("abc123", false);
    let before = app.stored("abc123").await.updated_at;

    let (status, body) = app.publish("abc123", r#"{"isPublished": true}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "abc123");
    assert_eq!(body["isPublished"], true);
    assert!(updated_at(&body) > before);

    let stored = app.stored("abc123").await;
    assert!(stored.is_published);
    assert_eq!(stored.updated_at, updated_at(&body));
}

#[tokio::test]
async fn unpublish_sets_flag_false() {
    let app = TestApp::with_form("live", true);

    let (status, body) = app.publish("live", r#"{"isPublished": false}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isPublished"], false);
    assert!(!app.stored("live").await.is_published);
}

#[tokio::test]
async fn repeated_publish_is_idempotent_but_touches_timestamp() {
    let app = TestApp::with_form("abc123", false);

    let (_, first) = app.publish("abc123", r#"{"isPublished": true}"#).await;
    let (status, second) = app.publish("abc123", r#"{"isPublished": true}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["isPublished"], true);
    assert_eq!(second["isPublished"], true);
    assert!(updated_at(&second) > updated_at(&first));
}

#[tokio::test]
async fn unknown_form_is_not_found() {
    let app = TestApp::with_form("abc123", false);

    let (status, body) = app.publish("missing", r#"{"isPublished": true}"#).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Form not found" }));
}

#[tokio::test]
async fn malformed_bodies_are_rejected_without_writing() {
    let app = TestApp::with_form("abc123", false);
    let before = app.stored("abc123").await;

    for body in [
        "",
        "not json",
        "{}",
        r#"{"isPublished": "true"}"#,
        r#"{"isPublished": 1}"#,
        r#"{"isPublished": null}"#,
        r#"{"published": true}"#,
    ] {
        let (status, response) = app.publish("abc123", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body:?}");
        assert!(response["error"].is_string(), "body {body:?}");
    }

    assert_eq!(app.stored("abc123").await, before);
}

#[tokio::test]
async fn missing_content_type_is_rejected() {
    let app = TestApp::with_form("abc123", false);
    let request = Request::builder()
        .method(Method::PATCH)
        .uri("/api/forms/abc123/publish")
        .body(Body::from(r#"{"isPublished": true}"#))
        .unwrap();

    let (status, _) = app.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!app.stored("abc123").await.is_published);
}

#[tokio::test]
async fn get_form_returns_record_or_404() {
    let app = TestApp::with_form("abc123", false);

    let request = Request::get("/api/forms/abc123").body(Body::empty()).unwrap();
    let (status, body) = app.send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Customer feedback");
    assert_eq!(body["isPublished"], false);

    let request = Request::get("/api/forms/nope").body(Body::empty()).unwrap();
    let (status, _) = app.send(request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn publish_requires_patch() {
    let app = TestApp::with_form("abc123", false);
    let request = Request::post("/api/forms/abc123/publish")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"isPublished": true}"#))
        .unwrap();

    let (status, _) = app.send(request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn store_failure_is_500() {
    let router = app::router(AppState::from_store(UnavailableStore, SiteSettings::default()));

    let (status, body) = send(&router, publish_request("abc123", r#"{"isPublished": true}"#)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal server error" }));
}

#[tokio::test]
async fn store_failure_does_not_leak_detail_on_read() {
    let router = app::router(AppState::from_store(UnavailableStore, SiteSettings::default()));
    let request = Request::get("/api/forms/abc123").body(Body::empty()).unwrap();

    let (status, body) = send(&router, request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.to_string().contains("db down"));
}
