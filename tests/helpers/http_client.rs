//! Drives the router in-process with `tower::ServiceExt::oneshot`

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use hostel_server::{create_router, AppState, DatabaseService};

use super::TestDatabase;

/// Router bound to a test database
pub struct TestApp {
    pub db: TestDatabase,
    pub router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let db = TestDatabase::new().await.expect("Failed to create test database");
        let router = create_router(AppState::new(DatabaseService::new(db.pool.clone())));

        Self { db, router }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        send(&self.router, "GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        send(&self.router, "POST", uri, Some(body.to_string())).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        send(&self.router, "PUT", uri, Some(body.to_string())).await
    }

    pub async fn put_raw(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        send(&self.router, "PUT", uri, Some(body.to_string())).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        send(&self.router, "DELETE", uri, None).await
    }
}

/// Send one request and decode the JSON response body
pub async fn send(router: &Router, method: &str, uri: &str, body: Option<String>) -> (StatusCode, Value) {
    let content_type = body.as_ref().map(|_| "application/json");
    send_with_content_type(router, method, uri, body, content_type).await
}

/// Like [`send`], with an explicit (or absent) `Content-Type` header
pub async fn send_with_content_type(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<String>,
    content_type: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder
        .body(body.map(Body::from).unwrap_or_else(Body::empty))
        .expect("Failed to build request");

    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("Router is infallible");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}
