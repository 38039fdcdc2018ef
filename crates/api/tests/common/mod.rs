#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use roster_db::InMemoryStudentStore;
use tower::ServiceExt;

use roster_api::config::{LogFormat, ServerConfig};
use roster_api::router::build_app_router;
use roster_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        database_url: "postgres://unused".to_string(),
        db_max_connections: 1,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router over the given in-memory store, with
/// the same middleware stack production uses.
pub fn build_test_app(store: Arc<InMemoryStudentStore>) -> Router {
    let config = test_config();
    let state = AppState { store };
    build_app_router(state, &config)
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_raw(app, Method::POST, uri, body.to_string()).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_raw(app, Method::PATCH, uri, body.to_string()).await
}

/// Send an arbitrary (possibly malformed) JSON body.
pub async fn send_raw(app: Router, method: Method, uri: &str, body: String) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn alice() -> serde_json::Value {
    serde_json::json!({
        "name": "Alice",
        "age": 22,
        "address": { "city": "Austin", "country": "USA" }
    })
}

/// Create a student through the API and return its id.
pub async fn create_student(app: Router, body: serde_json::Value) -> String {
    let response = post_json(app, "/students", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"]
        .as_str()
        .unwrap()
        .to_string()
}
