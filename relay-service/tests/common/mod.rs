#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use relay_service::config::RelayConfig;
use relay_service::services::providers::TextProvider;
use relay_service::startup::{build_router, AppState};
use std::sync::Arc;
use tower::ServiceExt;

pub const ALLOWED_ORIGIN: &str = "https://chat.example.test";

pub fn test_config() -> RelayConfig {
    RelayConfig::local(ALLOWED_ORIGIN)
}

pub fn router_with(provider: Arc<dyn TextProvider>) -> Router {
    build_router(AppState {
        config: test_config(),
        text_provider: provider,
    })
    .expect("Failed to build router")
}

pub fn chat_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, serde_json::Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body should be JSON")
    };
    (status, headers, body)
}
