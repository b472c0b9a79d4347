mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use common::{router_with, send, ALLOWED_ORIGIN};
use relay_service::middleware::origin::ORIGIN_NOT_ALLOWED;
use relay_service::services::providers::mock::MockTextProvider;
use std::sync::Arc;

fn chat_from(origin: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::ORIGIN, origin)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"message":"hello"}"#))
        .unwrap()
}

fn preflight_from(origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/chat")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn allowed_origin_receives_permissive_headers() {
    let router = router_with(Arc::new(MockTextProvider::replying("world")));

    let (status, headers, body) = send(&router, chat_from(ALLOWED_ORIGIN)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "world");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ALLOWED_ORIGIN);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[tokio::test]
async fn allowed_origin_gets_cors_headers_on_errors_too() {
    let router = router_with(Arc::new(MockTextProvider::failing("boom")));

    let (status, headers, _) = send(&router, chat_from(ALLOWED_ORIGIN)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ALLOWED_ORIGIN);
}

#[tokio::test]
async fn other_origin_is_rejected_before_generation() {
    let provider = Arc::new(MockTextProvider::echo());
    let router = router_with(provider.clone());

    for origin in [
        "https://evil.example.test",
        "http://chat.example.test",
        "https://chat.example.test.evil.test",
        "null",
    ] {
        let (status, headers, body) = send(&router, chat_from(origin)).await;

        assert_eq!(status, StatusCode::FORBIDDEN, "origin: {}", origin);
        assert_eq!(body["error"], ORIGIN_NOT_ALLOWED);
        assert!(!headers.contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
        assert!(headers.contains_key("x-request-id"));
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    }

    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn preflight_from_allowed_origin_is_answered() {
    let provider = Arc::new(MockTextProvider::echo());
    let router = router_with(provider.clone());

    let (status, headers, _) = send(&router, preflight_from(ALLOWED_ORIGIN)).await;

    assert!(status.is_success());
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ALLOWED_ORIGIN);
    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    assert!(methods.contains("POST"));
    let allowed_headers = headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(allowed_headers.contains("content-type"));
    assert!(headers.contains_key("x-request-id"));
    assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn preflight_from_other_origin_is_rejected() {
    let router = router_with(Arc::new(MockTextProvider::echo()));

    let (status, headers, _) = send(&router, preflight_from("https://evil.example.test")).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(!headers.contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn requests_without_origin_are_served() {
    let router = router_with(Arc::new(MockTextProvider::replying("world")));

    let request = Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"message":"hello"}"#))
        .unwrap();
    let (status, headers, body) = send(&router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "world");
    assert!(!headers.contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
