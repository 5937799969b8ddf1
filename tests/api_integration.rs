//! Integration tests for the HTTP router.
//!
//! These tests drive the axum router directly to verify route registration
//! and response envelopes.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::create_test_app;
use tower::Service;

#[tokio::test]
async fn test_router_has_dashboard_route() {
    let mut app = create_test_app();

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let response = app.call(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_router_has_wifi_manager_route() {
    let mut app = create_test_app();

    let request = Request::builder()
        .uri("/wifi-manager")
        .body(Body::empty())
        .unwrap();

    let response = app.call(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_router_has_goats_route() {
    let mut app = create_test_app();

    let request = Request::builder()
        .uri("/api/goats")
        .body(Body::empty())
        .unwrap();

    let response = app.call(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_router_has_health_route() {
    let mut app = create_test_app();

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.call(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_router_returns_404_unknown() {
    let mut app = create_test_app();

    let request = Request::builder()
        .uri("/does-not-exist")
        .body(Body::empty())
        .unwrap();

    let response = app.call(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let mut app = create_test_app();

    let request = Request::builder()
        .uri("/api/goats")
        .body(Body::empty())
        .unwrap();

    let response = app.call(request).await.unwrap();

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("should have x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}
