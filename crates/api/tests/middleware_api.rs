//! The shared middleware stack: CORS and request ids.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use filmlib_api::router::REQUEST_ID_HEADER;
use tower::ServiceExt;

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/works")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_preflight_from_configured_origin_is_allowed() {
    let response = common::build_test_app()
        .oneshot(preflight("http://localhost:5173"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
        "true"
    );
}

#[tokio::test]
async fn test_preflight_from_unknown_origin_gets_no_allow_header() {
    let response = common::build_test_app()
        .oneshot(preflight("https://elsewhere.example"))
        .await
        .unwrap();

    assert!(!response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn test_caller_request_id_is_echoed() {
    let request = Request::builder()
        .uri("/health")
        .header(REQUEST_ID_HEADER, "req-123")
        .body(Body::empty())
        .unwrap();

    let response = common::build_test_app().oneshot(request).await.unwrap();
    assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-123");
}

#[tokio::test]
async fn test_request_id_is_generated_for_rejected_requests() {
    let response = common::get(common::build_test_app(), "/api/v1/works?sort=1").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let id = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}
