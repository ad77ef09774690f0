mod common;

use axum::http::{header, StatusCode};

#[tokio::test]
async fn test_landing_page() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let response = common::get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert!(body.contains("Exercise Tracker"));
    assert!(body.contains("/api/users"));
}

#[tokio::test]
async fn test_health_check() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let response = common::get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_static_stylesheet_is_served() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let response = common::get(app, "/style.css").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("text/css")));
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let response = common::get(app, "/no/such/page").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/users")
                .header(header::ORIGIN, "https://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}
