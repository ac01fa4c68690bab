mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use common::{body_json, get, test_app, StubRateProvider};

#[tokio::test]
async fn root_returns_app_banner() {
    let (_dir, app) = test_app(StubRateProvider::default());

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!([{ "app": "cambio" }]));
}

#[tokio::test]
async fn health_reports_liveness() {
    let (_dir, app) = test_app(StubRateProvider::default());

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["healthy"], true);
    assert!(body["checked_at"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (_dir, app) = test_app(StubRateProvider::default());

    let response = app.oneshot(get("/api/openapi.json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["paths"]["/api/currency/"].is_object());
}
