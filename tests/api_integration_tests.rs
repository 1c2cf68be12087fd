//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use mosque_prayer::{api::create_router, AppState, PrayerDayCache};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    create_router(AppState::new(PrayerDayCache::new()))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

async fn warm(app: &Router, body: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/prayer-times/warm")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

fn to_minutes(hhmm: &str) -> i32 {
    let (h, m) = hhmm.split_once(':').unwrap();
    h.parse::<i32>().unwrap() * 60 + m.parse::<i32>().unwrap()
}

// == Prayer Times Endpoint Tests ==

#[tokio::test]
async fn test_prayer_times_for_date() {
    let app = create_test_app();

    let (status, json) = get(&app, "/prayer-times?date=2024-06-20").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ok"], true);
    assert_eq!(json["day"]["date"], "2024-06-20");
    assert_eq!(json["day"]["shamsi_date"], "1403-03-31");
    assert_eq!(json["day"]["shamsi_label"], "31 Khordad 1403");

    let zuhr = json["day"]["times"]["zuhr"].as_str().unwrap();
    assert!((to_minutes(zuhr) - to_minutes("11:33")).abs() <= 1);

    for field in ["fajr", "sunrise", "zuhr", "asr", "sunset", "maghrib", "isha", "midnight"] {
        assert_eq!(json["day"]["times"][field].as_str().unwrap().len(), 5);
    }
}

#[tokio::test]
async fn test_prayer_times_default_today() {
    let app = create_test_app();

    let (status, json) = get(&app, "/prayer-times").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["day"]["date"].as_str().unwrap().len(), 10);
}

#[tokio::test]
async fn test_prayer_times_instant_uses_local_day() {
    let app = create_test_app();

    // 21:00 UTC is past midnight in Mashhad
    let (status, json) = get(&app, "/prayer-times?date=2026-10-17T21:00:00Z").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["day"]["date"], "2026-10-18");
}

#[tokio::test]
async fn test_prayer_times_invalid_date() {
    let app = create_test_app();

    let (status, json) = get(&app, "/prayer-times?date=next-friday").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["ok"], false);
    assert_eq!(json["error"], "invalid_date");
}

#[tokio::test]
async fn test_repeat_request_is_cache_hit() {
    let app = create_test_app();

    let (_, first) = get(&app, "/prayer-times?date=2026-10-17").await;
    let (_, second) = get(&app, "/prayer-times?date=2026-10-17").await;
    assert_eq!(first, second);

    let (_, stats) = get(&app, "/stats").await;
    assert_eq!(stats["hits"], 1);
    assert_eq!(stats["misses"], 1);
    assert_eq!(stats["computed"], 1);
}

// == Shamsi Endpoint Tests ==

#[tokio::test]
async fn test_shamsi_endpoint() {
    let app = create_test_app();

    let (status, json) = get(&app, "/prayer-times/shamsi/1405-07-25").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["day"]["date"], "2026-10-17");
    assert_eq!(json["day"]["shamsi_date"], "1405-07-25");
}

#[tokio::test]
async fn test_shamsi_endpoint_invalid() {
    let app = create_test_app();

    let (status, json) = get(&app, "/prayer-times/shamsi/1405-07").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_shamsi_date");
}

// == Warm and Clear Endpoint Tests ==

#[tokio::test]
async fn test_warm_endpoint() {
    let app = create_test_app();

    let (status, json) = warm(&app, r#"{"days":10,"start":"2026-10-17"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["computed"], 10);
    assert_eq!(json["total_entries"], 10);

    // Second run over the same range computes nothing
    let (_, json) = warm(&app, r#"{"days":10,"start":"2026-10-17"}"#).await;
    assert_eq!(json["computed"], 0);

    // Every warmed day is a hit
    let (_, _) = get(&app, "/prayer-times?date=2026-10-26").await;
    let (_, stats) = get(&app, "/stats").await;
    assert_eq!(stats["misses"], 0);
    assert_eq!(stats["hits"], 1);
}

#[tokio::test]
async fn test_warm_endpoint_validation() {
    let app = create_test_app();

    let (status, json) = warm(&app, r#"{"days":0}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_request");

    let (status, json) = warm(&app, r#"{"days":3,"start":"2026-02-30"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_date");
}

#[tokio::test]
async fn test_clear_endpoint() {
    let app = create_test_app();

    warm(&app, r#"{"days":3,"start":"2026-10-17"}"#).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/prayer-times/cache")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (_, stats) = get(&app, "/stats").await;
    assert_eq!(stats["total_entries"], 0);
    assert_eq!(stats["prewarmed"], false);
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let (status, json) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}

#[tokio::test]
async fn test_unknown_route() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/announcements")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
