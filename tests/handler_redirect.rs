mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::SqlitePool;

use linkcell::routes::app_router;

#[sqlx::test]
async fn test_redirect_302_and_analytics_settle(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(app_router(state.clone())).unwrap();

    // Full scenario: shorten, follow, then stats after the background
    // writes land.
    let created = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/page" }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let slug = created.json::<Value>()["slug"].as_str().unwrap().to_string();

    let redirect = server.get(&format!("/{slug}")).await;
    redirect.assert_status(StatusCode::FOUND);
    assert_eq!(
        redirect.header("location"),
        "https://example.com/page"
    );

    common::wait_for_count(&state, &slug, 1).await;
    common::wait_for_clicks(&state, &slug, 1).await;

    let stats = server.get(&format!("/api/stats/{slug}")).await;
    stats.assert_status_ok();

    let body = stats.json::<Value>();
    assert_eq!(body["totalClicks"], 1);
    assert_eq!(body["recentClicks"].as_array().unwrap().len(), 1);
}

#[sqlx::test]
async fn test_redirect_unknown_slug_returns_404(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server.get("/nosuch").await;

    response.assert_status(StatusCode::NOT_FOUND);

    let body = response.json::<Value>();
    assert_eq!(body["error"], "Short URL not found");
}

#[sqlx::test]
async fn test_redirect_records_request_metadata(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(app_router(state.clone())).unwrap();

    common::create_test_link(&state, "meta", "https://example.com").await;

    server
        .get("/meta")
        .add_header("referer", "https://google.com")
        .add_header("user-agent", "TestAgent/1.0")
        .add_header("cf-ipcountry", "DE")
        .await
        .assert_status(StatusCode::FOUND);

    common::wait_for_clicks(&state, "meta", 1).await;

    let rows = state.ledger.recent_by_slug("meta", 100).await.unwrap();
    assert_eq!(rows[0].referrer, Some("https://google.com".to_string()));
    assert_eq!(rows[0].user_agent, Some("TestAgent/1.0".to_string()));
    assert_eq!(rows[0].country, Some("DE".to_string()));
}

#[sqlx::test]
async fn test_redirect_without_metadata_records_nulls(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(app_router(state.clone())).unwrap();

    common::create_test_link(&state, "bare", "https://example.com").await;

    server.get("/bare").await.assert_status(StatusCode::FOUND);

    common::wait_for_clicks(&state, "bare", 1).await;

    let rows = state.ledger.recent_by_slug("bare", 100).await.unwrap();
    assert!(rows[0].referrer.is_none());
    assert!(rows[0].country.is_none());
}

#[sqlx::test]
async fn test_every_redirect_is_counted(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(app_router(state.clone())).unwrap();

    common::create_test_link(&state, "popular", "https://example.com").await;

    for _ in 0..5 {
        server.get("/popular").await.assert_status(StatusCode::FOUND);
    }

    common::wait_for_count(&state, "popular", 5).await;
    common::wait_for_clicks(&state, "popular", 5).await;
}

#[sqlx::test]
async fn test_slug_with_invalid_characters_is_404(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server.get("/bad%20slug").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn test_unmatched_paths_fall_back_to_404(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server.get("/a/b/c").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"], "Not Found");
}

#[sqlx::test]
async fn test_method_mismatch_is_404(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(app_router(state.clone())).unwrap();

    common::create_test_link(&state, "getonly", "https://example.com").await;

    let response = server.post("/getonly").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server.get("/api/shorten").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn test_home_page_is_served(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("<!DOCTYPE html>"));
}
