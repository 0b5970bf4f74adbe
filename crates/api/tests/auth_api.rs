//! Integration tests for the login endpoint.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, post_json};
use lineage_api::bootstrap;
use lineage_db::store::memory::MemStore;

async fn seeded_store() -> Arc<MemStore> {
    let store = Arc::new(MemStore::new());
    bootstrap::seed_demo_user(store.as_ref(), "demo1234")
        .await
        .expect("seeding should succeed");
    store
}

#[tokio::test]
async fn login_with_correct_credentials_returns_user() {
    let store = seeded_store().await;
    let app = common::build_test_app_with(store);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({"username": "demo", "password": "demo1234"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["username"], "demo");
    assert!(json["id"].is_number());
    // The hash must never leak into responses.
    assert!(json.get("passwordHash").is_none());
    assert!(json.get("password_hash").is_none());
}

#[tokio::test]
async fn login_with_wrong_password_returns_401() {
    let store = seeded_store().await;
    let app = common::build_test_app_with(store);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({"username": "demo", "password": "nope"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_with_unknown_user_returns_401() {
    let app = common::build_test_app();

    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({"username": "ghost", "password": "whatever"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn seeding_twice_does_not_duplicate_the_demo_user() {
    let store = seeded_store().await;
    bootstrap::seed_demo_user(store.as_ref(), "demo1234")
        .await
        .expect("second seeding should be a no-op");

    use lineage_db::store::Store;
    let users = store.list_users().await.unwrap();
    assert_eq!(users.len(), 1);
}
