//! HTTP-level integration tests for the dataset and model endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the
//! router without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, patch_json, post_json};

fn dataset_body() -> serde_json::Value {
    serde_json::json!({
        "name": "A",
        "description": "d",
        "size": "1 GB",
        "contentId": "cidA"
    })
}

// ---------------------------------------------------------------------------
// Dataset CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_dataset_returns_201_with_defaults() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/datasets", dataset_body()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "A");
    assert_eq!(json["id"], 1);
    // Status defaults and the timestamp is server-assigned.
    assert_eq!(json["status"], "pending");
    assert!(json["uploadedAt"].is_string());
}

#[tokio::test]
async fn dataset_ids_increase_monotonically() {
    let app = common::build_test_app();

    let first = body_json(post_json(app.clone(), "/api/v1/datasets", dataset_body()).await).await;
    let second = body_json(post_json(app.clone(), "/api/v1/datasets", dataset_body()).await).await;
    let third = body_json(post_json(app, "/api/v1/datasets", dataset_body()).await).await;

    assert_eq!(first["id"], 1);
    assert_eq!(second["id"], 2);
    assert_eq!(third["id"], 3);
}

#[tokio::test]
async fn get_dataset_by_id() {
    let app = common::build_test_app();
    let created = body_json(post_json(app.clone(), "/api/v1/datasets", dataset_body()).await).await;
    let id = created["id"].as_i64().unwrap();

    let response = get(app, &format!("/api/v1/datasets/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "A");
    assert_eq!(json["contentId"], "cidA");
}

#[tokio::test]
async fn get_nonexistent_dataset_returns_404() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/datasets/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_datasets_in_insertion_order() {
    let app = common::build_test_app();

    for name in ["first", "second"] {
        let mut body = dataset_body();
        body["name"] = serde_json::json!(name);
        post_json(app.clone(), "/api/v1/datasets", body).await;
    }

    let response = get(app, "/api/v1/datasets").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[tokio::test]
async fn create_dataset_with_missing_field_returns_400() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/datasets",
        serde_json::json!({"name": "A", "description": "d"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_dataset_with_empty_name_returns_field_errors() {
    let app = common::build_test_app();
    let mut body = dataset_body();
    body["name"] = serde_json::json!("");

    let response = post_json(app, "/api/v1/datasets", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["fields"]["name"].is_array());
}

// ---------------------------------------------------------------------------
// Dataset status updates
// ---------------------------------------------------------------------------

#[tokio::test]
async fn patch_dataset_status_changes_only_status() {
    let app = common::build_test_app();
    let before = body_json(post_json(app.clone(), "/api/v1/datasets", dataset_body()).await).await;
    let id = before["id"].as_i64().unwrap();

    let response = patch_json(
        app,
        &format!("/api/v1/datasets/{id}/status"),
        serde_json::json!({"status": "verified"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let mut after = body_json(response).await;
    assert_eq!(after["status"], "verified");

    // Every other field is identical to the created record.
    after["status"] = before["status"].clone();
    assert_eq!(after, before);
}

#[tokio::test]
async fn patch_status_on_nonexistent_dataset_returns_404() {
    let app = common::build_test_app();
    let response = patch_json(
        app,
        "/api/v1/datasets/999/status",
        serde_json::json!({"status": "verified"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_status_without_status_field_returns_400() {
    let app = common::build_test_app();
    let created = body_json(post_json(app.clone(), "/api/v1/datasets", dataset_body()).await).await;
    let id = created["id"].as_i64().unwrap();

    let response = patch_json(
        app.clone(),
        &format!("/api/v1/datasets/{id}/status"),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Non-string status is rejected the same way.
    let response = patch_json(
        app,
        &format!("/api/v1/datasets/{id}/status"),
        serde_json::json!({"status": 42}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Model CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_model_returns_201_with_timestamp() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/models",
        serde_json::json!({"name": "resnet-ft", "description": "fine-tuned", "contentId": "cidM"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert!(json["createdAt"].is_string());
    // Models carry no status field.
    assert!(json.get("status").is_none());
}

#[tokio::test]
async fn get_nonexistent_model_returns_404() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/models/7").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn model_ids_are_independent_of_dataset_ids() {
    let app = common::build_test_app();

    post_json(app.clone(), "/api/v1/datasets", dataset_body()).await;
    post_json(app.clone(), "/api/v1/datasets", dataset_body()).await;

    let model = body_json(
        post_json(
            app,
            "/api/v1/models",
            serde_json::json!({"name": "m", "description": "d", "contentId": "c"}),
        )
        .await,
    )
    .await;
    assert_eq!(model["id"], 1);
}

// ---------------------------------------------------------------------------
// Dashboard summary
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dashboard_summary_reports_counts() {
    let app = common::build_test_app();

    post_json(app.clone(), "/api/v1/datasets", dataset_body()).await;
    post_json(app.clone(), "/api/v1/datasets", dataset_body()).await;
    post_json(
        app.clone(),
        "/api/v1/models",
        serde_json::json!({"name": "m", "description": "d", "contentId": "c"}),
    )
    .await;

    let response = get(app, "/api/v1/dashboard/summary").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["datasets"], 2);
    assert_eq!(json["models"], 1);
    assert_eq!(json["relationships"], 0);
}
