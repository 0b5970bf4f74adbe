//! Route tree for the `/api/v1` prefix.

pub mod auth;
pub mod dashboard;
pub mod dataset;
pub mod health;
pub mod ipfs;
pub mod lineage;
pub mod model;
pub mod relationship;
pub mod validation;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/login                      login (POST)
///
/// /datasets                        list, create
/// /datasets/{id}                   get
/// /datasets/{id}/status            patch status
///
/// /models                          list, create
/// /models/{id}                     get
///
/// /relationships                   list, create (ref-checked)
/// /relationships/{id}/status       patch status
/// /relationships/dataset/{id}      filter by dataset
/// /relationships/model/{id}        filter by model
///
/// /validate/metadata               dry-run schema check (POST)
///
/// /ipfs/upload                     multipart upload (POST, 500 MB cap)
/// /ipfs/uploads                    account listing (GET)
/// /ipfs/check/{cid}                existence check (GET)
///
/// /lineage/verify                  claim verification (POST)
///
/// /dashboard/summary               aggregate counts (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/datasets", dataset::router())
        .nest("/models", model::router())
        .nest("/relationships", relationship::router())
        .nest("/validate", validation::router())
        .nest("/ipfs", ipfs::router())
        .nest("/lineage", lineage::router())
        .nest("/dashboard", dashboard::router())
}
