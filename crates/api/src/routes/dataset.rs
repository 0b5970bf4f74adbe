//! Route definitions for `/datasets`.
//!
//! ```text
//! GET    /                -> list
//! POST   /                -> create
//! GET    /{id}            -> get_by_id
//! PATCH  /{id}/status     -> update_status
//! ```

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::dataset;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dataset::list).post(dataset::create))
        .route("/{id}", get(dataset::get_by_id))
        .route("/{id}/status", patch(dataset::update_status))
}
