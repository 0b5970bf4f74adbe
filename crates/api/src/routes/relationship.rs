//! Route definitions for `/relationships`.
//!
//! ```text
//! GET    /                 -> list
//! POST   /                 -> create (dataset/model refs pre-checked)
//! PATCH  /{id}/status      -> update_status
//! GET    /dataset/{id}     -> list_by_dataset
//! GET    /model/{id}       -> list_by_model
//! ```

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::relationship;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(relationship::list).post(relationship::create))
        .route("/{id}/status", patch(relationship::update_status))
        .route("/dataset/{id}", get(relationship::list_by_dataset))
        .route("/model/{id}", get(relationship::list_by_model))
}
