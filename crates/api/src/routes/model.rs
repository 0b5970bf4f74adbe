//! Route definitions for `/models`.
//!
//! ```text
//! GET    /        -> list
//! POST   /        -> create
//! GET    /{id}    -> get_by_id
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::model;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(model::list).post(model::create))
        .route("/{id}", get(model::get_by_id))
}
