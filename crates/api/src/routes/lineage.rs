//! Route definitions for `/lineage`.

use axum::routing::post;
use axum::Router;

use crate::handlers::lineage;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/verify", post(lineage::verify))
}
