//! Route definitions for `/validate`.

use axum::routing::post;
use axum::Router;

use crate::handlers::validation;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/metadata", post(validation::validate_metadata))
}
