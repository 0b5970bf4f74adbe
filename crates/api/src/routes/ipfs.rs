//! Route definitions for `/ipfs`.
//!
//! ```text
//! POST   /upload        -> upload (multipart, 500 MB per-request cap)
//! GET    /uploads       -> list_uploads
//! GET    /check/{cid}   -> check
//! ```

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::ipfs;
use crate::state::AppState;

/// Per-request upload cap.
pub const MAX_UPLOAD_BYTES: usize = 500 * 1024 * 1024;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/upload",
            post(ipfs::upload).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/uploads", get(ipfs::list_uploads))
        .route("/check/{cid}", get(ipfs::check))
}
