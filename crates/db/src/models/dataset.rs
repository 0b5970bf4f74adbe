//! Dataset entity model and DTOs.

use lineage_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A registered training dataset.
///
/// `uploaded_at` is set once by the persistence layer at creation and
/// is immutable afterwards; `status` is the only mutable field.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub id: DbId,
    pub name: String,
    pub description: String,
    /// Human-readable size string (e.g. `"1.5 GB"`), as reported by
    /// the upload path.
    pub size: String,
    pub status: String,
    /// CID of the pinned dataset payload.
    pub content_id: String,
    pub uploaded_at: Timestamp,
}

/// DTO for registering a dataset.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateDataset {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "size must not be empty"))]
    pub size: String,
    #[validate(length(min = 1, message = "contentId must not be empty"))]
    pub content_id: String,
    /// Defaults to `"pending"` when omitted.
    pub status: Option<String>,
}
