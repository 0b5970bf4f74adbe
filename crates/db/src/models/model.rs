//! Model entity (a trained model artifact) and DTOs.

use lineage_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A registered model artifact.
///
/// Models have no status field; verification state lives on the
/// relationship that links a model to its training dataset.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: DbId,
    pub name: String,
    pub description: String,
    /// CID of the pinned model artifact.
    pub content_id: String,
    pub created_at: Timestamp,
}

/// DTO for registering a model.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateModel {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "contentId must not be empty"))]
    pub content_id: String,
}
