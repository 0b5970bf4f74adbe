//! Dataset<->model relationship entity and DTOs.

use lineage_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// "Model M was trained using dataset D" -- the many-to-many join
/// entity between datasets and models.
///
/// `usage_date` is set once by the persistence layer at creation;
/// `status` is the only mutable field.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub id: DbId,
    pub dataset_id: DbId,
    pub model_id: DbId,
    pub status: String,
    pub usage_date: Timestamp,
}

/// DTO for recording a training relationship.
///
/// Referential existence of `dataset_id` and `model_id` is checked at
/// the API boundary (dataset first, then model), not here.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateRelationship {
    #[validate(range(min = 1, message = "datasetId must be a positive id"))]
    pub dataset_id: DbId,
    #[validate(range(min = 1, message = "modelId must be a positive id"))]
    pub model_id: DbId,
    /// Defaults to `"pending"` when omitted.
    pub status: Option<String>,
}
