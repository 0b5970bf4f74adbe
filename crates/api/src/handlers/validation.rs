//! Handler for the dry-run metadata validation endpoint.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use lineage_core::metadata::DatasetMetadata;
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Response for a metadata blob that passed validation.
#[derive(Debug, Serialize)]
pub struct MetadataValid {
    pub valid: bool,
}

/// POST /api/v1/validate/metadata
///
/// Checks a metadata blob against the schema without persisting or
/// uploading anything. Failures come back as 400 with per-field detail.
pub async fn validate_metadata(
    body: Result<Json<DatasetMetadata>, JsonRejection>,
) -> AppResult<Json<MetadataValid>> {
    let Json(metadata) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    metadata.validate()?;

    Ok(Json(MetadataValid { valid: true }))
}
