//! Handlers for the `/datasets` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lineage_core::error::CoreError;
use lineage_core::types::DbId;
use lineage_db::models::dataset::{CreateDataset, Dataset};
use lineage_db::models::UpdateStatusRequest;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/datasets
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Dataset>>> {
    let datasets = state.store.list_datasets().await?;
    Ok(Json(datasets))
}

/// GET /api/v1/datasets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Dataset>> {
    let dataset = state
        .store
        .find_dataset(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Dataset",
            id,
        }))?;
    Ok(Json(dataset))
}

/// POST /api/v1/datasets
///
/// The store assigns `id` and `uploadedAt`; a missing status defaults
/// to `"pending"`.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateDataset>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Dataset>)> {
    let Json(input) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    input.validate()?;

    let dataset = state.store.create_dataset(&input).await?;

    tracing::info!(dataset_id = dataset.id, name = %dataset.name, "Dataset registered");
    Ok((StatusCode::CREATED, Json(dataset)))
}

/// PATCH /api/v1/datasets/{id}/status
///
/// Status is the only field mutable after creation.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> AppResult<Json<Dataset>> {
    let Json(input) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let dataset = state
        .store
        .update_dataset_status(id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Dataset",
            id,
        }))?;

    Ok(Json(dataset))
}
