//! Handlers for the `/models` resource.
//!
//! Models have no status endpoint; verification state lives on the
//! relationship joining a model to its training dataset.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lineage_core::error::CoreError;
use lineage_core::types::DbId;
use lineage_db::models::model::{CreateModel, Model};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/models
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Model>>> {
    let models = state.store.list_models().await?;
    Ok(Json(models))
}

/// GET /api/v1/models/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Model>> {
    let model = state
        .store
        .find_model(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Model", id }))?;
    Ok(Json(model))
}

/// POST /api/v1/models
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateModel>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Model>)> {
    let Json(input) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    input.validate()?;

    let model = state.store.create_model(&input).await?;

    tracing::info!(model_id = model.id, name = %model.name, "Model registered");
    Ok((StatusCode::CREATED, Json(model)))
}
