//! Handlers for the `/relationships` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lineage_core::error::CoreError;
use lineage_core::types::DbId;
use lineage_db::models::relationship::{CreateRelationship, Relationship};
use lineage_db::models::UpdateStatusRequest;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/relationships
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Relationship>>> {
    let relationships = state.store.list_relationships().await?;
    Ok(Json(relationships))
}

/// GET /api/v1/relationships/dataset/{id}
pub async fn list_by_dataset(
    State(state): State<AppState>,
    Path(dataset_id): Path<DbId>,
) -> AppResult<Json<Vec<Relationship>>> {
    let relationships = state
        .store
        .list_relationships_by_dataset(dataset_id)
        .await?;
    Ok(Json(relationships))
}

/// GET /api/v1/relationships/model/{id}
pub async fn list_by_model(
    State(state): State<AppState>,
    Path(model_id): Path<DbId>,
) -> AppResult<Json<Vec<Relationship>>> {
    let relationships = state.store.list_relationships_by_model(model_id).await?;
    Ok(Json(relationships))
}

/// POST /api/v1/relationships
///
/// Both referenced entities must exist before the insert. The dataset
/// is checked before the model -- a fixed ordering, so a request where
/// both are missing is reported against the dataset.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateRelationship>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Relationship>)> {
    let Json(input) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    input.validate()?;

    if state.store.find_dataset(input.dataset_id).await?.is_none() {
        return Err(AppError::BadRequest(format!(
            "Dataset with id {} does not exist",
            input.dataset_id
        )));
    }
    if state.store.find_model(input.model_id).await?.is_none() {
        return Err(AppError::BadRequest(format!(
            "Model with id {} does not exist",
            input.model_id
        )));
    }

    let relationship = state.store.create_relationship(&input).await?;

    tracing::info!(
        relationship_id = relationship.id,
        dataset_id = relationship.dataset_id,
        model_id = relationship.model_id,
        "Training relationship recorded"
    );
    Ok((StatusCode::CREATED, Json(relationship)))
}

/// PATCH /api/v1/relationships/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> AppResult<Json<Relationship>> {
    let Json(input) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let relationship = state
        .store
        .update_relationship_status(id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Relationship",
            id,
        }))?;

    Ok(Json(relationship))
}
