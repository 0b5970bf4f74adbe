//! Handler for the dashboard summary endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Aggregate entity counts shown on the dashboard.
///
/// Purely derived from the three collections; the dashboard owns no
/// state of its own.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub datasets: usize,
    pub models: usize,
    pub relationships: usize,
}

/// GET /api/v1/dashboard/summary
pub async fn summary(State(state): State<AppState>) -> AppResult<Json<DashboardSummary>> {
    let datasets = state.store.list_datasets().await?.len();
    let models = state.store.list_models().await?.len();
    let relationships = state.store.list_relationships().await?.len();

    Ok(Json(DashboardSummary {
        datasets,
        models,
        relationships,
    }))
}
