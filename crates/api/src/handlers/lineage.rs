//! Handler for lineage claim verification.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use lineage_core::lineage::LineageClaim;
use lineage_pinning::{verify_lineage, LineageReport};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/lineage/verify
///
/// Checks that every CID named by the claim is present on the pinning
/// service. This attests availability only; it does not prove the
/// model's content derives from the dataset's.
pub async fn verify(
    State(state): State<AppState>,
    body: Result<Json<LineageClaim>, JsonRejection>,
) -> AppResult<Json<LineageReport>> {
    let Json(claim) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    claim.validate()?;

    let client = state.pinning()?;
    let report = verify_lineage(client.as_ref(), &claim).await?;

    tracing::info!(
        verified = report.verified,
        checks = report.checked.len(),
        "Lineage claim checked"
    );
    Ok(Json(report))
}
