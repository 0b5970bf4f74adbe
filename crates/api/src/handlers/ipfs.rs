//! Handlers for the `/ipfs` resource: upload, account listing, and
//! per-CID existence check.
//!
//! Uploads stream multipart fields to temporary local files before
//! forwarding to the pinning service; the temp directory is removed on
//! success and failure alike (best-effort -- a failed removal is
//! logged, never escalated).

use std::path::Path as FsPath;

use axum::extract::{Multipart, Path, State};
use axum::Json;
use lineage_pinning::{FilePart, PinReceipt, PinningClient};
use serde::Serialize;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Result of `POST /ipfs/upload`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub content_id: String,
    pub display_size: String,
}

/// Result of `GET /ipfs/check/{cid}`.
#[derive(Debug, Serialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

/// POST /api/v1/ipfs/upload
///
/// Multipart form: any number of file fields plus an optional
/// `metadata` field holding a JSON blob. Requires the pinning
/// credential; without one the request fails before any bytes are
/// forwarded upstream.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResult>> {
    let client = state.pinning()?;

    let tmp_dir = std::env::temp_dir().join(format!("lineage-upload-{}", uuid::Uuid::new_v4()));
    tokio::fs::create_dir_all(&tmp_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create temp dir: {e}")))?;

    let outcome = receive_and_pin(client, &tmp_dir, &mut multipart).await;

    // Cleanup runs on both paths before the outcome is inspected.
    if let Err(e) = tokio::fs::remove_dir_all(&tmp_dir).await {
        tracing::warn!(
            dir = %tmp_dir.display(),
            error = %e,
            "Failed to remove temporary upload files"
        );
    }

    let receipt = outcome?;
    Ok(Json(UploadResult {
        content_id: receipt.content_id,
        display_size: receipt.display_size,
    }))
}

/// Drain the multipart stream to disk, then hand the staged files to
/// the pinning client.
async fn receive_and_pin(
    client: &PinningClient,
    tmp_dir: &FsPath,
    multipart: &mut Multipart,
) -> AppResult<PinReceipt> {
    let mut files: Vec<FilePart> = Vec::new();
    let mut metadata: Option<serde_json::Value> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name == "metadata" {
            let text = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            let value: serde_json::Value = serde_json::from_str(&text)
                .map_err(|e| AppError::BadRequest(format!("Invalid metadata JSON: {e}")))?;
            metadata = Some(value);
            continue;
        }

        // Everything else is treated as a file field.
        let file_name = field.file_name().unwrap_or("upload.bin").to_string();
        let path = tmp_dir.join(format!("{}-{file_name}", files.len()));
        let mut out = tokio::fs::File::create(&path)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to stage upload: {e}")))?;

        let mut size: u64 = 0;
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            size += chunk.len() as u64;
            out.write_all(&chunk)
                .await
                .map_err(|e| AppError::InternalError(format!("Failed to stage upload: {e}")))?;
        }
        out.flush()
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to stage upload: {e}")))?;

        files.push(FilePart {
            file_name,
            path,
            size,
        });
    }

    if files.is_empty() {
        return Err(AppError::BadRequest("No files provided".into()));
    }

    let receipt = client.upload(&files, metadata.as_ref()).await?;

    tracing::info!(
        content_id = %receipt.content_id,
        files = files.len(),
        "Upload pinned"
    );
    Ok(receipt)
}

/// GET /api/v1/ipfs/uploads
///
/// Passes the upstream account listing through unchanged.
pub async fn list_uploads(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let client = state.pinning()?;
    let listing = client.get_uploads().await?;
    Ok(Json(listing))
}

/// GET /api/v1/ipfs/check/{cid}
pub async fn check(
    State(state): State<AppState>,
    Path(cid): Path<String>,
) -> AppResult<Json<ExistsResponse>> {
    let client = state.pinning()?;
    let exists = client.exists(&cid).await?;
    Ok(Json(ExistsResponse { exists }))
}
