//! REST client for the pinning service HTTP endpoints.
//!
//! Wraps the service's upload and listing APIs using [`reqwest`]. The
//! upstream contract: `POST /api/v0/add` (multipart) returns
//! `{"data": {"Hash": ...}}`; `GET /api/user/uploads` returns
//! `{"data": {"fileList": [{"cid": ...}, ...]}}` (some deployments
//! name the array `uploads`).

use std::path::PathBuf;

use lineage_core::filesize::format_file_size;
use serde::Deserialize;

/// Default service endpoint, overridable via `PINNING_API_URL`.
const DEFAULT_API_URL: &str = "https://api.pinvault.io";

/// Connection settings for the pinning service.
#[derive(Debug, Clone)]
pub struct PinningConfig {
    /// Base HTTP URL of the service.
    pub api_url: String,
    /// Account API credential sent as a bearer token.
    pub token: String,
}

impl PinningConfig {
    /// Load settings from `PINNING_API_URL` / `PINNING_API_TOKEN`.
    ///
    /// Returns `None` when the token is unset; callers treat that as
    /// "pinning unavailable" rather than an error, so the rest of the
    /// API keeps working without a credential.
    pub fn from_env() -> Option<Self> {
        let token = std::env::var("PINNING_API_TOKEN").ok()?;
        let api_url =
            std::env::var("PINNING_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Some(Self { api_url, token })
    }
}

/// One local file staged for upload.
///
/// `size` is the declared byte count used for the human-readable
/// total; the file content is not re-measured or verified.
#[derive(Debug, Clone)]
pub struct FilePart {
    pub file_name: String,
    pub path: PathBuf,
    pub size: u64,
}

/// Result of a successful upload.
#[derive(Debug, Clone)]
pub struct PinReceipt {
    /// CID assigned by the service.
    pub content_id: String,
    /// Total declared size rendered for display (e.g. `"1.5 GB"`).
    pub display_size: String,
}

/// Errors from the pinning service layer.
#[derive(Debug, thiserror::Error)]
pub enum PinningError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Pinning service error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A response or metadata blob failed to (de)serialize.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A staged file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// -- Upstream response shapes --

#[derive(Debug, Deserialize)]
struct UploadResponse {
    data: PinnedEntry,
}

#[derive(Debug, Deserialize)]
struct PinnedEntry {
    #[serde(rename = "Hash")]
    hash: String,
}

#[derive(Debug, Deserialize)]
struct UploadsResponse {
    data: UploadListing,
}

#[derive(Debug, Deserialize)]
struct UploadListing {
    #[serde(rename = "fileList", alias = "uploads", default)]
    files: Vec<UploadRecord>,
}

#[derive(Debug, Deserialize)]
struct UploadRecord {
    cid: String,
}

/// HTTP client for one pinning service account.
pub struct PinningClient {
    client: reqwest::Client,
    api_url: String,
    token: String,
}

impl PinningClient {
    /// Create a new client from connection settings.
    pub fn new(config: PinningConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url,
            token: config.token,
        }
    }

    /// Upload files plus an optional metadata blob, returning the CID
    /// and a display-ready size.
    ///
    /// The metadata is serialized to a `metadata.json` attachment and
    /// submitted alongside the caller's files in one request. The
    /// reported size is the sum of declared file sizes plus the
    /// metadata bytes -- computed client-side, not content-verified.
    pub async fn upload(
        &self,
        files: &[FilePart],
        metadata: Option<&serde_json::Value>,
    ) -> Result<PinReceipt, PinningError> {
        let mut form = reqwest::multipart::Form::new();
        let mut total_bytes: u64 = files.iter().map(|f| f.size).sum();

        if let Some(metadata) = metadata {
            let bytes = serde_json::to_vec(metadata)?;
            total_bytes += bytes.len() as u64;
            let part = reqwest::multipart::Part::bytes(bytes)
                .file_name("metadata.json")
                .mime_str("application/json")?;
            form = form.part("file", part);
        }

        for file in files {
            let bytes = tokio::fs::read(&file.path).await?;
            let part = reqwest::multipart::Part::bytes(bytes).file_name(file.file_name.clone());
            form = form.part("file", part);
        }

        let response = self
            .client
            .post(format!("{}/api/v0/add", self.api_url))
            .bearer_auth(&self.token)
            .multipart(form)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        let parsed: UploadResponse = response.json().await?;

        tracing::info!(
            content_id = %parsed.data.hash,
            files = files.len(),
            total_bytes,
            "Pinned upload"
        );

        Ok(PinReceipt {
            content_id: parsed.data.hash,
            display_size: format_file_size(total_bytes),
        })
    }

    /// Fetch the account's upload listing as the raw upstream payload.
    pub async fn get_uploads(&self) -> Result<serde_json::Value, PinningError> {
        let response = self
            .client
            .get(format!("{}/api/user/uploads", self.api_url))
            .bearer_auth(&self.token)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Whether a CID is present among the account's uploads.
    ///
    /// Membership is decided by exact identifier match over the full
    /// listing -- a linear scan with no pagination, so cost grows with
    /// account history. Not suitable for high-frequency polling.
    pub async fn exists(&self, cid: &str) -> Result<bool, PinningError> {
        let raw = self.get_uploads().await?;
        let listing: UploadsResponse = serde_json::from_value(raw)?;
        Ok(listing.data.files.iter().any(|f| f.cid == cid))
    }

    /// Map non-2xx responses to [`PinningError::Api`].
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, PinningError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(PinningError::Api {
            status: status.as_u16(),
            body,
        })
    }
}
