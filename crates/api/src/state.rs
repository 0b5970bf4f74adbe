use std::sync::Arc;

use lineage_db::store::Store;
use lineage_pinning::PinningClient;

use crate::config::ServerConfig;
use crate::error::AppError;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Constructed once at startup and cheaply cloneable (everything is
/// behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend selected at startup.
    pub store: Arc<dyn Store>,
    /// Pinning service client; `None` when no credential is configured.
    pub pinning: Option<Arc<PinningClient>>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// The pinning client, or the missing-credential failure every
    /// pinning-dependent endpoint reports before contacting the service.
    pub fn pinning(&self) -> Result<&Arc<PinningClient>, AppError> {
        self.pinning.as_ref().ok_or(AppError::MissingCredential)
    }
}
