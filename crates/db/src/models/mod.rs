//! Entity structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//!
//! Wire fields are camelCase to match the dashboard's JSON contract.

pub mod dataset;
pub mod model;
pub mod relationship;
pub mod user;

use serde::Deserialize;

/// Status assigned to datasets and relationships on creation when the
/// client does not supply one.
pub const DEFAULT_STATUS: &str = "pending";

/// Body of the dedicated `PATCH .../{id}/status` endpoints.
///
/// `status` is an open string; observed values include `"pending"` and
/// `"verified"`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateStatusRequest {
    pub status: String,
}
