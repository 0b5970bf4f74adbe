//! Dataset metadata schema.
//!
//! This is the descriptive JSON blob bundled alongside uploaded files
//! and checked by the dry-run `/validate/metadata` endpoint. The shape
//! is strict: unknown fields are rejected and every failure is
//! reported per-field.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Top-level dataset metadata.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DatasetMetadata {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    #[validate(nested)]
    pub details: MetadataDetails,
}

/// Nested descriptive fields.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MetadataDetails {
    /// Human-readable size string, e.g. `"1.5 GB"`.
    #[validate(length(min = 1, message = "size must not be empty"))]
    pub size: String,
    pub format: Option<String>,
    pub license: Option<String>,
    pub source_url: Option<String>,
}
