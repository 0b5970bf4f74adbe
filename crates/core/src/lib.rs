//! Shared domain types for the lineage tracker.
//!
//! Everything here is backend-agnostic: the ID/timestamp aliases, the
//! domain error enum, the file-size display helper, lineage claim
//! types, and the dataset metadata schema.

pub mod error;
pub mod filesize;
pub mod lineage;
pub mod metadata;
pub mod types;
