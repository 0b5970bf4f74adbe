//! Request handlers, one module per resource.

pub mod auth;
pub mod dashboard;
pub mod dataset;
pub mod ipfs;
pub mod lineage;
pub mod model;
pub mod relationship;
pub mod validation;
