//! Lineage claim types.
//!
//! A claim names the content identifiers involved in one training
//! relationship: the dataset, an optional intermediate processing
//! step, and the resulting model artifact.

use serde::Deserialize;
use validator::Validate;

/// A claimed training relationship, expressed as pinned content IDs.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LineageClaim {
    #[validate(length(min = 1, message = "datasetCid must not be empty"))]
    pub dataset_cid: String,
    /// CID of an intermediate processing artifact, when one exists.
    pub processing_cid: Option<String>,
    #[validate(length(min = 1, message = "modelCid must not be empty"))]
    pub model_cid: String,
}

impl LineageClaim {
    /// The claim's CIDs in verification order: dataset, then the
    /// processing step when present, then the model.
    pub fn cids(&self) -> Vec<(&'static str, &str)> {
        let mut out = vec![("dataset", self.dataset_cid.as_str())];
        if let Some(cid) = &self.processing_cid {
            out.push(("processing", cid.as_str()));
        }
        out.push(("model", self.model_cid.as_str()));
        out
    }
}
