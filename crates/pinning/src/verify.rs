//! Existence-only lineage verification.
//!
//! A claim passes when every CID it names resolves on the pinning
//! service. Presence is the only check performed; nothing ties the
//! model artifact's content to the dataset it claims to derive from,
//! so a passing claim is an attestation of availability, not a proof
//! of provenance.

use async_trait::async_trait;
use lineage_core::lineage::LineageClaim;
use serde::Serialize;

use crate::client::{PinningClient, PinningError};

/// Answers "is this CID present?" -- the seam that lets tests swap in
/// a controlled backend for the real service.
#[async_trait]
pub trait ContentIndex: Send + Sync {
    async fn exists(&self, cid: &str) -> Result<bool, PinningError>;
}

#[async_trait]
impl ContentIndex for PinningClient {
    async fn exists(&self, cid: &str) -> Result<bool, PinningError> {
        PinningClient::exists(self, cid).await
    }
}

/// Outcome of one CID lookup within a claim.
#[derive(Debug, Clone, Serialize)]
pub struct CidCheck {
    /// Which leg of the claim this was: `dataset`, `processing`, `model`.
    pub role: &'static str,
    pub cid: String,
    pub exists: bool,
}

/// Verification result for a whole claim.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineageReport {
    pub verified: bool,
    /// Lookups performed, in order; stops at the first missing CID.
    pub checked: Vec<CidCheck>,
}

/// Check each CID named by the claim, in order: dataset, optional
/// processing step, model. Verified only when all present identifiers
/// resolve; the first miss short-circuits.
pub async fn verify_lineage<I>(
    index: &I,
    claim: &LineageClaim,
) -> Result<LineageReport, PinningError>
where
    I: ContentIndex + ?Sized,
{
    let mut checked = Vec::new();

    for (role, cid) in claim.cids() {
        let exists = index.exists(cid).await?;
        checked.push(CidCheck {
            role,
            cid: cid.to_string(),
            exists,
        });

        if !exists {
            tracing::warn!(role, cid, "Lineage check failed: CID not found on pinning service");
            return Ok(LineageReport {
                verified: false,
                checked,
            });
        }
    }

    Ok(LineageReport {
        verified: true,
        checked,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    /// Fake backend with a controlled set of present CIDs.
    struct FakeIndex {
        present: HashSet<String>,
    }

    impl FakeIndex {
        fn with(cids: &[&str]) -> Self {
            Self {
                present: cids.iter().map(|c| c.to_string()).collect(),
            }
        }
    }

    #[async_trait]
    impl ContentIndex for FakeIndex {
        async fn exists(&self, cid: &str) -> Result<bool, PinningError> {
            Ok(self.present.contains(cid))
        }
    }

    fn claim(processing: Option<&str>) -> LineageClaim {
        LineageClaim {
            dataset_cid: "cidDataset".into(),
            processing_cid: processing.map(|c| c.to_string()),
            model_cid: "cidModel".into(),
        }
    }

    #[tokio::test]
    async fn verified_when_dataset_and_model_exist_without_processing() {
        let index = FakeIndex::with(&["cidDataset", "cidModel"]);
        let report = verify_lineage(&index, &claim(None)).await.unwrap();

        assert!(report.verified);
        assert_eq!(report.checked.len(), 2);
    }

    #[tokio::test]
    async fn not_verified_when_model_is_missing() {
        let index = FakeIndex::with(&["cidDataset"]);
        let report = verify_lineage(&index, &claim(None)).await.unwrap();

        assert!(!report.verified);
        let model_check = report.checked.last().unwrap();
        assert_eq!(model_check.role, "model");
        assert!(!model_check.exists);
    }

    #[tokio::test]
    async fn missing_dataset_short_circuits_before_model() {
        let index = FakeIndex::with(&["cidModel"]);
        let report = verify_lineage(&index, &claim(None)).await.unwrap();

        assert!(!report.verified);
        // Only the dataset was looked up.
        assert_eq!(report.checked.len(), 1);
        assert_eq!(report.checked[0].role, "dataset");
    }

    #[tokio::test]
    async fn processing_step_participates_when_present() {
        let all = FakeIndex::with(&["cidDataset", "cidProc", "cidModel"]);
        let report = verify_lineage(&all, &claim(Some("cidProc"))).await.unwrap();
        assert!(report.verified);
        assert_eq!(report.checked.len(), 3);

        let missing_proc = FakeIndex::with(&["cidDataset", "cidModel"]);
        let report = verify_lineage(&missing_proc, &claim(Some("cidProc")))
            .await
            .unwrap();
        assert!(!report.verified);
        assert_eq!(report.checked.len(), 2);
        assert_eq!(report.checked[1].role, "processing");
    }
}
