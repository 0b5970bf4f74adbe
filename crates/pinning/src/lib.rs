//! Client for the external IPFS/Filecoin pinning service, plus the
//! existence-only lineage verifier built on top of it.
//!
//! The service is an opaque collaborator: files go up via a multipart
//! `upload`, and presence is answered by scanning the account's upload
//! listing. Nothing here stores state of its own.

pub mod client;
pub mod verify;

pub use client::{FilePart, PinReceipt, PinningClient, PinningConfig, PinningError};
pub use verify::{verify_lineage, CidCheck, ContentIndex, LineageReport};
