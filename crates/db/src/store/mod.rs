//! The store capability set and its two interchangeable backends.
//!
//! [`Store`] is the seam between the HTTP layer and persistence:
//! [`postgres::PgStore`] maps entities to relational rows, while
//! [`memory::MemStore`] keeps them in insertion-ordered maps with
//! monotonic counters. Which one backs the server is decided once at
//! startup and passed into the HTTP layer by reference -- there is no
//! module-level singleton.
//!
//! Absence is always `None`, never an error; [`StoreError`] is
//! reserved for unexpected backend failures.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use lineage_core::types::DbId;

use crate::models::dataset::{CreateDataset, Dataset};
use crate::models::model::{CreateModel, Model};
use crate::models::relationship::{CreateRelationship, Relationship};
use crate::models::user::{CreateUser, User};

/// An unexpected persistence backend failure.
///
/// The in-memory backend never produces one.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// The persistence capability set shared by both backends.
///
/// Every entity kind supports list (insertion order), get-by-id, and
/// create (which assigns the sequential id and the server timestamp).
/// Datasets and relationships additionally support a status-only
/// update; no entity supports deletion.
#[async_trait]
pub trait Store: Send + Sync {
    // -- Users --

    async fn list_users(&self) -> Result<Vec<User>, StoreError>;
    async fn find_user(&self, id: DbId) -> Result<Option<User>, StoreError>;
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;
    async fn create_user(&self, input: &CreateUser) -> Result<User, StoreError>;

    // -- Datasets --

    async fn list_datasets(&self) -> Result<Vec<Dataset>, StoreError>;
    async fn find_dataset(&self, id: DbId) -> Result<Option<Dataset>, StoreError>;
    async fn create_dataset(&self, input: &CreateDataset) -> Result<Dataset, StoreError>;
    async fn update_dataset_status(
        &self,
        id: DbId,
        status: &str,
    ) -> Result<Option<Dataset>, StoreError>;

    // -- Models --

    async fn list_models(&self) -> Result<Vec<Model>, StoreError>;
    async fn find_model(&self, id: DbId) -> Result<Option<Model>, StoreError>;
    async fn create_model(&self, input: &CreateModel) -> Result<Model, StoreError>;

    // -- Relationships --

    async fn list_relationships(&self) -> Result<Vec<Relationship>, StoreError>;
    async fn find_relationship(&self, id: DbId) -> Result<Option<Relationship>, StoreError>;
    async fn list_relationships_by_dataset(
        &self,
        dataset_id: DbId,
    ) -> Result<Vec<Relationship>, StoreError>;
    async fn list_relationships_by_model(
        &self,
        model_id: DbId,
    ) -> Result<Vec<Relationship>, StoreError>;
    async fn create_relationship(
        &self,
        input: &CreateRelationship,
    ) -> Result<Relationship, StoreError>;
    async fn update_relationship_status(
        &self,
        id: DbId,
        status: &str,
    ) -> Result<Option<Relationship>, StoreError>;

    // -- Infrastructure --

    /// Liveness probe for the health endpoint.
    async fn health_check(&self) -> Result<(), StoreError>;
}
