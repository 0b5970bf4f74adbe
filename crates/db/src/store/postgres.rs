//! PostgreSQL-backed [`Store`] implementation.
//!
//! A thin adapter over the repository layer; all SQL lives in
//! [`crate::repositories`].

use async_trait::async_trait;
use lineage_core::types::DbId;

use crate::models::dataset::{CreateDataset, Dataset};
use crate::models::model::{CreateModel, Model};
use crate::models::relationship::{CreateRelationship, Relationship};
use crate::models::user::{CreateUser, User};
use crate::repositories::{DatasetRepo, ModelRepo, RelationshipRepo, UserRepo};
use crate::store::{Store, StoreError};
use crate::DbPool;

/// Relational store backed by a connection pool.
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// The underlying pool (for migrations and direct probes).
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(UserRepo::list(&self.pool).await?)
    }

    async fn find_user(&self, id: DbId) -> Result<Option<User>, StoreError> {
        Ok(UserRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(UserRepo::find_by_username(&self.pool, username).await?)
    }

    async fn create_user(&self, input: &CreateUser) -> Result<User, StoreError> {
        Ok(UserRepo::create(&self.pool, input).await?)
    }

    async fn list_datasets(&self) -> Result<Vec<Dataset>, StoreError> {
        Ok(DatasetRepo::list(&self.pool).await?)
    }

    async fn find_dataset(&self, id: DbId) -> Result<Option<Dataset>, StoreError> {
        Ok(DatasetRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_dataset(&self, input: &CreateDataset) -> Result<Dataset, StoreError> {
        Ok(DatasetRepo::create(&self.pool, input).await?)
    }

    async fn update_dataset_status(
        &self,
        id: DbId,
        status: &str,
    ) -> Result<Option<Dataset>, StoreError> {
        Ok(DatasetRepo::update_status(&self.pool, id, status).await?)
    }

    async fn list_models(&self) -> Result<Vec<Model>, StoreError> {
        Ok(ModelRepo::list(&self.pool).await?)
    }

    async fn find_model(&self, id: DbId) -> Result<Option<Model>, StoreError> {
        Ok(ModelRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_model(&self, input: &CreateModel) -> Result<Model, StoreError> {
        Ok(ModelRepo::create(&self.pool, input).await?)
    }

    async fn list_relationships(&self) -> Result<Vec<Relationship>, StoreError> {
        Ok(RelationshipRepo::list(&self.pool).await?)
    }

    async fn find_relationship(&self, id: DbId) -> Result<Option<Relationship>, StoreError> {
        Ok(RelationshipRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_relationships_by_dataset(
        &self,
        dataset_id: DbId,
    ) -> Result<Vec<Relationship>, StoreError> {
        Ok(RelationshipRepo::list_by_dataset(&self.pool, dataset_id).await?)
    }

    async fn list_relationships_by_model(
        &self,
        model_id: DbId,
    ) -> Result<Vec<Relationship>, StoreError> {
        Ok(RelationshipRepo::list_by_model(&self.pool, model_id).await?)
    }

    async fn create_relationship(
        &self,
        input: &CreateRelationship,
    ) -> Result<Relationship, StoreError> {
        Ok(RelationshipRepo::create(&self.pool, input).await?)
    }

    async fn update_relationship_status(
        &self,
        id: DbId,
        status: &str,
    ) -> Result<Option<Relationship>, StoreError> {
        Ok(RelationshipRepo::update_status(&self.pool, id, status).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
