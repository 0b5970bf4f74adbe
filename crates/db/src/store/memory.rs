//! In-memory [`Store`] implementation.
//!
//! Entities live in `BTreeMap`s keyed by id, so iteration order is
//! insertion order and ids stay sorted for free. Each entity kind has
//! its own monotonic counter; counters and maps sit behind a single
//! `RwLock`, so an id can never be observed before the record that
//! owns it. Ids start at 1 and are never reused.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use lineage_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::dataset::{CreateDataset, Dataset};
use crate::models::model::{CreateModel, Model};
use crate::models::relationship::{CreateRelationship, Relationship};
use crate::models::user::{CreateUser, User};
use crate::models::DEFAULT_STATUS;
use crate::store::{Store, StoreError};

/// Map-backed store used for demos and tests.
#[derive(Default)]
pub struct MemStore {
    inner: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    users: BTreeMap<DbId, User>,
    next_user_id: DbId,
    datasets: BTreeMap<DbId, Dataset>,
    next_dataset_id: DbId,
    models: BTreeMap<DbId, Model>,
    next_model_id: DbId,
    relationships: BTreeMap<DbId, Relationship>,
    next_relationship_id: DbId,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemStore {
    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.inner.read().await.users.values().cloned().collect())
    }

    async fn find_user(&self, id: DbId) -> Result<Option<User>, StoreError> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let tables = self.inner.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_user(&self, input: &CreateUser) -> Result<User, StoreError> {
        let mut tables = self.inner.write().await;
        tables.next_user_id += 1;
        let user = User {
            id: tables.next_user_id,
            username: input.username.clone(),
            password_hash: input.password_hash.clone(),
            created_at: Utc::now(),
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn list_datasets(&self) -> Result<Vec<Dataset>, StoreError> {
        Ok(self.inner.read().await.datasets.values().cloned().collect())
    }

    async fn find_dataset(&self, id: DbId) -> Result<Option<Dataset>, StoreError> {
        Ok(self.inner.read().await.datasets.get(&id).cloned())
    }

    async fn create_dataset(&self, input: &CreateDataset) -> Result<Dataset, StoreError> {
        let mut tables = self.inner.write().await;
        tables.next_dataset_id += 1;
        let dataset = Dataset {
            id: tables.next_dataset_id,
            name: input.name.clone(),
            description: input.description.clone(),
            size: input.size.clone(),
            status: input
                .status
                .clone()
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            content_id: input.content_id.clone(),
            uploaded_at: Utc::now(),
        };
        tables.datasets.insert(dataset.id, dataset.clone());
        Ok(dataset)
    }

    async fn update_dataset_status(
        &self,
        id: DbId,
        status: &str,
    ) -> Result<Option<Dataset>, StoreError> {
        let mut tables = self.inner.write().await;
        Ok(tables.datasets.get_mut(&id).map(|dataset| {
            dataset.status = status.to_string();
            dataset.clone()
        }))
    }

    async fn list_models(&self) -> Result<Vec<Model>, StoreError> {
        Ok(self.inner.read().await.models.values().cloned().collect())
    }

    async fn find_model(&self, id: DbId) -> Result<Option<Model>, StoreError> {
        Ok(self.inner.read().await.models.get(&id).cloned())
    }

    async fn create_model(&self, input: &CreateModel) -> Result<Model, StoreError> {
        let mut tables = self.inner.write().await;
        tables.next_model_id += 1;
        let model = Model {
            id: tables.next_model_id,
            name: input.name.clone(),
            description: input.description.clone(),
            content_id: input.content_id.clone(),
            created_at: Utc::now(),
        };
        tables.models.insert(model.id, model.clone());
        Ok(model)
    }

    async fn list_relationships(&self) -> Result<Vec<Relationship>, StoreError> {
        Ok(self
            .inner
            .read()
            .await
            .relationships
            .values()
            .cloned()
            .collect())
    }

    async fn find_relationship(&self, id: DbId) -> Result<Option<Relationship>, StoreError> {
        Ok(self.inner.read().await.relationships.get(&id).cloned())
    }

    async fn list_relationships_by_dataset(
        &self,
        dataset_id: DbId,
    ) -> Result<Vec<Relationship>, StoreError> {
        let tables = self.inner.read().await;
        Ok(tables
            .relationships
            .values()
            .filter(|r| r.dataset_id == dataset_id)
            .cloned()
            .collect())
    }

    async fn list_relationships_by_model(
        &self,
        model_id: DbId,
    ) -> Result<Vec<Relationship>, StoreError> {
        let tables = self.inner.read().await;
        Ok(tables
            .relationships
            .values()
            .filter(|r| r.model_id == model_id)
            .cloned()
            .collect())
    }

    async fn create_relationship(
        &self,
        input: &CreateRelationship,
    ) -> Result<Relationship, StoreError> {
        let mut tables = self.inner.write().await;
        tables.next_relationship_id += 1;
        let relationship = Relationship {
            id: tables.next_relationship_id,
            dataset_id: input.dataset_id,
            model_id: input.model_id,
            status: input
                .status
                .clone()
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            usage_date: Utc::now(),
        };
        tables
            .relationships
            .insert(relationship.id, relationship.clone());
        Ok(relationship)
    }

    async fn update_relationship_status(
        &self,
        id: DbId,
        status: &str,
    ) -> Result<Option<Relationship>, StoreError> {
        let mut tables = self.inner.write().await;
        Ok(tables.relationships.get_mut(&id).map(|relationship| {
            relationship.status = status.to_string();
            relationship.clone()
        }))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
