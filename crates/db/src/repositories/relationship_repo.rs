//! Repository for the `relationships` table.

use lineage_core::types::DbId;
use sqlx::PgPool;

use crate::models::relationship::{CreateRelationship, Relationship};
use crate::models::DEFAULT_STATUS;

const COLUMNS: &str = "id, dataset_id, model_id, status, usage_date";

/// Provides CRUD operations for dataset<->model relationships.
pub struct RelationshipRepo;

impl RelationshipRepo {
    /// Insert a new relationship, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRelationship,
    ) -> Result<Relationship, sqlx::Error> {
        let query = format!(
            "INSERT INTO relationships (dataset_id, model_id, status)
             VALUES ($1, $2, COALESCE($3, $4))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Relationship>(&query)
            .bind(input.dataset_id)
            .bind(input.model_id)
            .bind(&input.status)
            .bind(DEFAULT_STATUS)
            .fetch_one(pool)
            .await
    }

    /// Find a relationship by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Relationship>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM relationships WHERE id = $1");
        sqlx::query_as::<_, Relationship>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all relationships in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Relationship>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM relationships ORDER BY id");
        sqlx::query_as::<_, Relationship>(&query)
            .fetch_all(pool)
            .await
    }

    /// List relationships referencing a dataset, in insertion order.
    pub async fn list_by_dataset(
        pool: &PgPool,
        dataset_id: DbId,
    ) -> Result<Vec<Relationship>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM relationships WHERE dataset_id = $1 ORDER BY id");
        sqlx::query_as::<_, Relationship>(&query)
            .bind(dataset_id)
            .fetch_all(pool)
            .await
    }

    /// List relationships referencing a model, in insertion order.
    pub async fn list_by_model(
        pool: &PgPool,
        model_id: DbId,
    ) -> Result<Vec<Relationship>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM relationships WHERE model_id = $1 ORDER BY id");
        sqlx::query_as::<_, Relationship>(&query)
            .bind(model_id)
            .fetch_all(pool)
            .await
    }

    /// Set a relationship's status, leaving every other column untouched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Relationship>, sqlx::Error> {
        let query = format!(
            "UPDATE relationships SET status = $2 WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Relationship>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }
}
