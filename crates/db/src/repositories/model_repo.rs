//! Repository for the `models` table.

use lineage_core::types::DbId;
use sqlx::PgPool;

use crate::models::model::{CreateModel, Model};

const COLUMNS: &str = "id, name, description, content_id, created_at";

/// Provides CRUD operations for model artifacts.
pub struct ModelRepo;

impl ModelRepo {
    /// Insert a new model, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateModel) -> Result<Model, sqlx::Error> {
        let query = format!(
            "INSERT INTO models (name, description, content_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Model>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.content_id)
            .fetch_one(pool)
            .await
    }

    /// Find a model by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Model>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM models WHERE id = $1");
        sqlx::query_as::<_, Model>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all models in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Model>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM models ORDER BY id");
        sqlx::query_as::<_, Model>(&query).fetch_all(pool).await
    }
}
