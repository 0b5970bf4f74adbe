//! Repository for the `datasets` table.

use lineage_core::types::DbId;
use sqlx::PgPool;

use crate::models::dataset::{CreateDataset, Dataset};
use crate::models::DEFAULT_STATUS;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, size, status, content_id, uploaded_at";

/// Provides CRUD operations for datasets.
pub struct DatasetRepo;

impl DatasetRepo {
    /// Insert a new dataset, returning the created row.
    ///
    /// `id` and `uploaded_at` are assigned by the database; a missing
    /// status falls back to the creation default.
    pub async fn create(pool: &PgPool, input: &CreateDataset) -> Result<Dataset, sqlx::Error> {
        let query = format!(
            "INSERT INTO datasets (name, description, size, status, content_id)
             VALUES ($1, $2, $3, COALESCE($4, $5), $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dataset>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.size)
            .bind(&input.status)
            .bind(DEFAULT_STATUS)
            .bind(&input.content_id)
            .fetch_one(pool)
            .await
    }

    /// Find a dataset by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Dataset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM datasets WHERE id = $1");
        sqlx::query_as::<_, Dataset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all datasets in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Dataset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM datasets ORDER BY id");
        sqlx::query_as::<_, Dataset>(&query).fetch_all(pool).await
    }

    /// Set a dataset's status, leaving every other column untouched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Dataset>, sqlx::Error> {
        let query = format!(
            "UPDATE datasets SET status = $2 WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dataset>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }
}
