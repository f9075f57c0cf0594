//! Repository for the `categories` table.

use family_budget_core::category::CategoryType;
use family_budget_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, CategoryChanges, NewCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, type, color, description, created_at, updated_at";

/// Provides CRUD operations for categories.
///
/// Every read and write ignores soft-deleted rows.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, type, color, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(input.category_type.as_str())
            .bind(&input.color)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a category by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM categories WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all categories in insertion order. Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM categories WHERE deleted_at IS NULL ORDER BY id");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Update a category. Only `Some` fields in `changes` are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        changes: &CategoryChanges,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET
                name = COALESCE($2, name),
                type = COALESCE($3, type),
                color = COALESCE($4, color),
                description = COALESCE($5, description)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&changes.name)
            .bind(changes.category_type.map(CategoryType::as_str))
            .bind(&changes.color)
            .bind(&changes.description)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a category by ID. Returns `true` if a row was marked deleted.
    ///
    /// An unknown ID and an already-deleted ID both return `false`.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE categories SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
