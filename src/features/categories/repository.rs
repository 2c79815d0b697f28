//! Category persistence.
//!
//! `post_count` is always derived with a `LEFT JOIN ... COUNT`, never stored.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{map_db_error, Result};
use crate::features::categories::models::{Category, CategoryWithCount, NewCategory};

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by name
    async fn list_with_counts(&self) -> Result<Vec<CategoryWithCount>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<CategoryWithCount>>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<CategoryWithCount>>;

    /// Insert a row; a taken slug surfaces as `AppError::Conflict`
    async fn insert(&self, category: NewCategory) -> Result<Category>;

    /// Overwrite name and description; `None` when the row is gone
    async fn update(
        &self,
        id: i64,
        name: &str,
        description: Option<&str>,
    ) -> Result<Option<Category>>;

    /// Delete a row; `false` when it did not exist
    ///
    /// A row still referenced by posts surfaces as
    /// `AppError::ReferentialIntegrity`.
    async fn delete(&self, id: i64) -> Result<bool>;

    async fn count(&self) -> Result<i64>;
}

const SELECT_WITH_COUNT: &str = r#"
    SELECT c.id, c.name, c.slug, c.description, c.created_at, c.updated_at,
           COUNT(p.id) AS post_count
    FROM categories c
    LEFT JOIN posts p ON p.category_id = c.id
"#;

/// Postgres-backed category repository
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list_with_counts(&self) -> Result<Vec<CategoryWithCount>> {
        let sql = format!("{} GROUP BY c.id ORDER BY c.name", SELECT_WITH_COUNT);
        sqlx::query_as::<_, CategoryWithCount>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "category"))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CategoryWithCount>> {
        let sql = format!("{} WHERE c.id = $1 GROUP BY c.id", SELECT_WITH_COUNT);
        sqlx::query_as::<_, CategoryWithCount>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "category"))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<CategoryWithCount>> {
        let sql = format!("{} WHERE c.slug = $1 GROUP BY c.id", SELECT_WITH_COUNT);
        sqlx::query_as::<_, CategoryWithCount>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "category"))
    }

    async fn insert(&self, category: NewCategory) -> Result<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, slug, description)
            VALUES ($1, $2, $3)
            RETURNING id, name, slug, description, created_at, updated_at
            "#,
        )
        .bind(&category.name)
        .bind(&category.slug)
        .bind(&category.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "category"))
    }

    async fn update(
        &self,
        id: i64,
        name: &str,
        description: Option<&str>,
    ) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = $2, description = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, slug, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "category"))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "category"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "category"))
    }
}
