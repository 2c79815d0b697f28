//! Post persistence.
//!
//! Every read joins the owning category so catalog entries carry its name
//! and slug.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::posts::models::{NewPost, Post, PostChanges};

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Every post, newest first
    async fn list_all(&self) -> Result<Vec<Post>>;

    /// Posts filed under one category, newest first
    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Post>>;

    /// One page of posts, newest first, plus the total row count
    async fn list_page(&self, offset: i64, limit: i64) -> Result<(Vec<Post>, i64)>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>>;

    /// Insert a row; a taken slug surfaces as `AppError::Conflict`
    async fn insert(&self, post: NewPost) -> Result<Post>;

    /// `None` when the row is gone
    async fn update(&self, id: i64, changes: PostChanges) -> Result<Option<Post>>;

    /// `false` when the row did not exist
    async fn delete(&self, id: i64) -> Result<bool>;

    async fn count(&self) -> Result<i64>;

    async fn count_without_image(&self) -> Result<i64>;
}

const SELECT_POST: &str = r#"
    SELECT p.id, p.title, p.slug, p.content, p.excerpt, p.featured_image,
           p.category_id, c.name AS category_name, c.slug AS category_slug,
           p.created_at, p.updated_at
    FROM posts p
    JOIN categories c ON c.id = p.category_id
"#;

const ORDER_NEWEST: &str = "ORDER BY p.created_at DESC, p.id DESC";

/// Postgres-backed post repository
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// The only foreign key on a post row is its category
fn missing_category(code: Option<&str>, category_id: i64) -> Option<AppError> {
    // foreign_key_violation
    (code == Some("23503"))
        .then(|| AppError::Validation(format!("Category {} does not exist", category_id)))
}

fn map_post_write_error(e: sqlx::Error, category_id: i64) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if let Some(err) = missing_category(db_err.code().as_deref(), category_id) {
            return err;
        }
    }
    map_db_error(e, "post")
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>> {
        let sql = format!("{} {}", SELECT_POST, ORDER_NEWEST);
        sqlx::query_as::<_, Post>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "post"))
    }

    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Post>> {
        let sql = format!("{} WHERE p.category_id = $1 {}", SELECT_POST, ORDER_NEWEST);
        sqlx::query_as::<_, Post>(&sql)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "post"))
    }

    async fn list_page(&self, offset: i64, limit: i64) -> Result<(Vec<Post>, i64)> {
        let sql = format!("{} {} LIMIT $1 OFFSET $2", SELECT_POST, ORDER_NEWEST);
        let posts = sqlx::query_as::<_, Post>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "post"))?;

        let total = self.count().await?;
        Ok((posts, total))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>> {
        let sql = format!("{} WHERE p.id = $1", SELECT_POST);
        sqlx::query_as::<_, Post>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "post"))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>> {
        let sql = format!("{} WHERE p.slug = $1", SELECT_POST);
        sqlx::query_as::<_, Post>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "post"))
    }

    async fn insert(&self, post: NewPost) -> Result<Post> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO posts (title, slug, content, excerpt, category_id, featured_image)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.content)
        .bind(&post.excerpt)
        .bind(post.category_id)
        .bind(&post.featured_image)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_post_write_error(e, post.category_id))?;

        self.find_by_id(id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
            .map_err(|e| map_db_error(e, "post"))
    }

    async fn update(&self, id: i64, changes: PostChanges) -> Result<Option<Post>> {
        let updated = sqlx::query(
            r#"
            UPDATE posts
            SET title = $2, content = $3, excerpt = $4, category_id = $5,
                featured_image = $6, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.content)
        .bind(&changes.excerpt)
        .bind(changes.category_id)
        .bind(&changes.featured_image)
        .execute(&self.pool)
        .await
        .map_err(|e| map_post_write_error(e, changes.category_id))?;

        if updated.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "post"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "post"))
    }

    async fn count_without_image(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts WHERE featured_image IS NULL")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "post"))
    }
}
