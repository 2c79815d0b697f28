use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for category
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category row plus the number of posts filed under it
#[derive(Debug, Clone, FromRow)]
pub struct CategoryWithCount {
    #[sqlx(flatten)]
    pub category: Category,
    pub post_count: i64,
}

/// Values for a new category row
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}
