use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::models::{Category, CategoryWithCount};

/// Request DTO for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    /// Display name; the slug is derived from it once
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must not exceed 1000 characters"))]
    pub description: Option<String>,
}

/// Request DTO for updating a category
///
/// Omitted fields keep their current value. The slug never changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    /// An empty string clears the description
    #[validate(length(max = 1000, message = "Description must not exceed 1000 characters"))]
    pub description: Option<String>,
}

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub post_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CategoryResponseDto {
    pub fn from_category(c: Category, post_count: i64) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
            description: c.description,
            post_count,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

impl From<CategoryWithCount> for CategoryResponseDto {
    fn from(c: CategoryWithCount) -> Self {
        Self::from_category(c.category, c.post_count)
    }
}

/// Whether a category may be deleted right now
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteCheckDto {
    pub can_delete: bool,
    pub post_count: i64,
    /// Label explaining why deletion is disabled
    pub reason: Option<String>,
}

impl DeleteCheckDto {
    pub fn for_post_count(post_count: i64) -> Self {
        let reason = (post_count > 0).then(|| {
            format!(
                "Cannot delete: {} {} filed under this category",
                post_count,
                if post_count == 1 { "post is" } else { "posts are" }
            )
        });
        Self {
            can_delete: post_count == 0,
            post_count,
            reason,
        }
    }
}
