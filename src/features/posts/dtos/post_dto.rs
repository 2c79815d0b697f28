use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::posts::models::Post;
use crate::shared::search::Searchable;

/// Category reference embedded in post responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PostCategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// Catalog entry shown on listing pages
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostSummaryDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    /// Stored excerpt, or one derived from the content
    pub excerpt: String,
    pub featured_image: Option<String>,
    pub category: PostCategoryDto,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostSummaryDto {
    fn from(p: Post) -> Self {
        Self {
            excerpt: p.effective_excerpt(),
            id: p.id,
            title: p.title,
            slug: p.slug,
            featured_image: p.featured_image,
            category: PostCategoryDto {
                id: p.category_id,
                name: p.category_name,
                slug: p.category_slug,
            },
            created_at: p.created_at,
        }
    }
}

impl Searchable for PostSummaryDto {
    fn category_aliases(&self) -> Vec<&str> {
        vec![self.category.name.as_str(), self.category.slug.as_str()]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.excerpt.as_str()]
    }
}

/// Full post
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostResponseDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    /// Stored markup, returned as-is
    pub content: String,
    /// Excerpt as entered; `None` when it is derived
    pub excerpt: Option<String>,
    /// Excerpt shown on listing pages
    pub display_excerpt: String,
    pub featured_image: Option<String>,
    pub category: PostCategoryDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponseDto {
    fn from(p: Post) -> Self {
        Self {
            display_excerpt: p.effective_excerpt(),
            id: p.id,
            title: p.title,
            slug: p.slug,
            content: p.content,
            excerpt: p.excerpt,
            featured_image: p.featured_image,
            category: PostCategoryDto {
                id: p.category_id,
                name: p.category_name,
                slug: p.category_slug,
            },
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Category landing page: the category plus its posts
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryPostsDto {
    pub category: CategoryResponseDto,
    pub posts: Vec<PostSummaryDto>,
}

/// Post form request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handlers use axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct PostFormDto {
    /// Required on create
    #[schema(example = "Medicare vs. Medicaid: What's the Difference?")]
    pub title: Option<String>,
    /// Post body markup
    pub content: Option<String>,
    /// Required on create; must reference an existing category
    #[schema(example = "1")]
    pub category_id: Option<String>,
    /// Listing summary; derived from content when empty
    pub excerpt: Option<String>,
    /// Featured image (jpeg, png, gif or webp, max 10 MB)
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub image: Option<String>,
}

/// Image part of a post form
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub data: Vec<u8>,
    pub content_type: String,
}

/// Parsed multipart post form
///
/// Absent fields are `None`. On update they keep their current value.
#[derive(Debug, Clone, Default)]
pub struct PostForm {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<i64>,
    pub excerpt: Option<String>,
    pub image: Option<ImageUpload>,
}

/// Allowed MIME types for post images
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Maximum image size (10 MB)
pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

/// Maximum title length in characters
pub const MAX_TITLE_LENGTH: usize = 200;

pub fn is_image_type_allowed(content_type: &str) -> bool {
    ALLOWED_IMAGE_TYPES.contains(&content_type)
}

/// File extension for an allowed image type
pub fn image_extension(content_type: &str) -> &'static str {
    match content_type {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        _ => "bin",
    }
}
