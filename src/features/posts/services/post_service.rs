use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::CategoryRepository;
use crate::features::posts::dtos::{
    image_extension, CategoryPostsDto, ImageUpload, PostForm, PostResponseDto, PostSummaryDto,
    MAX_TITLE_LENGTH,
};
use crate::features::posts::models::{NewPost, PostChanges};
use crate::features::posts::repository::PostRepository;
use crate::modules::storage::AssetStorage;
use crate::shared::search::{self, SearchQuery, SearchResults};
use crate::shared::slug::slug_for;
use crate::shared::submission::SubmissionTracker;

/// Object key prefix for featured images
const IMAGE_PATH: &str = "posts";

/// Service for the post catalog and post administration
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    categories: Arc<dyn CategoryRepository>,
    storage: Arc<dyn AssetStorage>,
    submissions: SubmissionTracker,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        categories: Arc<dyn CategoryRepository>,
        storage: Arc<dyn AssetStorage>,
    ) -> Self {
        Self {
            posts,
            categories,
            storage,
            submissions: SubmissionTracker::new(),
        }
    }

    /// In-flight create/update submissions from admin forms
    pub fn submissions(&self) -> &SubmissionTracker {
        &self.submissions
    }

    /// Public catalog filtered by `?q=&category=`, newest first
    pub async fn catalog(&self, query: &SearchQuery) -> Result<SearchResults<PostSummaryDto>> {
        let entries: Vec<PostSummaryDto> = self
            .posts
            .list_all()
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        let text = query.text();
        let category = query.category_filter();
        let matched = search::filter(&entries, text, &category)
            .into_iter()
            .cloned()
            .collect();

        Ok(SearchResults::new(matched, text, &category))
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<PostResponseDto> {
        self.posts
            .find_by_slug(slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Post '{}' not found", slug)))
    }

    /// Category landing page data
    pub async fn list_for_category(&self, category_slug: &str) -> Result<CategoryPostsDto> {
        let category = self
            .categories
            .find_by_slug(category_slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", category_slug)))?;

        let posts = self
            .posts
            .list_by_category(category.category.id)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(CategoryPostsDto {
            category: category.into(),
            posts,
        })
    }

    pub async fn list(&self, offset: i64, limit: i64) -> Result<(Vec<PostResponseDto>, i64)> {
        let (posts, total) = self.posts.list_page(offset, limit).await?;
        Ok((posts.into_iter().map(Into::into).collect(), total))
    }

    pub async fn get(&self, id: i64) -> Result<PostResponseDto> {
        self.posts
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))
    }

    /// Create a post
    ///
    /// The image, if any, is uploaded before the row is written; an upload
    /// failure aborts the save with nothing persisted.
    pub async fn create(&self, form: PostForm) -> Result<PostResponseDto> {
        let title = required_title(form.title.as_deref())?;
        let slug = slug_for("Title", &title)?;
        let category_id = form
            .category_id
            .ok_or_else(|| AppError::Validation("Category is required".to_string()))?;
        self.ensure_category_exists(category_id).await?;
        if self.posts.find_by_slug(&slug).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "A post with the slug '{}' already exists",
                slug
            )));
        }

        let featured_image = match form.image {
            Some(image) => Some(self.upload_image(image).await?),
            None => None,
        };

        let result = self
            .posts
            .insert(NewPost {
                title,
                slug,
                content: form.content.unwrap_or_default(),
                excerpt: normalize_excerpt(form.excerpt.as_deref()),
                category_id,
                featured_image: featured_image.clone(),
            })
            .await;

        let post = match result {
            Ok(post) => post,
            Err(e) => {
                warn_orphaned(featured_image.as_deref());
                return Err(e);
            }
        };

        info!("Created post id={} slug={}", post.id, post.slug);
        Ok(post.into())
    }

    /// Update a post, keeping its slug
    ///
    /// A new image replaces `featured_image`; without one the current URL is
    /// kept.
    pub async fn update(&self, id: i64, form: PostForm) -> Result<PostResponseDto> {
        let current = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))?;

        let title = match form.title.as_deref() {
            Some(title) => required_title(Some(title))?,
            None => current.title.clone(),
        };
        let category_id = match form.category_id {
            Some(category_id) if category_id != current.category_id => {
                self.ensure_category_exists(category_id).await?;
                category_id
            }
            _ => current.category_id,
        };
        let excerpt = match form.excerpt.as_deref() {
            Some(excerpt) => normalize_excerpt(Some(excerpt)),
            None => current.excerpt.clone(),
        };

        let new_image = match form.image {
            Some(image) => Some(self.upload_image(image).await?),
            None => None,
        };

        let result = self
            .posts
            .update(
                id,
                PostChanges {
                    title,
                    content: form.content.unwrap_or_else(|| current.content.clone()),
                    excerpt,
                    category_id,
                    featured_image: new_image.clone().or_else(|| current.featured_image.clone()),
                },
            )
            .await;

        let post = match result {
            Ok(Some(post)) => post,
            Ok(None) => {
                warn_orphaned(new_image.as_deref());
                return Err(AppError::NotFound(format!("Post {} not found", id)));
            }
            Err(e) => {
                warn_orphaned(new_image.as_deref());
                return Err(e);
            }
        };

        info!("Updated post id={} slug={}", post.id, post.slug);
        Ok(post.into())
    }

    /// Delete a post once confirmed; its image stays in storage
    pub async fn delete(&self, id: i64, confirm: bool) -> Result<()> {
        if !confirm {
            return Err(AppError::BadRequest(
                "Deleting a post must be confirmed with ?confirm=true".to_string(),
            ));
        }

        if !self.posts.delete(id).await? {
            return Err(AppError::NotFound(format!("Post {} not found", id)));
        }

        info!("Deleted post id={}", id);
        Ok(())
    }

    async fn ensure_category_exists(&self, category_id: i64) -> Result<()> {
        match self.categories.find_by_id(category_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::Validation(format!(
                "Category {} does not exist",
                category_id
            ))),
        }
    }

    async fn upload_image(&self, image: ImageUpload) -> Result<String> {
        let path = format!(
            "{}/{}.{}",
            IMAGE_PATH,
            Uuid::new_v4(),
            image_extension(&image.content_type)
        );
        let size = image.data.len();

        let url = self
            .storage
            .upload_public(&path, image.data, &image.content_type)
            .await?;

        debug!("Uploaded post image {} ({} bytes)", path, size);
        Ok(url)
    }
}

fn required_title(title: Option<&str>) -> Result<String> {
    let title = title.map(str::trim).unwrap_or("");
    if title.is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(AppError::Validation(format!(
            "Title must not exceed {} characters",
            MAX_TITLE_LENGTH
        )));
    }
    Ok(title.to_string())
}

fn normalize_excerpt(excerpt: Option<&str>) -> Option<String> {
    excerpt
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string)
}

fn warn_orphaned(url: Option<&str>) {
    if let Some(url) = url {
        warn!("Post save failed after upload; image left orphaned at {}", url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{FailingAssetStorage, InMemoryAssetStorage, InMemoryContentStore};
    use tokio_test::assert_ok;

    fn image() -> ImageUpload {
        ImageUpload {
            data: vec![0x89, b'P', b'N', b'G'],
            content_type: "image/png".to_string(),
        }
    }

    fn form(title: &str, category_id: i64) -> PostForm {
        PostForm {
            title: Some(title.to_string()),
            content: Some("<p>Body</p>".to_string()),
            category_id: Some(category_id),
            ..Default::default()
        }
    }

    fn service_with(
        store: &Arc<InMemoryContentStore>,
        storage: Arc<dyn AssetStorage>,
    ) -> PostService {
        PostService::new(store.clone(), store.clone(), storage)
    }

    #[tokio::test]
    async fn test_upload_failure_writes_no_row() {
        let store = Arc::new(InMemoryContentStore::new());
        let storage = Arc::new(FailingAssetStorage::default());
        let service = service_with(&store, storage.clone());
        let auto = store.seed_category("Auto");

        let err = service
            .create(PostForm {
                image: Some(image()),
                ..form("Gap Coverage", auto)
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Upload(_)));
        assert!(storage.was_called());
        assert_eq!(store.post_count(), 0);
    }

    #[tokio::test]
    async fn test_create_uploads_then_saves_url() {
        let store = Arc::new(InMemoryContentStore::new());
        let storage = Arc::new(InMemoryAssetStorage::default());
        let service = service_with(&store, storage.clone());
        let auto = store.seed_category("Auto");

        let post = assert_ok!(
            service
                .create(PostForm {
                    image: Some(image()),
                    ..form("Gap Coverage", auto)
                })
                .await
        );

        assert_eq!(post.slug, "gap-coverage");
        assert_eq!(post.category.name, "Auto");
        let url = post.featured_image.unwrap();
        assert!(url.ends_with(".png"));
        assert_eq!(storage.uploaded_paths().len(), 1);
        assert_eq!(post.display_excerpt, "Body");
    }

    #[tokio::test]
    async fn test_unknown_category_is_checked_before_upload() {
        let store = Arc::new(InMemoryContentStore::new());
        let storage = Arc::new(InMemoryAssetStorage::default());
        let service = service_with(&store, storage.clone());

        let err = service
            .create(PostForm {
                image: Some(image()),
                ..form("Gap Coverage", 42)
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(storage.uploaded_paths().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_title_is_rejected_before_upload() {
        let store = Arc::new(InMemoryContentStore::new());
        let storage = Arc::new(InMemoryAssetStorage::default());
        let service = service_with(&store, storage.clone());
        let auto = store.seed_category("Auto");
        store.seed_post(auto, "Gap Coverage", None);

        let err = service
            .create(PostForm {
                image: Some(image()),
                ..form("Gap  coverage!", auto)
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert!(storage.uploaded_paths().is_empty());
        assert_eq!(store.post_count(), 1);
    }

    #[tokio::test]
    async fn test_update_keeps_slug_and_image() {
        let store = Arc::new(InMemoryContentStore::new());
        let storage = Arc::new(InMemoryAssetStorage::default());
        let service = service_with(&store, storage.clone());
        let auto = store.seed_category("Auto");
        let home = store.seed_category("Home");

        let created = assert_ok!(
            service
                .create(PostForm {
                    image: Some(image()),
                    ..form("Gap Coverage", auto)
                })
                .await
        );

        let updated = assert_ok!(
            service
                .update(
                    created.id,
                    PostForm {
                        title: Some("Gap Insurance Explained".to_string()),
                        category_id: Some(home),
                        ..Default::default()
                    },
                )
                .await
        );

        assert_eq!(updated.slug, "gap-coverage");
        assert_eq!(updated.title, "Gap Insurance Explained");
        assert_eq!(updated.category.slug, "home");
        assert_eq!(updated.content, "<p>Body</p>");
        assert_eq!(updated.featured_image, created.featured_image);
    }

    #[tokio::test]
    async fn test_catalog_filters_health_medicare() {
        let store = Arc::new(InMemoryContentStore::new());
        let service = service_with(&store, Arc::new(InMemoryAssetStorage::default()));
        let health = store.seed_category("Health");
        let auto = store.seed_category("Auto");
        store.seed_post(health, "Medicare vs. Medicaid", None);
        store.seed_post(health, "Choosing a PPO", Some("Networks and referrals"));
        store.seed_post(health, "Part D Plans", Some("Drug coverage under medicare"));
        store.seed_post(auto, "Medicare for Drivers?", None);

        let results = assert_ok!(
            service
                .catalog(&SearchQuery {
                    q: Some("medicare".to_string()),
                    category: Some("Health".to_string()),
                })
                .await
        );

        let titles: Vec<&str> = results.items.iter().map(|p| p.title.as_str()).collect();
        // Newest first
        assert_eq!(titles, vec!["Part D Plans", "Medicare vs. Medicaid"]);
        assert!(results.reset.is_none());

        let results = assert_ok!(
            service
                .catalog(&SearchQuery {
                    q: Some("annuity".to_string()),
                    category: Some("health".to_string()),
                })
                .await
        );
        assert_eq!(results.total, 0);
        assert!(results.reset.is_some());
    }

    #[tokio::test]
    async fn test_category_slug_alias_filters_catalog() {
        let store = Arc::new(InMemoryContentStore::new());
        let service = service_with(&store, Arc::new(InMemoryAssetStorage::default()));
        let pets = store.seed_category("Pet Insurance");
        store.seed_post(pets, "Cat Coverage", None);

        let results = assert_ok!(
            service
                .catalog(&SearchQuery {
                    q: None,
                    category: Some("pet-insurance".to_string()),
                })
                .await
        );
        assert_eq!(results.total, 1);
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let store = Arc::new(InMemoryContentStore::new());
        let service = service_with(&store, Arc::new(InMemoryAssetStorage::default()));
        let life = store.seed_category("Life");
        let post_id = store.seed_post(life, "Term vs. Whole", None);

        let err = service.delete(post_id, false).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(store.post_count(), 1);

        assert_ok!(service.delete(post_id, true).await);
        assert_eq!(store.post_count(), 0);
    }
}
