use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, DeleteCheckDto, UpdateCategoryDto,
};
use crate::features::categories::models::NewCategory;
use crate::features::categories::repository::CategoryRepository;
use crate::shared::slug::slug_for;
use crate::shared::submission::SubmissionTracker;

/// Service for category operations
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
    submissions: SubmissionTracker,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self {
            repo,
            submissions: SubmissionTracker::new(),
        }
    }

    /// In-flight create/update submissions from admin forms
    pub fn submissions(&self) -> &SubmissionTracker {
        &self.submissions
    }

    /// List all categories with their post counts
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.repo.list_with_counts().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i64) -> Result<CategoryResponseDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    /// Get category by slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<CategoryResponseDto> {
        self.repo
            .find_by_slug(slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", slug)))
    }

    /// Create a category; the slug is derived from the name here and never again
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let name = required_name(&dto.name)?;
        let slug = slug_for("Name", &name)?;

        let category = self
            .repo
            .insert(NewCategory {
                name,
                slug,
                description: normalize_description(dto.description.as_deref()),
            })
            .await?;

        tracing::info!(
            "Created category id={} slug={}",
            category.id,
            category.slug
        );
        Ok(CategoryResponseDto::from_category(category, 0))
    }

    /// Update name and/or description, keeping the slug
    pub async fn update(&self, id: i64, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;

        let name = match dto.name.as_deref() {
            Some(name) => required_name(name)?,
            None => current.category.name.clone(),
        };
        let description = match dto.description.as_deref() {
            Some(description) => normalize_description(Some(description)),
            None => current.category.description.clone(),
        };

        let updated = self
            .repo
            .update(id, &name, description.as_deref())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;

        tracing::info!("Updated category id={} slug={}", updated.id, updated.slug);
        Ok(CategoryResponseDto::from_category(
            updated,
            current.post_count,
        ))
    }

    pub async fn delete_check(&self, id: i64) -> Result<DeleteCheckDto> {
        let category = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;

        Ok(DeleteCheckDto::for_post_count(category.post_count))
    }

    /// Delete a category that no post refers to
    ///
    /// Nothing changes unless `confirm` is set.
    pub async fn delete(&self, id: i64, confirm: bool) -> Result<()> {
        if !confirm {
            return Err(AppError::BadRequest(
                "Deleting a category must be confirmed with ?confirm=true".to_string(),
            ));
        }

        let check = self.delete_check(id).await?;
        if let Some(reason) = check.reason {
            tracing::debug!("Refused to delete category id={}: {}", id, reason);
            return Err(AppError::ReferentialIntegrity(reason));
        }

        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }

        tracing::info!("Deleted category id={}", id);
        Ok(())
    }
}

fn required_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }
    Ok(name.to_string())
}

fn normalize_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::InMemoryContentStore;
    use tokio_test::assert_ok;

    fn service(store: &Arc<InMemoryContentStore>) -> CategoryService {
        CategoryService::new(store.clone())
    }

    fn create_dto(name: &str) -> CreateCategoryDto {
        CreateCategoryDto {
            name: name.to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_rename_keeps_slug() {
        let store = Arc::new(InMemoryContentStore::new());
        let service = service(&store);

        let created = assert_ok!(service.create(create_dto("Pet Insurance")).await);
        assert_eq!(created.slug, "pet-insurance");

        let updated = assert_ok!(
            service
                .update(
                    created.id,
                    UpdateCategoryDto {
                        name: Some("Pet Coverage".to_string()),
                        description: None,
                    },
                )
                .await
        );
        assert_eq!(updated.name, "Pet Coverage");
        assert_eq!(updated.slug, "pet-insurance");
    }

    #[tokio::test]
    async fn test_duplicate_slug_conflicts() {
        let store = Arc::new(InMemoryContentStore::new());
        let service = service(&store);

        assert_ok!(service.create(create_dto("Pet Insurance")).await);
        let err = service.create(create_dto("pet  insurance!")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        let store = Arc::new(InMemoryContentStore::new());
        let err = service(&store).create(create_dto("   ")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = service(&store).create(create_dto("???")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_category_with_posts_cannot_be_deleted() {
        let store = Arc::new(InMemoryContentStore::new());
        let service = service(&store);
        let health = store.seed_category("Health");
        store.seed_post(health, "Medicare Basics", None);

        let before = assert_ok!(service.get(health).await);

        let check = assert_ok!(service.delete_check(health).await);
        assert!(!check.can_delete);
        assert_eq!(check.post_count, 1);

        let err = service.delete(health, true).await.unwrap_err();
        assert!(matches!(err, AppError::ReferentialIntegrity(_)));

        let after = assert_ok!(service.get(health).await);
        assert_eq!(after.name, before.name);
        assert_eq!(after.post_count, 1);
        assert_eq!(store.post_count(), 1);
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let store = Arc::new(InMemoryContentStore::new());
        let service = service(&store);
        let life = store.seed_category("Life");

        let err = service.delete(life, false).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_ok!(service.get(life).await);

        assert_ok!(service.delete(life, true).await);
        assert!(matches!(
            service.get(life).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_update_clears_description_with_empty_string() {
        let store = Arc::new(InMemoryContentStore::new());
        let service = service(&store);
        let created = assert_ok!(
            service
                .create(CreateCategoryDto {
                    name: "Auto".to_string(),
                    description: Some("Cars and trucks".to_string()),
                })
                .await
        );
        assert_eq!(created.description.as_deref(), Some("Cars and trucks"));

        let updated = assert_ok!(
            service
                .update(
                    created.id,
                    UpdateCategoryDto {
                        name: None,
                        description: Some(String::new()),
                    },
                )
                .await
        );
        assert_eq!(updated.name, "Auto");
        assert!(updated.description.is_none());
    }
}
