use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::CategoryRepository;
use crate::features::dashboard::dtos::{DashboardSummaryDto, RECENT_POSTS_LIMIT};
use crate::features::posts::PostRepository;

/// Aggregate counts for the back-office dashboard
pub struct DashboardService {
    posts: Arc<dyn PostRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl DashboardService {
    pub fn new(posts: Arc<dyn PostRepository>, categories: Arc<dyn CategoryRepository>) -> Self {
        Self { posts, categories }
    }

    // ========================================================================
    // Summary
    // ========================================================================

    pub async fn get_summary(&self) -> Result<DashboardSummaryDto> {
        let total_posts = self.posts.count().await?;
        let total_categories = self.categories.count().await?;
        let posts_without_image = self.posts.count_without_image().await?;
        let (recent, _) = self.posts.list_page(0, RECENT_POSTS_LIMIT).await?;

        Ok(DashboardSummaryDto {
            total_posts,
            total_categories,
            posts_without_image,
            recent_posts: recent.into_iter().map(Into::into).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::InMemoryContentStore;
    use tokio_test::assert_ok;

    #[tokio::test]
    async fn test_summary_counts() {
        let store = Arc::new(InMemoryContentStore::new());
        let auto = store.seed_category("Auto");
        store.seed_category("Home");
        for i in 0..7 {
            store.seed_post(auto, &format!("Auto Post {}", i), None);
        }

        let service = DashboardService::new(store.clone(), store.clone());
        let summary = assert_ok!(service.get_summary().await);

        assert_eq!(summary.total_posts, 7);
        assert_eq!(summary.total_categories, 2);
        assert_eq!(summary.posts_without_image, 7);
        assert_eq!(summary.recent_posts.len(), RECENT_POSTS_LIMIT as usize);
        assert_eq!(summary.recent_posts[0].title, "Auto Post 6");
    }
}
