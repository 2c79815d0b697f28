use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::posts::dtos::PostSummaryDto;

/// Number of posts listed under "recent" on the dashboard
pub const RECENT_POSTS_LIMIT: i64 = 5;

/// Back-office dashboard summary
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardSummaryDto {
    pub total_posts: i64,
    pub total_categories: i64,
    pub posts_without_image: i64,
    /// Newest posts first
    pub recent_posts: Vec<PostSummaryDto>,
}
