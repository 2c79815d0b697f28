use axum::{extract::State, Json};
use std::sync::Arc;

use crate::core::error::AppError;
use crate::features::auth::guards::RequireAdmin;
use crate::features::dashboard::dtos::*;
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::ApiResponse;

// ============================================================================
// Summary
// ============================================================================

/// Get back-office dashboard summary
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = "admin",
    responses(
        (status = 200, description = "Dashboard summary", body = ApiResponse<DashboardSummaryDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_summary(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<DashboardSummaryDto>>, AppError> {
    let summary = service.get_summary().await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}
