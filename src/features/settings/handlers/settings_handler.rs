use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::settings::dtos::{SiteSettingsDto, UpdateSettingsDto};
use crate::features::settings::services::SettingsService;
use crate::shared::types::ApiResponse;

/// Get public site settings
#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "Site settings", body = ApiResponse<SiteSettingsDto>),
    ),
    tag = "settings"
)]
pub async fn get_settings(
    State(service): State<Arc<SettingsService>>,
) -> Result<Json<ApiResponse<SiteSettingsDto>>> {
    let settings = service.get().await?;
    Ok(Json(ApiResponse::success(Some(settings), None, None)))
}

/// Get site settings for editing
#[utoipa::path(
    get,
    path = "/api/admin/settings",
    responses(
        (status = 200, description = "Site settings", body = ApiResponse<SiteSettingsDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn admin_get_settings(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<SettingsService>>,
) -> Result<Json<ApiResponse<SiteSettingsDto>>> {
    let settings = service.get().await?;
    Ok(Json(ApiResponse::success(Some(settings), None, None)))
}

/// Update site settings
///
/// Only the provided keys are written.
#[utoipa::path(
    put,
    path = "/api/admin/settings",
    request_body = UpdateSettingsDto,
    responses(
        (status = 200, description = "Settings saved", body = ApiResponse<SiteSettingsDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_settings(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<SettingsService>>,
    AppJson(dto): AppJson<UpdateSettingsDto>,
) -> Result<Json<ApiResponse<SiteSettingsDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let settings = service.update(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(settings),
        Some("Settings saved".to_string()),
        None,
    )))
}
