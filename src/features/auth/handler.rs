use crate::core::error::Result;
use crate::features::auth::dto::MeResponseDto;
use crate::features::auth::guards::RequireAdmin;
use crate::shared::types::ApiResponse;
use axum::Json;

/// Current admin user
#[utoipa::path(
    get,
    path = "/api/admin/me",
    responses(
        (status = 200, description = "Current user retrieved successfully", body = ApiResponse<MeResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - admin access required")
    ),
    tag = "auth",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_me(RequireAdmin(user): RequireAdmin) -> Result<Json<ApiResponse<MeResponseDto>>> {
    Ok(Json(ApiResponse::success(Some(user.into()), None, None)))
}
