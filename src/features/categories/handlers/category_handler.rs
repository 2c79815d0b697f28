use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, FormInstance};
use crate::features::auth::guards::RequireAdmin;
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, DeleteCheckDto, UpdateCategoryDto,
};
use crate::features::categories::services::CategoryService;
use crate::shared::types::{ApiResponse, ConfirmQuery, Meta};

/// List all categories
///
/// Each category carries the number of posts filed under it.
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponseDto>>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    let categories = service.list().await?;
    let total = categories.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(categories),
        None,
        Some(Meta { total }),
    )))
}

/// Get category by slug
#[utoipa::path(
    get,
    path = "/api/categories/{slug}",
    params(
        ("slug" = String, Path, description = "Category slug")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryResponseDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service.get_by_slug(&slug).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// List categories for the back office
#[utoipa::path(
    get,
    path = "/api/admin/categories",
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn admin_list_categories(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    let categories = service.list().await?;
    let total = categories.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(categories),
        None,
        Some(Meta { total }),
    )))
}

/// Get category by id
#[utoipa::path(
    get,
    path = "/api/admin/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryResponseDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn admin_get_category(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// Create a category
///
/// The slug is derived from the name and stays fixed afterwards.
#[utoipa::path(
    post,
    path = "/api/admin/categories",
    request_body = CreateCategoryDto,
    params(
        ("X-Form-Instance" = Option<String>, Header, description = "Client form instance id; one submission in flight per id")
    ),
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Slug taken or submission already in progress")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_category(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<CategoryService>>,
    FormInstance(form_instance): FormInstance,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<(StatusCode, Json<ApiResponse<CategoryResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let _submission = service
        .submissions()
        .begin("category", form_instance.as_deref())?;

    let category = service.create(dto).await?;
    tracing::debug!("Category {} created by {}", category.id, user.sub);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(category),
            Some("Category created".to_string()),
            None,
        )),
    ))
}

/// Update a category
#[utoipa::path(
    put,
    path = "/api/admin/categories/{id}",
    request_body = UpdateCategoryDto,
    params(
        ("id" = i64, Path, description = "Category id"),
        ("X-Form-Instance" = Option<String>, Header, description = "Client form instance id; one submission in flight per id")
    ),
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Submission already in progress")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_category(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i64>,
    FormInstance(form_instance): FormInstance,
    AppJson(dto): AppJson<UpdateCategoryDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let _submission = service
        .submissions()
        .begin("category", form_instance.as_deref())?;

    let category = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(category),
        Some("Category updated".to_string()),
        None,
    )))
}

/// Check whether a category can be deleted
#[utoipa::path(
    get,
    path = "/api/admin/categories/{id}/delete-check",
    params(
        ("id" = i64, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Deletion availability", body = ApiResponse<DeleteCheckDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn category_delete_check(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<DeleteCheckDto>>> {
    let check = service.delete_check(id).await?;
    Ok(Json(ApiResponse::success(Some(check), None, None)))
}

/// Delete a category
///
/// Requires `?confirm=true`. Refused while posts still use the category.
#[utoipa::path(
    delete,
    path = "/api/admin/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category id"),
        ConfirmQuery
    ),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 400, description = "Deletion not confirmed"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Category still has posts")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_category(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i64>,
    Query(query): Query<ConfirmQuery>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id, query.confirm).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Category deleted".to_string()),
        None,
    )))
}
