use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::core::extractor::FormInstance;
use crate::features::auth::guards::RequireAdmin;
use crate::features::posts::dtos::{
    is_image_type_allowed, CategoryPostsDto, ImageUpload, PostForm, PostFormDto,
    PostResponseDto, PostSummaryDto, ALLOWED_IMAGE_TYPES, MAX_IMAGE_SIZE,
};
use crate::features::posts::services::PostService;
use crate::shared::search::{SearchQuery, SearchResults};
use crate::shared::types::{ApiResponse, ConfirmQuery, Meta, PaginationQuery};

/// List posts, optionally filtered
///
/// `q` is matched case-insensitively against title and excerpt. `category`
/// accepts a category name or slug; "All" or empty means every category.
#[utoipa::path(
    get,
    path = "/api/posts",
    params(SearchQuery),
    responses(
        (status = 200, description = "Filtered posts", body = ApiResponse<SearchResults<PostSummaryDto>>),
    ),
    tag = "posts"
)]
pub async fn list_posts(
    State(service): State<Arc<PostService>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<SearchResults<PostSummaryDto>>>> {
    let results = service.catalog(&query).await?;
    let total = results.total as i64;
    Ok(Json(ApiResponse::success(
        Some(results),
        None,
        Some(Meta { total }),
    )))
}

/// Get post by slug
#[utoipa::path(
    get,
    path = "/api/posts/{slug}",
    params(
        ("slug" = String, Path, description = "Post slug")
    ),
    responses(
        (status = 200, description = "Post found", body = ApiResponse<PostResponseDto>),
        (status = 404, description = "Post not found")
    ),
    tag = "posts"
)]
pub async fn get_post(
    State(service): State<Arc<PostService>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<PostResponseDto>>> {
    let post = service.get_by_slug(&slug).await?;
    Ok(Json(ApiResponse::success(Some(post), None, None)))
}

/// List posts filed under a category
#[utoipa::path(
    get,
    path = "/api/categories/{slug}/posts",
    params(
        ("slug" = String, Path, description = "Category slug")
    ),
    responses(
        (status = 200, description = "Category with its posts", body = ApiResponse<CategoryPostsDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn list_category_posts(
    State(service): State<Arc<PostService>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<CategoryPostsDto>>> {
    let page = service.list_for_category(&slug).await?;
    let total = page.posts.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(page),
        None,
        Some(Meta { total }),
    )))
}

/// List posts for the back office (paginated)
#[utoipa::path(
    get,
    path = "/api/admin/posts",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of posts", body = ApiResponse<Vec<PostResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn admin_list_posts(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<PostService>>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<PostResponseDto>>>> {
    let (items, total) = service.list(params.offset(), params.limit()).await?;

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// Get post by id
#[utoipa::path(
    get,
    path = "/api/admin/posts/{id}",
    params(
        ("id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Post found", body = ApiResponse<PostResponseDto>),
        (status = 404, description = "Post not found")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn admin_get_post(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<PostService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<PostResponseDto>>> {
    let post = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(post), None, None)))
}

/// Create a post
///
/// Accepts multipart/form-data with:
/// - `title`: required
/// - `category_id`: required, an existing category
/// - `content`, `excerpt`: optional
/// - `image`: optional featured image, uploaded before the post is saved
#[utoipa::path(
    post,
    path = "/api/admin/posts",
    request_body(
        content = PostFormDto,
        content_type = "multipart/form-data",
        description = "Post fields with an optional featured image",
    ),
    params(
        ("X-Form-Instance" = Option<String>, Header, description = "Client form instance id; one submission in flight per id")
    ),
    responses(
        (status = 201, description = "Post created", body = ApiResponse<PostResponseDto>),
        (status = 400, description = "Invalid form or image"),
        (status = 409, description = "Slug taken or submission already in progress"),
        (status = 502, description = "Image upload failed; nothing was saved")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_post(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<PostService>>,
    FormInstance(form_instance): FormInstance,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<PostResponseDto>>)> {
    let _submission = service
        .submissions()
        .begin("post", form_instance.as_deref())?;

    let form = read_post_form(multipart).await?;
    let post = service.create(form).await?;
    debug!("Post {} created by {}", post.id, user.sub);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(post),
            Some("Post created".to_string()),
            None,
        )),
    ))
}

/// Update a post
///
/// Same fields as create, all optional. The slug never changes; without a
/// new `image` the current one is kept.
#[utoipa::path(
    put,
    path = "/api/admin/posts/{id}",
    request_body(
        content = PostFormDto,
        content_type = "multipart/form-data",
        description = "Fields to change, with an optional replacement image",
    ),
    params(
        ("id" = i64, Path, description = "Post id"),
        ("X-Form-Instance" = Option<String>, Header, description = "Client form instance id; one submission in flight per id")
    ),
    responses(
        (status = 200, description = "Post updated", body = ApiResponse<PostResponseDto>),
        (status = 400, description = "Invalid form or image"),
        (status = 404, description = "Post not found"),
        (status = 409, description = "Submission already in progress"),
        (status = 502, description = "Image upload failed; nothing was saved")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_post(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<PostService>>,
    Path(id): Path<i64>,
    FormInstance(form_instance): FormInstance,
    multipart: Multipart,
) -> Result<Json<ApiResponse<PostResponseDto>>> {
    let _submission = service
        .submissions()
        .begin("post", form_instance.as_deref())?;

    let form = read_post_form(multipart).await?;
    let post = service.update(id, form).await?;

    Ok(Json(ApiResponse::success(
        Some(post),
        Some("Post updated".to_string()),
        None,
    )))
}

/// Delete a post
///
/// Requires `?confirm=true`. The featured image is left in storage.
#[utoipa::path(
    delete,
    path = "/api/admin/posts/{id}",
    params(
        ("id" = i64, Path, description = "Post id"),
        ConfirmQuery
    ),
    responses(
        (status = 200, description = "Post deleted"),
        (status = 400, description = "Deletion not confirmed"),
        (status = 404, description = "Post not found")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_post(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<PostService>>,
    Path(id): Path<i64>,
    Query(query): Query<ConfirmQuery>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id, query.confirm).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Post deleted".to_string()),
        None,
    )))
}

/// Read the multipart post form, validating the image part
async fn read_post_form(mut multipart: Multipart) -> Result<PostForm> {
    let mut form = PostForm::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "image" => {
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read image bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read image data: {}", e))
                })?;

                // Browsers send an empty part when no file was chosen
                if data.is_empty() {
                    continue;
                }

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(AppError::BadRequest(format!(
                        "Image too large. Maximum size is {} bytes ({} MB)",
                        MAX_IMAGE_SIZE,
                        MAX_IMAGE_SIZE / 1024 / 1024
                    )));
                }

                if !is_image_type_allowed(&content_type) {
                    return Err(AppError::BadRequest(format!(
                        "Image type '{}' is not allowed. Allowed types: {}",
                        content_type,
                        ALLOWED_IMAGE_TYPES.join(", ")
                    )));
                }

                form.image = Some(ImageUpload {
                    data: data.to_vec(),
                    content_type,
                });
            }
            "title" | "content" | "excerpt" | "category_id" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read {} field: {}", field_name, e))
                })?;

                match field_name.as_str() {
                    "title" => form.title = Some(text),
                    "content" => form.content = Some(text),
                    "excerpt" => form.excerpt = Some(text),
                    _ => form.category_id = parse_category_id(&text)?,
                }
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    Ok(form)
}

fn parse_category_id(raw: &str) -> Result<Option<i64>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i64>()
        .map(Some)
        .map_err(|_| AppError::Validation(format!("Invalid category id '{}'", raw)))
}
