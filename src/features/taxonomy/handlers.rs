use axum::{extract::Path, Json};

use crate::core::error::{AppError, Result};
use crate::features::taxonomy::dtos::{
    CategoryPageDto, MenuItemDto, TaxonomyNodeDetailDto, TaxonomyNodeDto, TaxonomyTreeDto,
};
use crate::features::taxonomy::tree;
use crate::shared::types::ApiResponse;

/// Get the full category tree
#[utoipa::path(
    get,
    path = "/api/taxonomy",
    responses(
        (status = 200, description = "Category tree", body = ApiResponse<Vec<TaxonomyTreeDto>>),
    ),
    tag = "taxonomy"
)]
pub async fn get_tree() -> Json<ApiResponse<Vec<TaxonomyTreeDto>>> {
    let roots: Vec<TaxonomyTreeDto> = tree::roots().iter().map(Into::into).collect();
    Json(ApiResponse::success(Some(roots), None, None))
}

/// Get the navigation menu
#[utoipa::path(
    get,
    path = "/api/taxonomy/menu",
    responses(
        (status = 200, description = "Rendered menu", body = ApiResponse<Vec<MenuItemDto>>),
    ),
    tag = "taxonomy"
)]
pub async fn get_menu() -> Json<ApiResponse<Vec<MenuItemDto>>> {
    let menu: Vec<MenuItemDto> = tree::menu().into_iter().map(Into::into).collect();
    Json(ApiResponse::success(Some(menu), None, None))
}

/// Get landing page copy for a category path
///
/// Unknown paths return generic copy with `found = false` rather than 404.
#[utoipa::path(
    get,
    path = "/api/taxonomy/page/{path}",
    params(
        ("path" = String, Path, description = "Taxonomy path, e.g. health/medicare")
    ),
    responses(
        (status = 200, description = "Landing page copy", body = ApiResponse<CategoryPageDto>),
    ),
    tag = "taxonomy"
)]
pub async fn get_page(Path(path): Path<String>) -> Json<ApiResponse<CategoryPageDto>> {
    let page = CategoryPageDto::new(&path, tree::describe(&path));
    Json(ApiResponse::success(Some(page), None, None))
}

/// Resolve a taxonomy node and list its children
#[utoipa::path(
    get,
    path = "/api/taxonomy/nodes/{path}",
    params(
        ("path" = String, Path, description = "Taxonomy path, e.g. health/medicare")
    ),
    responses(
        (status = 200, description = "Node found", body = ApiResponse<TaxonomyNodeDetailDto>),
        (status = 404, description = "No such taxonomy path")
    ),
    tag = "taxonomy"
)]
pub async fn get_node(Path(path): Path<String>) -> Result<Json<ApiResponse<TaxonomyNodeDetailDto>>> {
    let node = tree::resolve(&path)
        .ok_or_else(|| AppError::NotFound(format!("Taxonomy path '{}' not found", path)))?;

    let detail = TaxonomyNodeDetailDto {
        node: node.into(),
        children: tree::children(node).iter().map(TaxonomyNodeDto::from).collect(),
    };
    Ok(Json(ApiResponse::success(Some(detail), None, None)))
}
