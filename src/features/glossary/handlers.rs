use axum::{extract::Query, Json};

use crate::features::glossary::data::GLOSSARY;
use crate::features::glossary::dtos::GlossaryItemDto;
use crate::features::glossary::models::GlossaryCategory;
use crate::shared::constants::ALL_CATEGORIES;
use crate::shared::search::{self, SearchQuery, SearchResults};
use crate::shared::types::{ApiResponse, Meta};

/// Search the glossary
///
/// `q` is matched case-insensitively against term and definition.
/// `category` is one of the names from `/api/glossary/categories`.
#[utoipa::path(
    get,
    path = "/api/glossary",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching terms", body = ApiResponse<SearchResults<GlossaryItemDto>>),
    ),
    tag = "glossary"
)]
pub async fn search_glossary(
    Query(query): Query<SearchQuery>,
) -> Json<ApiResponse<SearchResults<GlossaryItemDto>>> {
    let category = query.category_filter();
    let items: Vec<GlossaryItemDto> = search::filter(GLOSSARY, query.text(), &category)
        .into_iter()
        .map(GlossaryItemDto::from)
        .collect();

    let results = SearchResults::new(items, query.text(), &category);
    let total = results.total as i64;
    Json(ApiResponse::success(Some(results), None, Some(Meta { total })))
}

/// List glossary category filters, starting with "All"
#[utoipa::path(
    get,
    path = "/api/glossary/categories",
    responses(
        (status = 200, description = "Category filter names", body = ApiResponse<Vec<String>>),
    ),
    tag = "glossary"
)]
pub async fn list_glossary_categories() -> Json<ApiResponse<Vec<String>>> {
    let names: Vec<String> = std::iter::once(ALL_CATEGORIES)
        .chain(GlossaryCategory::ALL.iter().map(|c| c.name()))
        .map(str::to_string)
        .collect();
    Json(ApiResponse::success(Some(names), None, None))
}
