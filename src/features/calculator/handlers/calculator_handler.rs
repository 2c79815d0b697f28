use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::calculator::dtos::*;
use crate::features::calculator::services::CalculatorService;
use crate::shared::types::ApiResponse;
use validator::Validate;

/// Recommend coverage for an insurance type
///
/// Unknown or missing types get a recommendation of 0.
#[utoipa::path(
    get,
    path = "/api/calculator",
    params(CalculatorQuery),
    responses(
        (status = 200, description = "Recommendation and share link", body = ApiResponse<CalculatorResultDto>),
    ),
    tag = "calculator"
)]
pub async fn calculate(
    State(service): State<Arc<CalculatorService>>,
    Query(query): Query<CalculatorQuery>,
) -> Result<Json<ApiResponse<CalculatorResultDto>>> {
    let result = service.calculate(query.insurance_type.as_deref().unwrap_or(""))?;
    Ok(Json(ApiResponse::success(Some(result), None, None)))
}

/// List known insurance types with their recommendations
#[utoipa::path(
    get,
    path = "/api/calculator/types",
    responses(
        (status = 200, description = "Insurance types", body = ApiResponse<Vec<InsuranceTypeDto>>),
    ),
    tag = "calculator"
)]
pub async fn list_types(
    State(service): State<Arc<CalculatorService>>,
) -> Json<ApiResponse<Vec<InsuranceTypeDto>>> {
    Json(ApiResponse::success(Some(service.types()), None, None))
}

/// Decode a share link back into calculator state
#[utoipa::path(
    post,
    path = "/api/calculator/parse",
    request_body = ParseShareLinkDto,
    responses(
        (status = 200, description = "Decoded state", body = ApiResponse<ShareStateDto>),
        (status = 400, description = "Malformed or incomplete link")
    ),
    tag = "calculator"
)]
pub async fn parse_share_link(
    State(service): State<Arc<CalculatorService>>,
    AppJson(dto): AppJson<ParseShareLinkDto>,
) -> Result<Json<ApiResponse<ShareStateDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let state = service.parse(&dto.url)?;
    Ok(Json(ApiResponse::success(Some(state), None, None)))
}
