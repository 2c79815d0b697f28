use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::calculator::models::InsuranceType;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct CalculatorQuery {
    /// `renters`, `homeowners` or `auto`
    #[serde(rename = "type", default)]
    pub insurance_type: Option<String>,
}

/// Recommendation plus a link that reopens the tools page with it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CalculatorResultDto {
    pub insurance_type: String,
    pub recommended_coverage: i64,
    pub share_link: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ParseShareLinkDto {
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,
}

/// Calculator state decoded from a share link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShareStateDto {
    /// Exactly as encoded; may not be a known type
    pub insurance_type: String,
    pub coverage: i64,
    /// Whether `coverage` equals the current recommendation for the type
    pub matches_recommendation: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InsuranceTypeDto {
    pub insurance_type: InsuranceType,
    pub recommended_coverage: i64,
}
