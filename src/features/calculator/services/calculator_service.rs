use reqwest::Url;

use crate::core::error::{AppError, Result};
use crate::features::calculator::dtos::{CalculatorResultDto, InsuranceTypeDto, ShareStateDto};
use crate::features::calculator::models::{recommend, InsuranceType};
use crate::shared::constants::TOOLS_PATH;

const TYPE_PARAM: &str = "type";
const COVERAGE_PARAM: &str = "coverage";

/// Coverage calculator and share-link codec
pub struct CalculatorService {
    frontend_url: String,
}

impl CalculatorService {
    pub fn new(frontend_url: impl Into<String>) -> Self {
        Self {
            frontend_url: frontend_url.into(),
        }
    }

    pub fn calculate(&self, insurance_type: &str) -> Result<CalculatorResultDto> {
        let recommended_coverage = recommend(insurance_type);
        let share_link = share_link(&self.frontend_url, insurance_type, recommended_coverage)?;

        Ok(CalculatorResultDto {
            insurance_type: insurance_type.to_string(),
            recommended_coverage,
            share_link,
        })
    }

    pub fn types(&self) -> Vec<InsuranceTypeDto> {
        InsuranceType::ALL
            .iter()
            .map(|t| InsuranceTypeDto {
                insurance_type: *t,
                recommended_coverage: t.recommended_coverage(),
            })
            .collect()
    }

    pub fn parse(&self, url: &str) -> Result<ShareStateDto> {
        parse_share_link(url)
    }
}

/// `{base}/tools?type=..&coverage=..`
pub fn share_link(base: &str, insurance_type: &str, coverage: i64) -> Result<String> {
    let raw = format!("{}{}", base.trim_end_matches('/'), TOOLS_PATH);
    let mut url = Url::parse(&raw)
        .map_err(|e| AppError::Internal(format!("Invalid frontend URL '{}': {}", base, e)))?;

    url.query_pairs_mut()
        .append_pair(TYPE_PARAM, insurance_type)
        .append_pair(COVERAGE_PARAM, &coverage.to_string());

    Ok(url.to_string())
}

/// Inverse of [`share_link`]
pub fn parse_share_link(raw: &str) -> Result<ShareStateDto> {
    let url = Url::parse(raw.trim())
        .map_err(|e| AppError::BadRequest(format!("Invalid share link: {}", e)))?;

    let mut insurance_type = None;
    let mut coverage = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            TYPE_PARAM => insurance_type = Some(value.into_owned()),
            COVERAGE_PARAM => coverage = Some(value.into_owned()),
            _ => {}
        }
    }

    let insurance_type = insurance_type
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::BadRequest("Share link is missing 'type'".to_string()))?;
    let coverage = coverage
        .ok_or_else(|| AppError::BadRequest("Share link is missing 'coverage'".to_string()))?;
    let coverage = coverage.parse::<i64>().map_err(|_| {
        AppError::BadRequest(format!("Coverage '{}' is not a whole number", coverage))
    })?;

    Ok(ShareStateDto {
        matches_recommendation: coverage == recommend(&insurance_type),
        insurance_type,
        coverage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://coverguide.example/";

    #[test]
    fn test_share_link_format() {
        let link = share_link(BASE, "renters", 30000).unwrap();
        assert_eq!(
            link,
            "https://coverguide.example/tools?type=renters&coverage=30000"
        );
    }

    #[test]
    fn test_parse_restores_calculator_state() {
        let service = CalculatorService::new(BASE);
        let result = service.calculate("homeowners").unwrap();
        assert_eq!(result.recommended_coverage, 200000);

        let state = service.parse(&result.share_link).unwrap();
        assert_eq!(state.insurance_type, "homeowners");
        assert_eq!(state.coverage, 200000);
        assert!(state.matches_recommendation);
    }

    #[test]
    fn test_parse_keeps_unknown_type_verbatim() {
        let state =
            parse_share_link("https://coverguide.example/tools?type=pet&coverage=1200").unwrap();
        assert_eq!(state.insurance_type, "pet");
        assert_eq!(state.coverage, 1200);
        assert!(!state.matches_recommendation);
    }

    #[test]
    fn test_parse_rejects_incomplete_links() {
        for link in [
            "https://coverguide.example/tools?coverage=30000",
            "https://coverguide.example/tools?type=auto",
            "https://coverguide.example/tools?type=auto&coverage=lots",
            "not a url",
        ] {
            assert!(
                matches!(parse_share_link(link), Err(AppError::BadRequest(_))),
                "{} should be rejected",
                link
            );
        }
    }

    #[test]
    fn test_unknown_type_recommends_zero() {
        let service = CalculatorService::new(BASE);
        let result = service.calculate("boat").unwrap();
        assert_eq!(result.recommended_coverage, 0);
        assert!(result.share_link.ends_with("type=boat&coverage=0"));
    }
}
