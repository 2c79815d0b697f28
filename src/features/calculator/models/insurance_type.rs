use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Insurance types the coverage calculator knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InsuranceType {
    Renters,
    Homeowners,
    Auto,
}

impl InsuranceType {
    pub const ALL: [InsuranceType; 3] = [
        InsuranceType::Renters,
        InsuranceType::Homeowners,
        InsuranceType::Auto,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "renters" => Some(InsuranceType::Renters),
            "homeowners" => Some(InsuranceType::Homeowners),
            "auto" => Some(InsuranceType::Auto),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InsuranceType::Renters => "renters",
            InsuranceType::Homeowners => "homeowners",
            InsuranceType::Auto => "auto",
        }
    }

    /// Flat recommended coverage amount
    pub fn recommended_coverage(&self) -> i64 {
        match self {
            InsuranceType::Renters => 30_000,
            InsuranceType::Homeowners => 200_000,
            InsuranceType::Auto => 50_000,
        }
    }
}

/// Recommended coverage for a raw type string; unknown types get 0
pub fn recommend(raw: &str) -> i64 {
    InsuranceType::parse(raw)
        .map(|t| t.recommended_coverage())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_table() {
        assert_eq!(recommend("renters"), 30000);
        assert_eq!(recommend("homeowners"), 200000);
        assert_eq!(recommend("auto"), 50000);
        assert_eq!(recommend("Auto"), 0);
        assert_eq!(recommend("pet"), 0);
        assert_eq!(recommend(""), 0);
    }
}
