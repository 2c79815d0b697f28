use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::settings::models::{
    Setting, CONTACT_EMAIL, FOOTER_TEXT, SITE_DESCRIPTION, SITE_TITLE,
};

/// Site-wide settings with defaults for keys that were never saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SiteSettingsDto {
    pub site_title: String,
    pub site_description: String,
    pub contact_email: String,
    pub footer_text: String,
}

impl Default for SiteSettingsDto {
    fn default() -> Self {
        Self {
            site_title: "CoverGuide".to_string(),
            site_description: String::new(),
            contact_email: String::new(),
            footer_text: String::new(),
        }
    }
}

impl SiteSettingsDto {
    /// Fold stored rows over the defaults; unknown keys are ignored
    pub fn from_rows(rows: Vec<Setting>) -> Self {
        let mut settings = Self::default();
        for row in rows {
            match row.key.as_str() {
                SITE_TITLE => settings.site_title = row.value,
                SITE_DESCRIPTION => settings.site_description = row.value,
                CONTACT_EMAIL => settings.contact_email = row.value,
                FOOTER_TEXT => settings.footer_text = row.value,
                other => tracing::debug!("Ignoring unknown setting '{}'", other),
            }
        }
        settings
    }
}

/// Partial settings update; only provided keys are written
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSettingsDto {
    #[validate(length(min = 1, max = 200, message = "Site title must be 1-200 characters"))]
    pub site_title: Option<String>,

    #[validate(length(max = 1000, message = "Site description must not exceed 1000 characters"))]
    pub site_description: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub contact_email: Option<String>,

    #[validate(length(max = 1000, message = "Footer text must not exceed 1000 characters"))]
    pub footer_text: Option<String>,
}

impl UpdateSettingsDto {
    /// Provided values as `(key, value)` pairs
    pub fn entries(self) -> Vec<(&'static str, String)> {
        [
            (SITE_TITLE, self.site_title),
            (SITE_DESCRIPTION, self.site_description),
            (CONTACT_EMAIL, self.contact_email),
            (FOOTER_TEXT, self.footer_text),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v.trim().to_string())))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn row(key: &str, value: &str) -> Setting {
        Setting {
            key: key.to_string(),
            value: value.to_string(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_from_rows_applies_defaults_and_ignores_unknown() {
        let settings = SiteSettingsDto::from_rows(vec![
            row("footer_text", "© CoverGuide"),
            row("theme", "dark"),
        ]);
        assert_eq!(settings.site_title, "CoverGuide");
        assert_eq!(settings.footer_text, "© CoverGuide");
        assert_eq!(settings.contact_email, "");
    }

    #[test]
    fn test_entries_only_includes_provided_keys() {
        let dto = UpdateSettingsDto {
            contact_email: Some(" help@example.com ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            dto.entries(),
            vec![("contact_email", "help@example.com".to_string())]
        );
    }
}
