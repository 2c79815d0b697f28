use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// One row of the flat key/value settings table
#[derive(Debug, Clone, FromRow)]
pub struct Setting {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

pub const SITE_TITLE: &str = "site_title";
pub const SITE_DESCRIPTION: &str = "site_description";
pub const CONTACT_EMAIL: &str = "contact_email";
pub const FOOTER_TEXT: &str = "footer_text";
