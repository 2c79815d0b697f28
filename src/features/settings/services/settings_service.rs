use std::sync::Arc;

use crate::core::error::Result;
use crate::features::settings::dtos::{SiteSettingsDto, UpdateSettingsDto};
use crate::features::settings::repository::SettingsRepository;

/// Service for site-wide settings
pub struct SettingsService {
    repo: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self { repo }
    }

    pub async fn get(&self) -> Result<SiteSettingsDto> {
        let rows = self.repo.list().await?;
        Ok(SiteSettingsDto::from_rows(rows))
    }

    /// Upsert the provided keys and return the resulting settings
    pub async fn update(&self, dto: UpdateSettingsDto) -> Result<SiteSettingsDto> {
        let entries = dto.entries();
        if !entries.is_empty() {
            self.repo.upsert(&entries).await?;
            let keys: Vec<&str> = entries.iter().map(|(key, _)| *key).collect();
            tracing::info!("Updated settings: {}", keys.join(", "));
        }
        self.get().await
    }
}
