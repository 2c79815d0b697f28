use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{map_db_error, Result};
use crate::features::settings::models::Setting;

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Setting>>;

    /// Insert or overwrite each `(key, value)` pair
    async fn upsert(&self, entries: &[(&str, String)]) -> Result<()>;
}

/// Postgres-backed settings repository
pub struct PgSettingsRepository {
    pool: PgPool,
}

impl PgSettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for PgSettingsRepository {
    async fn list(&self) -> Result<Vec<Setting>> {
        sqlx::query_as::<_, Setting>("SELECT key, value, updated_at FROM settings ORDER BY key")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "setting"))
    }

    async fn upsert(&self, entries: &[(&str, String)]) -> Result<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error(e, "setting"))?;

        for (key, value) in entries {
            sqlx::query(
                r#"
                INSERT INTO settings (key, value, updated_at)
                VALUES ($1, $2, NOW())
                ON CONFLICT (key) DO UPDATE
                SET value = EXCLUDED.value, updated_at = NOW()
                "#,
            )
            .bind(*key)
            .bind(value)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_db_error(e, "setting"))?;
        }

        tx.commit().await.map_err(|e| map_db_error(e, "setting"))
    }
}
