//! Game settings service. One fixed row; partial updates fill in the
//! current values for whatever the caller leaves out.

use std::sync::Arc;
use tracing::info;

use crate::domain::error::DomainError;
use crate::storage::DbConnection;
use shared::{Settings, SettingsResponse, UpdateSettingsRequest};

#[derive(Clone)]
pub struct SettingsService {
    db: Arc<DbConnection>,
}

impl SettingsService {
    pub fn new(db: Arc<DbConnection>) -> Self {
        Self { db }
    }

    pub async fn get_settings(&self) -> Result<Settings, DomainError> {
        Ok(self.db.get_settings().await?)
    }

    pub async fn apply_settings(
        &self,
        request: UpdateSettingsRequest,
    ) -> Result<SettingsResponse, DomainError> {
        let current = self.db.get_settings().await?;
        let settings = Settings {
            difficulty: request.difficulty.unwrap_or(current.difficulty),
            audio: request.audio.unwrap_or(current.audio),
        };

        self.db.update_settings(&settings).await?;
        info!("Settings applied: difficulty={}, audio={}", settings.difficulty, settings.audio);

        Ok(SettingsResponse {
            settings,
            success_message: "Settings applied successfully".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let db = Arc::new(DbConnection::init_test().await.unwrap());
        let service = SettingsService::new(db);

        let initial = service.get_settings().await.unwrap();
        assert_eq!(initial.difficulty, "normal");

        let response = service
            .apply_settings(UpdateSettingsRequest {
                difficulty: Some("hard".to_string()),
                audio: None,
            })
            .await
            .unwrap();
        assert_eq!(response.settings.difficulty, "hard");
        assert_eq!(response.settings.audio, initial.audio);

        let stored = service.get_settings().await.unwrap();
        assert_eq!(stored, response.settings);
    }
}
