use crate::{
    application::{CountersService, PreferencesService},
    presentation::dto::settings_dto::{CountersResponse, PreferencesResponse},
    shared::error::AppError,
};
use std::sync::Arc;

pub struct SettingsHandler {
    preferences_service: Arc<PreferencesService>,
    counters_service: Arc<CountersService>,
}

impl SettingsHandler {
    pub fn new(
        preferences_service: Arc<PreferencesService>,
        counters_service: Arc<CountersService>,
    ) -> Self {
        Self {
            preferences_service,
            counters_service,
        }
    }

    pub async fn preferences(&self) -> PreferencesResponse {
        PreferencesResponse::from(&self.preferences_service.current().await)
    }

    pub async fn set_push_enabled(&self, enabled: bool) -> Result<PreferencesResponse, AppError> {
        let preferences = self.preferences_service.set_push_enabled(enabled).await?;
        Ok(PreferencesResponse::from(&preferences))
    }

    pub async fn set_email_enabled(&self, enabled: bool) -> Result<PreferencesResponse, AppError> {
        let preferences = self.preferences_service.set_email_enabled(enabled).await?;
        Ok(PreferencesResponse::from(&preferences))
    }

    pub async fn set_analytics_enabled(
        &self,
        enabled: bool,
    ) -> Result<PreferencesResponse, AppError> {
        let preferences = self
            .preferences_service
            .set_analytics_enabled(enabled)
            .await?;
        Ok(PreferencesResponse::from(&preferences))
    }

    pub async fn toggle_language(&self) -> Result<PreferencesResponse, AppError> {
        let preferences = self.preferences_service.toggle_language().await?;
        Ok(PreferencesResponse::from(&preferences))
    }

    pub fn counters(&self) -> CountersResponse {
        CountersResponse::from(self.counters_service.current())
    }
}
