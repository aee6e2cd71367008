use crate::domain::entities::Preferences;
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Local persistence for user preferences.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Missing or unreadable data yields the defaults.
    async fn load(&self) -> Result<Preferences, AppError>;
    async fn save(&self, prefs: &Preferences) -> Result<(), AppError>;
}
