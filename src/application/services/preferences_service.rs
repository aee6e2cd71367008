use crate::application::ports::PreferenceStore;
use crate::domain::entities::Preferences;
use crate::shared::error::AppError;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory preferences backed by the on-device store; every change is
/// written through immediately.
pub struct PreferencesService {
    store: Arc<dyn PreferenceStore>,
    current: RwLock<Preferences>,
}

impl PreferencesService {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self {
            store,
            current: RwLock::new(Preferences::default()),
        }
    }

    pub async fn init(&self) -> Result<(), AppError> {
        let loaded = self.store.load().await?;
        *self.current.write().await = loaded;
        Ok(())
    }

    pub async fn current(&self) -> Preferences {
        self.current.read().await.clone()
    }

    pub async fn set_push_enabled(&self, enabled: bool) -> Result<Preferences, AppError> {
        self.apply(|prefs| prefs.push_enabled = enabled).await
    }

    pub async fn set_email_enabled(&self, enabled: bool) -> Result<Preferences, AppError> {
        self.apply(|prefs| prefs.email_enabled = enabled).await
    }

    pub async fn set_analytics_enabled(&self, enabled: bool) -> Result<Preferences, AppError> {
        self.apply(|prefs| prefs.analytics_enabled = enabled).await
    }

    pub async fn toggle_language(&self) -> Result<Preferences, AppError> {
        self.apply(|prefs| prefs.toggle_language()).await
    }

    async fn apply(&self, patch: impl FnOnce(&mut Preferences)) -> Result<Preferences, AppError> {
        let mut current = self.current.write().await;
        let mut next = current.clone();
        patch(&mut next);
        self.store.save(&next).await?;
        *current = next.clone();
        Ok(next)
    }
}
