use crate::application::ports::SecureStore;
use crate::shared::error::AppError;
use async_trait::async_trait;
use keyring::Entry;
use std::sync::Arc;
use tracing::debug;

const SERVICE_NAME: &str = "viu";

/// OS keychain storage. Keyring calls are blocking, so they run on the
/// blocking pool.
pub struct KeyringStore;

impl KeyringStore {
    pub fn new() -> Self {
        Self
    }

    fn entry(key: &str) -> Result<Entry, AppError> {
        Entry::new(SERVICE_NAME, key)
            .map_err(|err| AppError::Storage(format!("Failed to open keyring entry: {err}")))
    }
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SecureStore for KeyringStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let key = key.to_string();
        tokio::task::spawn_blocking(move || {
            let entry = Self::entry(&key)?;
            match entry.get_password() {
                Ok(value) => Ok(Some(value)),
                Err(keyring::Error::NoEntry) => Ok(None),
                Err(err) => Err(AppError::Storage(format!(
                    "Failed to read keyring entry: {err}"
                ))),
            }
        })
        .await
        .map_err(|err| AppError::Internal(err.to_string()))?
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let key = key.to_string();
        let value = value.to_string();
        tokio::task::spawn_blocking(move || {
            debug!(key = %key, "writing keyring entry");
            Self::entry(&key)?
                .set_password(&value)
                .map_err(|err| AppError::Storage(format!("Failed to write keyring entry: {err}")))
        })
        .await
        .map_err(|err| AppError::Internal(err.to_string()))?
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        let key = key.to_string();
        tokio::task::spawn_blocking(move || {
            let entry = Self::entry(&key)?;
            match entry.delete_credential() {
                Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
                Err(err) => Err(AppError::Storage(format!(
                    "Failed to delete keyring entry: {err}"
                ))),
            }
        })
        .await
        .map_err(|err| AppError::Internal(err.to_string()))?
    }
}

/// In-memory stand-in used by tests and by shells without a keychain.
#[derive(Default)]
pub struct MemorySecureStore {
    values: Arc<tokio::sync::Mutex<std::collections::HashMap<String, String>>>,
}

impl MemorySecureStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SecureStore for MemorySecureStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.values
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        self.values.lock().await.remove(key);
        Ok(())
    }
}
