use crate::application::ports::PreferenceStore;
use crate::domain::constants::PREFS_KEY;
use crate::domain::entities::Preferences;
use crate::shared::error::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::{fs, sync::Mutex};
use tracing::warn;

/// Key/value JSON document under the data dir. Preferences live under one
/// key; unknown keys from older builds are carried along untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KvDocument {
    entries: HashMap<String, serde_json::Value>,
}

pub struct JsonPreferenceStore {
    doc_path: PathBuf,
    document: Mutex<KvDocument>,
}

impl JsonPreferenceStore {
    pub async fn new(data_dir: impl AsRef<Path>) -> Result<Self, AppError> {
        let data_dir = data_dir.as_ref();
        fs::create_dir_all(data_dir)
            .await
            .map_err(|err| AppError::Storage(format!("Failed to create data dir: {err}")))?;

        let doc_path = data_dir.join("prefs.json");
        let document = if fs::metadata(&doc_path).await.is_ok() {
            let bytes = fs::read(&doc_path)
                .await
                .map_err(|err| AppError::Storage(format!("Failed to read prefs doc: {err}")))?;
            if bytes.is_empty() {
                KvDocument::default()
            } else {
                match serde_json::from_slice(&bytes) {
                    Ok(doc) => doc,
                    Err(err) => {
                        warn!(error = %err, "prefs doc unreadable, starting fresh");
                        KvDocument::default()
                    }
                }
            }
        } else {
            KvDocument::default()
        };

        Ok(Self {
            doc_path,
            document: Mutex::new(document),
        })
    }

    async fn persist(&self, document: &KvDocument) -> Result<(), AppError> {
        let bytes = serde_json::to_vec_pretty(document)
            .map_err(|err| AppError::SerializationError(err.to_string()))?;
        fs::write(&self.doc_path, bytes)
            .await
            .map_err(|err| AppError::Storage(format!("Failed to write prefs doc: {err}")))?;
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for JsonPreferenceStore {
    async fn load(&self) -> Result<Preferences, AppError> {
        let document = self.document.lock().await;
        match document.entries.get(PREFS_KEY) {
            Some(value) => match serde_json::from_value(value.clone()) {
                Ok(prefs) => Ok(prefs),
                Err(err) => {
                    warn!(error = %err, "stored preferences unreadable, using defaults");
                    Ok(Preferences::default())
                }
            },
            None => Ok(Preferences::default()),
        }
    }

    async fn save(&self, prefs: &Preferences) -> Result<(), AppError> {
        let mut document = self.document.lock().await;
        let value = serde_json::to_value(prefs)
            .map_err(|err| AppError::SerializationError(err.to_string()))?;
        document.entries.insert(PREFS_KEY.to_string(), value);
        self.persist(&document).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonPreferenceStore::new(dir.path()).await.unwrap();

        let mut prefs = Preferences::default();
        prefs.push_enabled = false;
        prefs.language = "en-US".to_string();
        store.save(&prefs).await.unwrap();

        // fresh instance reads what the previous one wrote
        let reopened = JsonPreferenceStore::new(dir.path()).await.unwrap();
        let loaded = reopened.load().await.unwrap();
        assert!(!loaded.push_enabled);
        assert_eq!(loaded.language, "en-US");
    }

    #[tokio::test]
    async fn missing_document_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonPreferenceStore::new(dir.path()).await.unwrap();
        let loaded = store.load().await.unwrap();
        assert!(loaded.push_enabled);
        assert_eq!(loaded.language, "pt-BR");
    }

    #[tokio::test]
    async fn corrupt_document_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("prefs.json"), b"not json")
            .await
            .unwrap();
        let store = JsonPreferenceStore::new(dir.path()).await.unwrap();
        let loaded = store.load().await.unwrap();
        assert!(loaded.email_enabled);
    }
}
