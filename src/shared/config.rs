use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub remote: RemoteConfig,
    pub sync: SyncConfig,
    pub storage: StorageConfig,
    pub links: LinkConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Supabase project base URL, e.g. `https://xyz.supabase.co`.
    pub url: String,
    pub anon_key: String,
    pub request_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    pub counters_interval: u64,
    pub feedback_window_days: i64,
    pub deadline_window_days: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: String,
    pub uploads_bucket: String,
    pub audio_bucket: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Public web frontend that resolves share tokens.
    pub public_base_url: String,
    pub link_path: String,
    /// Redirect target registered for auth e-mails (magic link, recovery).
    pub auth_redirect_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            remote: RemoteConfig::default(),
            sync: SyncConfig::default(),
            storage: StorageConfig::default(),
            links: LinkConfig::default(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            request_timeout: 30,
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            counters_interval: 300, // 5 minutes
            feedback_window_days: 7,
            deadline_window_days: 7,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        // Platform data dir when the shell provides none.
        let data_dir = dirs::data_dir()
            .map(|dir| dir.join("viu").to_string_lossy().into_owned())
            .unwrap_or_else(|| "./data".to_string());
        Self {
            data_dir,
            uploads_bucket: "uploads".to_string(),
            audio_bucket: "audios".to_string(),
        }
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            public_base_url: "https://viu-frontend.vercel.app".to_string(),
            link_path: "/link/".to_string(),
            auth_redirect_url: "com.viu.app://auth/callback".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("VIU_SUPABASE_URL") {
            cfg.remote.url = v.trim_end_matches('/').to_string();
        }
        if let Ok(v) = std::env::var("VIU_SUPABASE_ANON_KEY") {
            cfg.remote.anon_key = v;
        }
        if let Ok(v) = std::env::var("VIU_REQUEST_TIMEOUT_SECS") {
            if let Some(value) = parse_u64(&v) {
                cfg.remote.request_timeout = value.max(1);
            }
        }
        if let Ok(v) = std::env::var("VIU_COUNTERS_INTERVAL_SECS") {
            if let Some(value) = parse_u64(&v) {
                cfg.sync.counters_interval = value.max(1);
            }
        }
        if let Ok(v) = std::env::var("VIU_DATA_DIR") {
            if !v.trim().is_empty() {
                cfg.storage.data_dir = v;
            }
        }
        if let Ok(v) = std::env::var("VIU_PUBLIC_BASE_URL") {
            cfg.links.public_base_url = v.trim_end_matches('/').to_string();
        }
        if let Ok(v) = std::env::var("VIU_AUTH_REDIRECT_URL") {
            cfg.links.auth_redirect_url = v;
        }

        cfg
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.remote.url.is_empty() {
            return Err("Remote url must be set".to_string());
        }
        if self.remote.anon_key.is_empty() {
            return Err("Remote anon_key must be set".to_string());
        }
        if self.remote.request_timeout == 0 {
            return Err("Remote request_timeout must be greater than 0".to_string());
        }
        if self.sync.counters_interval == 0 {
            return Err("Sync counters_interval must be greater than 0".to_string());
        }
        if !self.links.link_path.starts_with('/') {
            return Err("Links link_path must start with '/'".to_string());
        }
        Ok(())
    }
}

fn parse_u64(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates_once_remote_is_set() {
        let mut cfg = AppConfig::default();
        assert!(cfg.validate().is_err());

        cfg.remote.url = "https://example.supabase.co".into();
        cfg.remote.anon_key = "anon".into();
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn link_path_must_be_rooted() {
        let mut cfg = AppConfig::default();
        cfg.remote.url = "https://example.supabase.co".into();
        cfg.remote.anon_key = "anon".into();
        cfg.links.link_path = "link/".into();
        assert!(cfg.validate().is_err());
    }
}
