use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub read: bool,
    pub kind: Option<String>,
    /// Internal app path (`/...`), deep link or external URL.
    pub link: Option<String>,
}
