use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkKind {
    #[serde(rename = "ARTE")]
    Art,
    #[serde(rename = "PROJETO")]
    Project,
}

impl LinkKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ARTE" => Some(Self::Art),
            "PROJETO" => Some(Self::Project),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Art => "ARTE",
            Self::Project => "PROJETO",
        }
    }
}

/// Capability record handed out via a client-generated token; the token is
/// the only credential a viewer needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedLink {
    pub id: String,
    pub token: String,
    pub kind: LinkKind,
    pub art_id: Option<String>,
    pub project_id: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub read_only: bool,
    pub can_comment: bool,
    pub can_download: bool,
    pub created_at: DateTime<Utc>,
}

impl SharedLink {
    pub fn target_id(&self) -> Option<&str> {
        match self.kind {
            LinkKind::Art => self.art_id.as_deref(),
            LinkKind::Project => self.project_id.as_deref(),
        }
    }

    /// Human-readable expiry; a missing date is "no expiry", never an
    /// invalid-date rendering.
    pub fn expiry_label(&self) -> String {
        match self.expires_at {
            Some(at) => at.format("%d/%m/%Y").to_string(),
            None => "Sem expiração".to_string(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expires_at, Some(at) if at < now)
    }
}

#[derive(Debug, Clone)]
pub struct SharedLinkDraft {
    pub kind: LinkKind,
    pub target_id: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub read_only: bool,
    pub can_comment: bool,
    pub can_download: bool,
}

/// The three toggleable capability flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkFlag {
    ReadOnly,
    CanComment,
    CanDownload,
}

impl LinkFlag {
    pub fn column(&self) -> &'static str {
        match self {
            Self::ReadOnly => "somente_leitura",
            Self::CanComment => "can_comment",
            Self::CanDownload => "can_download",
        }
    }
}
