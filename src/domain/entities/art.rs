use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Art {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Storage path or full URL of the main file.
    pub file: Option<String>,
    pub kind: String,
    pub current_version: Option<i32>,
    pub current_status: Option<String>,
    pub project_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtFileKind {
    #[serde(rename = "PREVIEW")]
    Preview,
    #[serde(rename = "FONTE")]
    Source,
    #[serde(rename = "ANEXO")]
    Attachment,
}

impl ArtFileKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PREVIEW" => Some(Self::Preview),
            "FONTE" => Some(Self::Source),
            "ANEXO" => Some(Self::Attachment),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Preview => "PREVIEW",
            Self::Source => "FONTE",
            Self::Attachment => "ANEXO",
        }
    }
}

/// One versioned file row attached to an art.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtFile {
    pub file: String,
    pub version: i32,
    pub kind: ArtFileKind,
}
