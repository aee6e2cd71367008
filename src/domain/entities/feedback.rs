use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackKind {
    #[serde(rename = "TEXTO")]
    Text,
    #[serde(rename = "AUDIO")]
    Audio,
}

impl FeedbackKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "TEXTO" => Some(Self::Text),
            "AUDIO" => Some(Self::Audio),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Text => "TEXTO",
            Self::Audio => "AUDIO",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackStatus {
    #[serde(rename = "ABERTO")]
    Open,
    #[serde(rename = "EM_ANALISE")]
    InReview,
    #[serde(rename = "RESOLVIDO")]
    Resolved,
    #[serde(rename = "ARQUIVADO")]
    Archived,
}

impl FeedbackStatus {
    pub const ALL: [FeedbackStatus; 4] = [
        Self::Open,
        Self::InReview,
        Self::Resolved,
        Self::Archived,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ABERTO" => Some(Self::Open),
            "EM_ANALISE" => Some(Self::InReview),
            "RESOLVIDO" => Some(Self::Resolved),
            "ARQUIVADO" => Some(Self::Archived),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Open => "ABERTO",
            Self::InReview => "EM_ANALISE",
            Self::Resolved => "RESOLVIDO",
            Self::Archived => "ARQUIVADO",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub content: String,
    pub kind: FeedbackKind,
    /// Audio URL or attachment path; `None` for plain text feedback.
    pub file: Option<String>,
    pub position_x: Option<f64>,
    pub position_y: Option<f64>,
    pub art_id: String,
    pub author_id: Option<String>,
    pub status: FeedbackStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackReply {
    pub id: String,
    pub content: String,
    pub kind: FeedbackKind,
    pub file: Option<String>,
    pub author_id: Option<String>,
    pub feedback_id: String,
    pub created_at: DateTime<Utc>,
}
