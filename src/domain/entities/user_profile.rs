use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserKind {
    #[serde(rename = "DESIGNER")]
    Designer,
    #[serde(rename = "CLIENTE")]
    Client,
}

impl UserKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "DESIGNER" => Some(Self::Designer),
            "CLIENTE" => Some(Self::Client),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Designer => "DESIGNER",
            Self::Client => "CLIENTE",
        }
    }
}

/// App-level profile row (`usuarios`), linked to the auth user through the
/// `usuario_auth` join table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub active: bool,
    pub kind: UserKind,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ProfileDraft {
    pub name: String,
    pub email: Option<String>,
    pub kind: UserKind,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub phone: Option<Option<String>>,
    pub avatar: Option<Option<String>>,
    pub active: Option<bool>,
}
