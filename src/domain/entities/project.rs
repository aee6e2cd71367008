use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "EM_ANDAMENTO")]
    InProgress,
    #[serde(rename = "CONCLUIDO")]
    Done,
    #[serde(rename = "PAUSADO")]
    Paused,
}

impl ProjectStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "EM_ANDAMENTO" => Some(Self::InProgress),
            "CONCLUIDO" => Some(Self::Done),
            "PAUSADO" => Some(Self::Paused),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::InProgress => "EM_ANDAMENTO",
            Self::Done => "CONCLUIDO",
            Self::Paused => "PAUSADO",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub deadline: Option<DateTime<Utc>>,
    pub budget: Option<f64>,
    pub client_id: Option<String>,
    pub designer_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        match (self.status, self.deadline) {
            (ProjectStatus::Done, _) => false,
            (_, Some(deadline)) => deadline < now,
            _ => false,
        }
    }
}

/// Fields accepted when creating a project.
#[derive(Debug, Clone)]
pub struct ProjectDraft {
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub deadline: Option<DateTime<Utc>>,
    pub budget: Option<f64>,
    pub client_id: Option<String>,
    pub designer_id: Option<String>,
}

/// Partial update; `None` fields are left untouched remotely.
#[derive(Debug, Clone, Default)]
pub struct ProjectChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<ProjectStatus>,
    pub deadline: Option<Option<DateTime<Utc>>>,
    pub budget: Option<Option<f64>>,
}
