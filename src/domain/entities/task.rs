use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "PENDENTE")]
    Pending,
    #[serde(rename = "EM_ANDAMENTO")]
    InProgress,
    #[serde(rename = "CONCLUIDA")]
    Done,
    #[serde(rename = "CANCELADA")]
    Cancelled,
}

impl TaskStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PENDENTE" => Some(Self::Pending),
            "EM_ANDAMENTO" => Some(Self::InProgress),
            "CONCLUIDA" => Some(Self::Done),
            "CANCELADA" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Pending => "PENDENTE",
            Self::InProgress => "EM_ANDAMENTO",
            Self::Done => "CONCLUIDA",
            Self::Cancelled => "CANCELADA",
        }
    }

    /// Position in the lifecycle, used by the status sort.
    pub fn stage(&self) -> u8 {
        match self {
            Self::Pending => 1,
            Self::InProgress => 2,
            Self::Done => 3,
            Self::Cancelled => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskPriority {
    #[serde(rename = "ALTA")]
    High,
    #[serde(rename = "MEDIA")]
    Medium,
    #[serde(rename = "BAIXA")]
    Low,
}

impl TaskPriority {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ALTA" => Some(Self::High),
            "MEDIA" => Some(Self::Medium),
            "BAIXA" => Some(Self::Low),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::High => "ALTA",
            Self::Medium => "MEDIA",
            Self::Low => "BAIXA",
        }
    }

    /// Explicit rank table; higher sorts first.
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

/// Project names embedded in a task list row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskProjectRef {
    pub name: String,
    pub client_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskUserRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub project: Option<TaskProjectRef>,
    pub responsible: TaskUserRef,
}

impl Task {
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        match self.deadline {
            Some(deadline) => deadline < now && self.status != TaskStatus::Done,
            None => false,
        }
    }

    pub fn days_left(&self, now: DateTime<Utc>) -> Option<i64> {
        self.deadline
            .map(|deadline| (deadline - now).num_days())
    }
}
