use super::Validate;
use crate::application::services::project_service::ProjectStats;
use crate::domain::entities::{Project, ProjectChanges, ProjectDraft, ProjectStatus};
use crate::shared::validation::require_non_empty;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectRequest {
    pub nome: String,
    pub descricao: Option<String>,
    pub status: Option<String>,
    pub prazo: Option<DateTime<Utc>>,
    pub orcamento: Option<f64>,
    pub cliente_id: Option<String>,
    pub designer_id: Option<String>,
}

impl Validate for CreateProjectRequest {
    fn validate(&self) -> Result<(), String> {
        require_non_empty("nome", &self.nome)?;
        if let Some(status) = &self.status {
            if ProjectStatus::parse(status).is_none() {
                return Err(format!("unknown project status: {status}"));
            }
        }
        Ok(())
    }
}

impl CreateProjectRequest {
    pub fn into_draft(self) -> ProjectDraft {
        ProjectDraft {
            name: self.nome,
            description: self.descricao,
            status: self
                .status
                .as_deref()
                .and_then(ProjectStatus::parse)
                .unwrap_or(ProjectStatus::InProgress),
            deadline: self.prazo,
            budget: self.orcamento,
            client_id: self.cliente_id,
            designer_id: self.designer_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProjectRequest {
    pub nome: Option<String>,
    pub descricao: Option<Option<String>>,
    pub status: Option<String>,
    pub prazo: Option<Option<DateTime<Utc>>>,
    pub orcamento: Option<Option<f64>>,
}

impl UpdateProjectRequest {
    pub fn into_changes(self) -> ProjectChanges {
        ProjectChanges {
            name: self.nome,
            description: self.descricao,
            status: self.status.as_deref().and_then(ProjectStatus::parse),
            deadline: self.prazo,
            budget: self.orcamento,
        }
    }
}

impl Validate for UpdateProjectRequest {
    fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.nome {
            require_non_empty("nome", name)?;
        }
        if let Some(status) = &self.status {
            if ProjectStatus::parse(status).is_none() {
                return Err(format!("unknown project status: {status}"));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectResponse {
    pub id: String,
    pub nome: String,
    pub descricao: Option<String>,
    pub status: String,
    pub prazo: Option<String>,
    pub orcamento: Option<f64>,
    pub cliente_id: Option<String>,
    pub atrasado: bool,
}

impl ProjectResponse {
    pub fn from_project(project: &Project, now: DateTime<Utc>) -> Self {
        Self {
            id: project.id.clone(),
            nome: project.name.clone(),
            descricao: project.description.clone(),
            status: project.status.as_wire().to_string(),
            prazo: project.deadline.map(|d| d.to_rfc3339()),
            orcamento: project.budget,
            cliente_id: project.client_id.clone(),
            atrasado: project.is_overdue(now),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectStatsResponse {
    pub total: usize,
    pub em_andamento: usize,
    pub concluidos: usize,
    pub pausados: usize,
    pub atrasados: usize,
}

impl From<ProjectStats> for ProjectStatsResponse {
    fn from(stats: ProjectStats) -> Self {
        Self {
            total: stats.total,
            em_andamento: stats.in_progress,
            concluidos: stats.done,
            pausados: stats.paused,
            atrasados: stats.overdue,
        }
    }
}
