use crate::application::services::task_service::TaskStats;
use crate::domain::entities::Task;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TaskResponse {
    pub id: String,
    pub titulo: String,
    pub status: String,
    pub prioridade: String,
    pub prazo: Option<String>,
    pub dias_restantes: Option<i64>,
    pub atrasada: bool,
    pub projeto: Option<String>,
    pub cliente: Option<String>,
    pub responsavel: String,
}

impl TaskResponse {
    pub fn from_task(task: &Task, now: DateTime<Utc>) -> Self {
        Self {
            id: task.id.clone(),
            titulo: task.title.clone(),
            status: task.status.as_wire().to_string(),
            prioridade: task.priority.as_wire().to_string(),
            prazo: task.deadline.map(|d| d.to_rfc3339()),
            dias_restantes: task.days_left(now),
            atrasada: task.is_overdue(now),
            projeto: task.project.as_ref().map(|p| p.name.clone()),
            cliente: task.project.as_ref().and_then(|p| p.client_name.clone()),
            responsavel: task.responsible.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskStatsResponse {
    pub total: usize,
    pub pendentes: usize,
    pub em_andamento: usize,
    pub concluidas: usize,
    pub atrasadas: usize,
}

impl From<TaskStats> for TaskStatsResponse {
    fn from(stats: TaskStats) -> Self {
        Self {
            total: stats.total,
            pendentes: stats.pending,
            em_andamento: stats.in_progress,
            concluidas: stats.done,
            atrasadas: stats.overdue,
        }
    }
}
