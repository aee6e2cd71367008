use crate::application::ports::ProjectRepository;
use crate::application::shared::{CollectionStore, ViewState};
use crate::domain::entities::{Project, ProjectChanges, ProjectDraft, ProjectStatus};
use crate::shared::error::AppError;
use crate::shared::validation::require_non_empty;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Dashboard counters derived from the loaded project list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectStats {
    pub total: usize,
    pub in_progress: usize,
    pub done: usize,
    pub paused: usize,
    pub overdue: usize,
}

/// Client-side view filter; never triggers a remote call.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub status: Option<ProjectStatus>,
    pub query: String,
}

pub struct ProjectService {
    repository: Arc<dyn ProjectRepository>,
    store: Arc<CollectionStore<Project>>,
}

impl ProjectService {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self {
            repository,
            store: Arc::new(CollectionStore::new()),
        }
    }

    pub fn store(&self) -> Arc<CollectionStore<Project>> {
        self.store.clone()
    }

    pub async fn view(&self) -> ViewState<Project> {
        self.store.snapshot().await
    }

    pub async fn refresh(&self) -> Result<(), AppError> {
        let gen = self.store.begin_fetch().await;
        match self.repository.list().await {
            Ok(projects) => {
                self.store.apply_refresh(gen, projects).await;
                Ok(())
            }
            Err(err) => {
                self.store.apply_error(gen, err.user_message()).await;
                Err(err)
            }
        }
    }

    pub async fn get(&self, id: &str) -> Result<Project, AppError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project {id} not found")))
    }

    pub async fn create(&self, draft: ProjectDraft) -> Result<Project, AppError> {
        require_non_empty("nome", &draft.name).map_err(AppError::ValidationError)?;
        let project = self.repository.create(draft).await?;
        let created = project.clone();
        self.store.mutate(|items| items.insert(0, created)).await;
        Ok(project)
    }

    pub async fn update(&self, id: &str, changes: ProjectChanges) -> Result<(), AppError> {
        self.repository.update(id, changes).await?;
        self.refresh().await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        let id = id.to_string();
        self.store
            .mutate(move |items| items.retain(|p| p.id != id))
            .await;
        Ok(())
    }

    pub async fn stats(&self, now: DateTime<Utc>) -> ProjectStats {
        project_stats(&self.store.items().await, now)
    }
}

pub fn project_stats(projects: &[Project], now: DateTime<Utc>) -> ProjectStats {
    let mut stats = ProjectStats {
        total: projects.len(),
        ..Default::default()
    };
    for project in projects {
        match project.status {
            ProjectStatus::InProgress => stats.in_progress += 1,
            ProjectStatus::Done => stats.done += 1,
            ProjectStatus::Paused => stats.paused += 1,
        }
        if project.is_overdue(now) {
            stats.overdue += 1;
        }
    }
    stats
}

/// Applies status + free-text filters over the fetched list.
pub fn filter_projects(projects: &[Project], filter: &ProjectFilter) -> Vec<Project> {
    let query = filter.query.trim().to_lowercase();
    projects
        .iter()
        .filter(|p| filter.status.map_or(true, |status| p.status == status))
        .filter(|p| {
            if query.is_empty() {
                return true;
            }
            p.name.to_lowercase().contains(&query)
                || p.description
                    .as_deref()
                    .map_or(false, |d| d.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}
