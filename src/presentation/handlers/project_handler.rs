use crate::{
    application::{filter_projects, ProjectFilter, ProjectService},
    presentation::dto::{
        project_dto::{
            CreateProjectRequest, ProjectResponse, ProjectStatsResponse, UpdateProjectRequest,
        },
        Validate,
    },
    shared::error::AppError,
};
use chrono::Utc;
use std::sync::Arc;

pub struct ProjectHandler {
    project_service: Arc<ProjectService>,
}

impl ProjectHandler {
    pub fn new(project_service: Arc<ProjectService>) -> Self {
        Self { project_service }
    }

    pub async fn refresh(&self) -> Result<(), AppError> {
        self.project_service.refresh().await
    }

    /// Loaded projects after the client-side filter, newest first.
    pub async fn list(&self, filter: &ProjectFilter) -> Vec<ProjectResponse> {
        let now = Utc::now();
        let view = self.project_service.view().await;
        filter_projects(&view.items, filter)
            .iter()
            .map(|project| ProjectResponse::from_project(project, now))
            .collect()
    }

    pub async fn get(&self, id: &str) -> Result<ProjectResponse, AppError> {
        let project = self.project_service.get(id).await?;
        Ok(ProjectResponse::from_project(&project, Utc::now()))
    }

    pub async fn create(&self, request: CreateProjectRequest) -> Result<ProjectResponse, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;

        let project = self.project_service.create(request.into_draft()).await?;
        Ok(ProjectResponse::from_project(&project, Utc::now()))
    }

    pub async fn update(&self, id: &str, request: UpdateProjectRequest) -> Result<(), AppError> {
        request.validate().map_err(AppError::InvalidInput)?;
        self.project_service.update(id, request.into_changes()).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.project_service.delete(id).await
    }

    pub async fn stats(&self) -> ProjectStatsResponse {
        ProjectStatsResponse::from(self.project_service.stats(Utc::now()).await)
    }
}
