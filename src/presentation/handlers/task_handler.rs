use crate::{
    application::{filter_tasks, sort_tasks, TaskFilter, TaskService, TaskSort},
    presentation::dto::task_dto::{TaskResponse, TaskStatsResponse},
    shared::error::AppError,
};
use chrono::Utc;
use std::sync::Arc;

pub struct TaskHandler {
    task_service: Arc<TaskService>,
}

impl TaskHandler {
    pub fn new(task_service: Arc<TaskService>) -> Self {
        Self { task_service }
    }

    pub async fn refresh(&self) -> Result<(), AppError> {
        self.task_service.refresh().await
    }

    pub async fn list(&self, filter: &TaskFilter, sort: TaskSort) -> Vec<TaskResponse> {
        let now = Utc::now();
        let view = self.task_service.view().await;
        let mut tasks = filter_tasks(&view.items, filter);
        sort_tasks(&mut tasks, sort);
        tasks
            .iter()
            .map(|task| TaskResponse::from_task(task, now))
            .collect()
    }

    pub async fn stats(&self) -> TaskStatsResponse {
        TaskStatsResponse::from(self.task_service.stats(Utc::now()).await)
    }
}
