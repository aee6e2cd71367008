use crate::application::ports::TaskRepository;
use crate::application::shared::{CollectionStore, ViewState};
use crate::domain::entities::{Task, TaskPriority, TaskStatus};
use crate::shared::error::AppError;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub responsible_id: Option<String>,
    pub query: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSort {
    /// Deadline ascending; tasks without a deadline go last.
    Deadline,
    /// ALTA before MEDIA before BAIXA.
    Priority,
    Title,
    /// Stage order: pending, in progress, done, cancelled.
    Status,
    Newest,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub done: usize,
    pub overdue: usize,
}

pub struct TaskService {
    repository: Arc<dyn TaskRepository>,
    store: Arc<CollectionStore<Task>>,
}

impl TaskService {
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self {
            repository,
            store: Arc::new(CollectionStore::new()),
        }
    }

    pub async fn view(&self) -> ViewState<Task> {
        self.store.snapshot().await
    }

    pub async fn refresh(&self) -> Result<(), AppError> {
        let gen = self.store.begin_fetch().await;
        match self.repository.list().await {
            Ok(tasks) => {
                self.store.apply_refresh(gen, tasks).await;
                Ok(())
            }
            Err(err) => {
                self.store.apply_error(gen, err.user_message()).await;
                Err(err)
            }
        }
    }

    pub async fn stats(&self, now: DateTime<Utc>) -> TaskStats {
        task_stats(&self.store.items().await, now)
    }
}

pub fn task_stats(tasks: &[Task], now: DateTime<Utc>) -> TaskStats {
    let mut stats = TaskStats {
        total: tasks.len(),
        ..Default::default()
    };
    for task in tasks {
        match task.status {
            TaskStatus::Pending => stats.pending += 1,
            TaskStatus::InProgress => stats.in_progress += 1,
            TaskStatus::Done => stats.done += 1,
            TaskStatus::Cancelled => {}
        }
        if task.is_overdue(now) {
            stats.overdue += 1;
        }
    }
    stats
}

pub fn filter_tasks(tasks: &[Task], filter: &TaskFilter) -> Vec<Task> {
    let query = filter.query.trim().to_lowercase();
    tasks
        .iter()
        .filter(|t| filter.status.map_or(true, |s| t.status == s))
        .filter(|t| filter.priority.map_or(true, |p| t.priority == p))
        .filter(|t| {
            filter
                .responsible_id
                .as_deref()
                .map_or(true, |id| t.responsible.id == id)
        })
        .filter(|t| {
            if query.is_empty() {
                return true;
            }
            t.title.to_lowercase().contains(&query)
                || t.description
                    .as_deref()
                    .map_or(false, |d| d.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

/// Sorts in place; every ordering breaks ties on id for a stable display.
pub fn sort_tasks(tasks: &mut [Task], sort: TaskSort) {
    tasks.sort_by(|a, b| {
        let ordering = match sort {
            TaskSort::Deadline => match (a.deadline, b.deadline) {
                (Some(da), Some(db)) => da.cmp(&db),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            TaskSort::Priority => b.priority.rank().cmp(&a.priority.rank()),
            TaskSort::Title => a.title.cmp(&b.title),
            TaskSort::Status => a.status.stage().cmp(&b.status.stage()),
            TaskSort::Newest => b.created_at.cmp(&a.created_at),
        };
        ordering.then_with(|| a.id.cmp(&b.id))
    });
}
