use crate::application::ports::CounterQueries;
use crate::shared::config::SyncConfig;
use crate::shared::error::AppError;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Badge counters shown on the dashboard tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub pending_tasks: u64,
    pub recent_feedbacks: u64,
    pub unread_notifications: u64,
    pub due_projects: u64,
}

/// Polls the four count queries in parallel and publishes the result.
/// A failing query keeps its previous value; nothing here ever surfaces an
/// error to the shell.
pub struct CountersService {
    queries: Arc<dyn CounterQueries>,
    config: SyncConfig,
    tx: watch::Sender<Counters>,
}

impl CountersService {
    pub fn new(queries: Arc<dyn CounterQueries>, config: SyncConfig) -> Self {
        let (tx, _) = watch::channel(Counters::default());
        Self {
            queries,
            config,
            tx,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Counters> {
        self.tx.subscribe()
    }

    pub fn current(&self) -> Counters {
        *self.tx.borrow()
    }

    pub async fn poll_once(&self) {
        let now = Utc::now();
        let feedback_since = now - Duration::days(self.config.feedback_window_days);
        let deadline_until = now + Duration::days(self.config.deadline_window_days);

        let (pending, feedbacks, unread, due) = futures::join!(
            self.queries.pending_tasks(),
            self.queries.feedbacks_since(feedback_since),
            self.queries.unread_notifications(),
            self.queries.projects_due_by(deadline_until),
        );

        let previous = self.current();
        let next = Counters {
            pending_tasks: keep_on_error("pending_tasks", pending, previous.pending_tasks),
            recent_feedbacks: keep_on_error("recent_feedbacks", feedbacks, previous.recent_feedbacks),
            unread_notifications: keep_on_error(
                "unread_notifications",
                unread,
                previous.unread_notifications,
            ),
            due_projects: keep_on_error("due_projects", due, previous.due_projects),
        };
        let _ = self.tx.send(next);
    }

    /// Runs `poll_once` immediately, then on the configured interval until
    /// the returned handle is aborted.
    pub fn spawn(self: &Arc<Self>) -> JoinHandle<()> {
        let service = self.clone();
        tokio::spawn(async move {
            let period = std::time::Duration::from_secs(service.config.counters_interval);
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                service.poll_once().await;
            }
        })
    }
}

fn keep_on_error(name: &str, result: Result<u64, AppError>, previous: u64) -> u64 {
    match result {
        Ok(count) => count,
        Err(err) => {
            debug!(counter = name, error = %err, "counter query failed, keeping previous");
            previous
        }
    }
}
