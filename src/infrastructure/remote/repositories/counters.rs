use crate::application::ports::CounterQueries;
use crate::domain::entities::{ProjectStatus, TaskStatus};
use crate::infrastructure::remote::client::SupabaseClient;
use crate::infrastructure::remote::query::Query;
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Count-only queries (HEAD + `Prefer: count=exact`); no rows cross the
/// wire for these.
pub struct RemoteCounterQueries {
    client: Arc<SupabaseClient>,
}

impl RemoteCounterQueries {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CounterQueries for RemoteCounterQueries {
    async fn pending_tasks(&self) -> Result<u64, AppError> {
        let query = Query::new().in_(
            "status",
            &[
                TaskStatus::Pending.as_wire(),
                TaskStatus::InProgress.as_wire(),
            ],
        );
        Ok(self.client.count("tarefas", query).await?)
    }

    async fn feedbacks_since(&self, since: DateTime<Utc>) -> Result<u64, AppError> {
        let query = Query::new().gte("criado_em", &since.to_rfc3339());
        Ok(self.client.count("feedbacks", query).await?)
    }

    async fn unread_notifications(&self) -> Result<u64, AppError> {
        let query = Query::new().eq("lida", "false");
        Ok(self.client.count("notificacoes", query).await?)
    }

    async fn projects_due_by(&self, until: DateTime<Utc>) -> Result<u64, AppError> {
        let query = Query::new()
            .eq("status", ProjectStatus::InProgress.as_wire())
            .lte("prazo", &until.to_rfc3339());
        Ok(self.client.count("projetos", query).await?)
    }
}
