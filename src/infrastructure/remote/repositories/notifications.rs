use crate::application::ports::{NotificationRepository, PageWindow};
use crate::domain::entities::Notification;
use crate::infrastructure::remote::client::SupabaseClient;
use crate::infrastructure::remote::query::{Query, SortDir};
use crate::infrastructure::remote::rows::NotificacaoRow;
use crate::shared::error::AppError;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

const TABLE: &str = "notificacoes";

pub struct RemoteNotificationRepository {
    client: Arc<SupabaseClient>,
}

impl RemoteNotificationRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NotificationRepository for RemoteNotificationRepository {
    async fn list_page(
        &self,
        window: PageWindow,
        only_unread: bool,
    ) -> Result<Vec<Notification>, AppError> {
        let mut query = Query::new()
            .select("*")
            .order("criado_em", SortDir::Desc)
            .range(window.from, window.to);
        if only_unread {
            query = query.eq("lida", "false");
        }
        let rows: Vec<NotificacaoRow> = self.client.select_rows(TABLE, query).await?;
        Ok(rows.into_iter().map(NotificacaoRow::into_domain).collect())
    }

    async fn set_read(&self, id: &str, read: bool) -> Result<(), AppError> {
        self.client
            .update(TABLE, Query::new().eq("id", id), &json!({ "lida": read }))
            .await?;
        Ok(())
    }

    async fn mark_all_read(&self) -> Result<(), AppError> {
        self.client
            .update(
                TABLE,
                Query::new().eq("lida", "false"),
                &json!({ "lida": true }),
            )
            .await?;
        Ok(())
    }
}
