use crate::application::ports::SharedLinkRepository;
use crate::domain::entities::{LinkKind, SharedLink, SharedLinkDraft};
use crate::infrastructure::remote::client::SupabaseClient;
use crate::infrastructure::remote::query::{Query, SortDir};
use crate::infrastructure::remote::rows::LinkRow;
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::Arc;

const TABLE: &str = "link_compartilhado";

pub struct RemoteSharedLinkRepository {
    client: Arc<SupabaseClient>,
}

impl RemoteSharedLinkRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SharedLinkRepository for RemoteSharedLinkRepository {
    async fn list(&self) -> Result<Vec<SharedLink>, AppError> {
        let rows: Vec<LinkRow> = self
            .client
            .select_rows(
                TABLE,
                Query::new().select("*").order("criado_em", SortDir::Desc),
            )
            .await?;
        rows.into_iter().map(LinkRow::into_domain).collect()
    }

    async fn create(&self, token: &str, draft: SharedLinkDraft) -> Result<SharedLink, AppError> {
        let (arte_id, projeto_id) = match draft.kind {
            LinkKind::Art => (Some(draft.target_id.as_str()), None),
            LinkKind::Project => (None, Some(draft.target_id.as_str())),
        };
        let body = json!({
            "token": token,
            "tipo": draft.kind.as_wire(),
            "arte_id": arte_id,
            "projeto_id": projeto_id,
            "expira_em": draft.expires_at.map(|d| d.to_rfc3339()),
            "somente_leitura": draft.read_only,
            "can_comment": draft.can_comment,
            "can_download": draft.can_download,
        });
        let row: LinkRow = self.client.insert_returning(TABLE, &body).await?;
        row.into_domain()
    }

    async fn set_flag(&self, id: &str, column: &str, value: bool) -> Result<(), AppError> {
        self.client
            .update(TABLE, Query::new().eq("id", id), &json!({ column: value }))
            .await?;
        Ok(())
    }

    async fn set_expiry(
        &self,
        id: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<(), AppError> {
        self.client
            .update(
                TABLE,
                Query::new().eq("id", id),
                &json!({ "expira_em": expires_at.map(|d| d.to_rfc3339()) }),
            )
            .await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.client.delete(TABLE, Query::new().eq("id", id)).await?;
        Ok(())
    }
}
