use crate::application::ports::{FeedbackDraft, FeedbackRepository};
use crate::domain::entities::{Feedback, FeedbackKind, FeedbackReply, FeedbackStatus};
use crate::infrastructure::remote::client::SupabaseClient;
use crate::infrastructure::remote::query::{Query, SortDir};
use crate::infrastructure::remote::rows::{FeedbackRespostaRow, FeedbackRow};
use crate::shared::error::AppError;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

const TABLE: &str = "feedbacks";
const REPLIES_TABLE: &str = "feedback_respostas";

pub struct RemoteFeedbackRepository {
    client: Arc<SupabaseClient>,
}

impl RemoteFeedbackRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FeedbackRepository for RemoteFeedbackRepository {
    async fn list_by_art(&self, art_id: &str) -> Result<Vec<Feedback>, AppError> {
        let rows: Vec<FeedbackRow> = self
            .client
            .select_rows(
                TABLE,
                Query::new()
                    .select("*")
                    .eq("arte_id", art_id)
                    .order("criado_em", SortDir::Desc),
            )
            .await?;
        rows.into_iter().map(FeedbackRow::into_domain).collect()
    }

    async fn create(&self, draft: FeedbackDraft) -> Result<Feedback, AppError> {
        let body = json!({
            "arte_id": draft.art_id,
            "conteudo": draft.content,
            "tipo": draft.kind.as_wire(),
            "arquivo": draft.file,
            "autor_id": draft.author_id,
            "status": FeedbackStatus::Open.as_wire(),
        });
        let row: FeedbackRow = self.client.insert_returning(TABLE, &body).await?;
        row.into_domain()
    }

    async fn set_status(&self, id: &str, status: FeedbackStatus) -> Result<(), AppError> {
        self.client
            .update(
                TABLE,
                Query::new().eq("id", id),
                &json!({ "status": status.as_wire() }),
            )
            .await?;
        Ok(())
    }

    async fn list_replies(&self, feedback_id: &str) -> Result<Vec<FeedbackReply>, AppError> {
        let rows: Vec<FeedbackRespostaRow> = self
            .client
            .select_rows(
                REPLIES_TABLE,
                Query::new()
                    .select("*")
                    .eq("feedback_id", feedback_id)
                    .order("criado_em", SortDir::Asc),
            )
            .await?;
        rows.into_iter()
            .map(FeedbackRespostaRow::into_domain)
            .collect()
    }

    async fn create_reply(
        &self,
        feedback_id: &str,
        content: &str,
        author_id: Option<&str>,
    ) -> Result<FeedbackReply, AppError> {
        let body = json!({
            "feedback_id": feedback_id,
            "conteudo": content,
            "tipo": FeedbackKind::Text.as_wire(),
            "autor_id": author_id,
        });
        let row: FeedbackRespostaRow = self.client.insert_returning(REPLIES_TABLE, &body).await?;
        row.into_domain()
    }
}
