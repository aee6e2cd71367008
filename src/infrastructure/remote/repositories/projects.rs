use crate::application::ports::ProjectRepository;
use crate::domain::entities::{Project, ProjectChanges, ProjectDraft};
use crate::infrastructure::remote::client::SupabaseClient;
use crate::infrastructure::remote::query::{Query, SortDir};
use crate::infrastructure::remote::rows::ProjetoRow;
use crate::shared::error::AppError;
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::sync::Arc;

const TABLE: &str = "projetos";

pub struct RemoteProjectRepository {
    client: Arc<SupabaseClient>,
}

impl RemoteProjectRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProjectRepository for RemoteProjectRepository {
    async fn list(&self) -> Result<Vec<Project>, AppError> {
        let rows: Vec<ProjetoRow> = self
            .client
            .select_rows(
                TABLE,
                Query::new().select("*").order("criado_em", SortDir::Desc),
            )
            .await?;
        rows.into_iter().map(ProjetoRow::into_domain).collect()
    }

    async fn get(&self, id: &str) -> Result<Option<Project>, AppError> {
        let mut rows: Vec<ProjetoRow> = self
            .client
            .select_rows(TABLE, Query::new().select("*").eq("id", id).single())
            .await?;
        rows.pop().map(ProjetoRow::into_domain).transpose()
    }

    async fn create(&self, draft: ProjectDraft) -> Result<Project, AppError> {
        let body = json!({
            "nome": draft.name,
            "descricao": draft.description,
            "status": draft.status.as_wire(),
            "prazo": draft.deadline.map(|d| d.to_rfc3339()),
            "orcamento": draft.budget,
            "cliente_id": draft.client_id,
            "designer_id": draft.designer_id,
        });
        let row: ProjetoRow = self.client.insert_returning(TABLE, &body).await?;
        row.into_domain()
    }

    async fn update(&self, id: &str, changes: ProjectChanges) -> Result<(), AppError> {
        let mut body = Map::new();
        if let Some(name) = changes.name {
            body.insert("nome".to_string(), Value::String(name));
        }
        if let Some(description) = changes.description {
            body.insert("descricao".to_string(), json!(description));
        }
        if let Some(status) = changes.status {
            body.insert("status".to_string(), json!(status.as_wire()));
        }
        if let Some(deadline) = changes.deadline {
            body.insert("prazo".to_string(), json!(deadline.map(|d| d.to_rfc3339())));
        }
        if let Some(budget) = changes.budget {
            body.insert("orcamento".to_string(), json!(budget));
        }
        if body.is_empty() {
            return Ok(());
        }
        self.client
            .update(TABLE, Query::new().eq("id", id), &Value::Object(body))
            .await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.client.delete(TABLE, Query::new().eq("id", id)).await?;
        Ok(())
    }
}
