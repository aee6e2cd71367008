use crate::application::ports::UserRepository;
use crate::domain::entities::{ProfileChanges, ProfileDraft, UserKind, UserProfile};
use crate::infrastructure::remote::client::SupabaseClient;
use crate::infrastructure::remote::query::{Query, SortDir};
use crate::infrastructure::remote::rows::{UsuarioAuthRow, UsuarioRow};
use crate::shared::error::AppError;
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::sync::Arc;

const TABLE: &str = "usuarios";
const AUTH_LINK_TABLE: &str = "usuario_auth";

pub struct RemoteUserRepository {
    client: Arc<SupabaseClient>,
}

impl RemoteUserRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserRepository for RemoteUserRepository {
    async fn list_clients(&self) -> Result<Vec<UserProfile>, AppError> {
        let rows: Vec<UsuarioRow> = self
            .client
            .select_rows(
                TABLE,
                Query::new()
                    .select("*")
                    .eq("tipo", UserKind::Client.as_wire())
                    .order("nome", SortDir::Asc),
            )
            .await?;
        rows.into_iter().map(UsuarioRow::into_domain).collect()
    }

    async fn get(&self, id: &str) -> Result<Option<UserProfile>, AppError> {
        let mut rows: Vec<UsuarioRow> = self
            .client
            .select_rows(TABLE, Query::new().select("*").eq("id", id).single())
            .await?;
        rows.pop().map(UsuarioRow::into_domain).transpose()
    }

    async fn find_by_auth_user(&self, auth_user_id: &str) -> Result<Option<UserProfile>, AppError> {
        let mut links: Vec<UsuarioAuthRow> = self
            .client
            .select_rows(
                AUTH_LINK_TABLE,
                Query::new()
                    .select("usuario_id")
                    .eq("auth_user_id", auth_user_id)
                    .single(),
            )
            .await?;
        match links.pop() {
            Some(link) => self.get(&link.usuario_id).await,
            None => Ok(None),
        }
    }

    async fn create_profile(&self, draft: ProfileDraft) -> Result<UserProfile, AppError> {
        let body = json!({
            "nome": draft.name,
            "email": draft.email,
            "tipo": draft.kind.as_wire(),
            "ativo": true,
        });
        let row: UsuarioRow = self.client.insert_returning(TABLE, &body).await?;
        row.into_domain()
    }

    async fn link_auth_user(&self, usuario_id: &str, auth_user_id: &str) -> Result<(), AppError> {
        self.client
            .insert(
                AUTH_LINK_TABLE,
                &json!({ "usuario_id": usuario_id, "auth_user_id": auth_user_id }),
            )
            .await?;
        Ok(())
    }

    async fn update_profile(&self, id: &str, changes: ProfileChanges) -> Result<(), AppError> {
        let mut body = Map::new();
        if let Some(name) = changes.name {
            body.insert("nome".to_string(), Value::String(name));
        }
        if let Some(phone) = changes.phone {
            body.insert("telefone".to_string(), json!(phone));
        }
        if let Some(avatar) = changes.avatar {
            body.insert("avatar".to_string(), json!(avatar));
        }
        if let Some(active) = changes.active {
            body.insert("ativo".to_string(), Value::Bool(active));
        }
        if body.is_empty() {
            return Ok(());
        }
        self.client
            .update(TABLE, Query::new().eq("id", id), &Value::Object(body))
            .await?;
        Ok(())
    }
}
