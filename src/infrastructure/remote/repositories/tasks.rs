use crate::application::ports::TaskRepository;
use crate::domain::entities::Task;
use crate::infrastructure::remote::client::SupabaseClient;
use crate::infrastructure::remote::query::{Query, SortDir};
use crate::infrastructure::remote::rows::TarefaRow;
use crate::shared::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;

const TABLE: &str = "tarefas";
// One query with embedded names, instead of N follow-up lookups.
const SELECT: &str = "*,projeto:projetos(nome,cliente:usuarios(nome)),responsavel:usuarios(id,nome)";

pub struct RemoteTaskRepository {
    client: Arc<SupabaseClient>,
}

impl RemoteTaskRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TaskRepository for RemoteTaskRepository {
    async fn list(&self) -> Result<Vec<Task>, AppError> {
        let rows: Vec<TarefaRow> = self
            .client
            .select_rows(
                TABLE,
                Query::new().select(SELECT).order("criado_em", SortDir::Desc),
            )
            .await?;
        rows.into_iter().map(TarefaRow::into_domain).collect()
    }
}
