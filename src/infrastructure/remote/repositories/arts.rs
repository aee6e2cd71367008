use crate::application::ports::ArtRepository;
use crate::domain::entities::{Art, ArtFile, ArtFileKind};
use crate::infrastructure::remote::client::SupabaseClient;
use crate::infrastructure::remote::query::{Query, SortDir};
use crate::infrastructure::remote::rows::{ArteArquivoRow, ArteRow};
use crate::shared::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;

const TABLE: &str = "artes";
const FILES_TABLE: &str = "arte_arquivos";

pub struct RemoteArtRepository {
    client: Arc<SupabaseClient>,
}

impl RemoteArtRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ArtRepository for RemoteArtRepository {
    async fn list_by_project(&self, project_id: &str) -> Result<Vec<Art>, AppError> {
        let rows: Vec<ArteRow> = self
            .client
            .select_rows(
                TABLE,
                Query::new()
                    .select("*")
                    .eq("projeto_id", project_id)
                    .order("versao_atual", SortDir::Desc),
            )
            .await?;
        rows.into_iter().map(ArteRow::into_domain).collect()
    }

    async fn get(&self, id: &str) -> Result<Option<Art>, AppError> {
        let mut rows: Vec<ArteRow> = self
            .client
            .select_rows(TABLE, Query::new().select("*").eq("id", id).single())
            .await?;
        rows.pop().map(ArteRow::into_domain).transpose()
    }

    async fn current_preview(&self, art_id: &str) -> Result<Option<ArtFile>, AppError> {
        let mut rows: Vec<ArteArquivoRow> = self
            .client
            .select_rows(
                FILES_TABLE,
                Query::new()
                    .select("arquivo,versao,kind")
                    .eq("arte_id", art_id)
                    .eq("kind", ArtFileKind::Preview.as_wire())
                    .order("versao", SortDir::Desc)
                    .single(),
            )
            .await?;
        rows.pop().map(ArteArquivoRow::into_domain).transpose()
    }

    async fn list_files(&self, art_id: &str) -> Result<Vec<ArtFile>, AppError> {
        let rows: Vec<ArteArquivoRow> = self
            .client
            .select_rows(
                FILES_TABLE,
                Query::new()
                    .select("arquivo,versao,kind")
                    .eq("arte_id", art_id)
                    .order("versao", SortDir::Desc),
            )
            .await?;
        rows.into_iter().map(ArteArquivoRow::into_domain).collect()
    }
}
