use crate::domain::entities::{Art, ArtFile};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ArtResponse {
    pub id: String,
    pub nome: String,
    pub descricao: Option<String>,
    pub tipo: String,
    pub versao_atual: Option<i32>,
    pub status_atual: Option<String>,
    pub projeto_id: String,
    pub criado_em: String,
    /// Resolved public URL of the image to render, when one exists.
    pub imagem: Option<String>,
}

impl ArtResponse {
    pub fn from_art(art: &Art, image: Option<String>) -> Self {
        Self {
            id: art.id.clone(),
            nome: art.name.clone(),
            descricao: art.description.clone(),
            tipo: art.kind.clone(),
            versao_atual: art.current_version,
            status_atual: art.current_status.clone(),
            projeto_id: art.project_id.clone(),
            criado_em: art.created_at.to_rfc3339(),
            imagem: image,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtFileResponse {
    pub arquivo: String,
    pub versao: i32,
    pub tipo: String,
}

impl From<&ArtFile> for ArtFileResponse {
    fn from(file: &ArtFile) -> Self {
        Self {
            arquivo: file.file.clone(),
            versao: file.version,
            tipo: file.kind.as_wire().to_string(),
        }
    }
}
