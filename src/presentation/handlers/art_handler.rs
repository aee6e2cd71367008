use crate::{
    application::ArtService,
    presentation::dto::art_dto::{ArtFileResponse, ArtResponse},
    shared::error::AppError,
};
use std::sync::Arc;

pub struct ArtHandler {
    art_service: Arc<ArtService>,
}

impl ArtHandler {
    pub fn new(art_service: Arc<ArtService>) -> Self {
        Self { art_service }
    }

    pub async fn list_by_project(&self, project_id: &str) -> Result<Vec<ArtResponse>, AppError> {
        let arts = self.art_service.list_by_project(project_id).await?;
        let mut responses = Vec::with_capacity(arts.len());
        for art in &arts {
            let image = self.art_service.display_image(art).await?;
            responses.push(ArtResponse::from_art(art, image));
        }
        Ok(responses)
    }

    pub async fn get(&self, id: &str) -> Result<ArtResponse, AppError> {
        let art = self.art_service.get(id).await?;
        let image = self.art_service.display_image(&art).await?;
        Ok(ArtResponse::from_art(&art, image))
    }

    pub async fn list_files(&self, art_id: &str) -> Result<Vec<ArtFileResponse>, AppError> {
        let files = self.art_service.list_files(art_id).await?;
        Ok(files.iter().map(ArtFileResponse::from).collect())
    }
}
