use crate::application::ports::{ArtRepository, BlobStorage};
use crate::domain::constants::BUCKET_UPLOADS;
use crate::domain::entities::{Art, ArtFile};
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct ArtService {
    repository: Arc<dyn ArtRepository>,
    blobs: Arc<dyn BlobStorage>,
}

impl ArtService {
    pub fn new(repository: Arc<dyn ArtRepository>, blobs: Arc<dyn BlobStorage>) -> Self {
        Self { repository, blobs }
    }

    pub async fn list_by_project(&self, project_id: &str) -> Result<Vec<Art>, AppError> {
        self.repository.list_by_project(project_id).await
    }

    pub async fn get(&self, id: &str) -> Result<Art, AppError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Art {id} not found")))
    }

    pub async fn current_preview(&self, art_id: &str) -> Result<Option<ArtFile>, AppError> {
        self.repository.current_preview(art_id).await
    }

    pub async fn list_files(&self, art_id: &str) -> Result<Vec<ArtFile>, AppError> {
        self.repository.list_files(art_id).await
    }

    /// URL the shell should render for an art: the current preview when one
    /// exists, else the art's own file. Storage paths become public URLs;
    /// values that are already absolute pass through.
    pub async fn display_image(&self, art: &Art) -> Result<Option<String>, AppError> {
        let preview = self.repository.current_preview(&art.id).await?;
        let raw = preview
            .map(|file| file.file)
            .or_else(|| art.file.clone());
        Ok(raw.map(|value| self.resolve_url(&value)))
    }

    fn resolve_url(&self, value: &str) -> String {
        if value.starts_with("http") {
            value.to_string()
        } else {
            self.blobs.public_url(BUCKET_UPLOADS, value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ArtFileKind;
    use async_trait::async_trait;
    use mockall::{mock, predicate::*};

    mock! {
        pub Repo {}

        #[async_trait]
        impl ArtRepository for Repo {
            async fn list_by_project(&self, project_id: &str) -> Result<Vec<Art>, AppError>;
            async fn get(&self, id: &str) -> Result<Option<Art>, AppError>;
            async fn current_preview(&self, art_id: &str) -> Result<Option<ArtFile>, AppError>;
            async fn list_files(&self, art_id: &str) -> Result<Vec<ArtFile>, AppError>;
        }
    }

    mock! {
        pub Blobs {}

        #[async_trait]
        impl BlobStorage for Blobs {
            async fn upload(
                &self,
                bucket: &str,
                path: &str,
                content_type: &str,
                bytes: Vec<u8>,
            ) -> Result<String, AppError>;
            async fn delete(&self, bucket: &str, path: &str) -> Result<(), AppError>;
            fn public_url(&self, bucket: &str, path: &str) -> String;
        }
    }

    fn art(id: &str, file: Option<&str>) -> Art {
        Art {
            id: id.to_string(),
            name: "Logo".to_string(),
            description: None,
            file: file.map(str::to_string),
            kind: "LOGO".to_string(),
            current_version: Some(2),
            current_status: None,
            project_id: "p1".to_string(),
            created_at: "2026-01-10T12:00:00Z".parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn display_image_prefers_the_current_preview() {
        let mut repo = MockRepo::new();
        repo.expect_current_preview().with(eq("a1")).returning(|_| {
            Ok(Some(ArtFile {
                file: "arts/a1/v2.png".to_string(),
                version: 2,
                kind: ArtFileKind::Preview,
            }))
        });
        let mut blobs = MockBlobs::new();
        blobs
            .expect_public_url()
            .with(eq(BUCKET_UPLOADS), eq("arts/a1/v2.png"))
            .returning(|bucket, path| format!("https://cdn.test/{bucket}/{path}"));

        let service = ArtService::new(Arc::new(repo), Arc::new(blobs));
        let url = service
            .display_image(&art("a1", Some("fallback.png")))
            .await
            .unwrap();
        assert_eq!(url.as_deref(), Some("https://cdn.test/uploads/arts/a1/v2.png"));
    }

    #[tokio::test]
    async fn display_image_passes_absolute_urls_through() {
        let mut repo = MockRepo::new();
        repo.expect_current_preview().returning(|_| Ok(None));

        let service = ArtService::new(Arc::new(repo), Arc::new(MockBlobs::new()));
        let url = service
            .display_image(&art("a1", Some("https://cdn.test/x.png")))
            .await
            .unwrap();
        assert_eq!(url.as_deref(), Some("https://cdn.test/x.png"));
    }

    #[tokio::test]
    async fn display_image_is_none_without_preview_or_file() {
        let mut repo = MockRepo::new();
        repo.expect_current_preview().returning(|_| Ok(None));

        let service = ArtService::new(Arc::new(repo), Arc::new(MockBlobs::new()));
        let url = service.display_image(&art("a1", None)).await.unwrap();
        assert!(url.is_none());
    }
}
