use super::client::SupabaseClient;
use crate::application::ports::BlobStorage;
use crate::shared::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Supabase Storage adapter. Buckets are public; the upload answer is
/// discarded and the URL is composed locally.
pub struct SupabaseStorage {
    client: Arc<SupabaseClient>,
}

impl SupabaseStorage {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BlobStorage for SupabaseStorage {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, AppError> {
        debug!(bucket = %bucket, path = %path, size = bytes.len(), "uploading object");
        self.client
            .upload_object(bucket, path, content_type, bytes)
            .await
            .map_err(|err| AppError::Storage(err.to_string()))?;
        Ok(self.client.public_object_url(bucket, path))
    }

    async fn delete(&self, bucket: &str, path: &str) -> Result<(), AppError> {
        self.client
            .delete_object(bucket, path)
            .await
            .map_err(|err| AppError::Storage(err.to_string()))
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        self.client.public_object_url(bucket, path)
    }
}
