use crate::shared::error::AppError;
use async_trait::async_trait;

/// Object storage for uploaded files (audio feedbacks, art files).
#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Uploads raw bytes and returns the public URL of the stored object.
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, AppError>;
    async fn delete(&self, bucket: &str, path: &str) -> Result<(), AppError>;
    /// Public URL for an object path, without touching the network.
    fn public_url(&self, bucket: &str, path: &str) -> String;
}
