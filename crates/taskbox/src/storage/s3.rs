//! S3 attachment store.
//!
//! Issues pre-signed PUT URLs scoped to a single object key per todo item.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;
use uuid::Uuid;

use taskbox_core::storage::{AttachmentStore, RepositoryError, Result};

/// S3-backed attachment store.
pub struct S3AttachmentStore {
    client: Client,
    bucket_name: String,
    url_expiration: Duration,
}

impl S3AttachmentStore {
    /// Creates a new store against the given bucket. `url_expiration` bounds
    /// the validity of every issued upload URL.
    pub fn new(client: Client, bucket_name: impl Into<String>, url_expiration: Duration) -> Self {
        Self {
            client,
            bucket_name: bucket_name.into(),
            url_expiration,
        }
    }
}

#[async_trait]
impl AttachmentStore for S3AttachmentStore {
    async fn upload_url(&self, todo_id: Uuid) -> Result<String> {
        let presigning = PresigningConfig::expires_in(self.url_expiration)
            .map_err(|e| RepositoryError::InvalidData(format!("Invalid expiration: {}", e)))?;

        let request = self
            .client
            .put_object()
            .bucket(&self.bucket_name)
            .key(todo_id.to_string())
            .presigned(presigning)
            .await
            .map_err(|e| RepositoryError::QueryFailed(format!("Presigning failed: {}", e)))?;

        Ok(request.uri().to_string())
    }

    fn object_url(&self, todo_id: Uuid) -> String {
        format!(
            "https://{}.s3.amazonaws.com/{}",
            self.bucket_name, todo_id
        )
    }
}
