//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It holds trait objects for the item store, the
//! attachment store, and the token verifier, so handlers never depend on a
//! concrete backend.

use std::sync::Arc;

use anyhow::Context;
use taskbox_core::auth::{JwtVerifier, TokenVerifier};
use taskbox_core::storage::{AttachmentStore, TodoRepository};

use crate::config::{Config, StorageBackend};
use crate::storage::{
    DynamoDbRepository, InMemoryAttachmentStore, InMemoryRepository, S3AttachmentStore,
};

/// Shared application state.
///
/// This is cloned for each request handler and contains shared resources.
#[derive(Clone)]
pub struct AppState {
    /// Todo item repository.
    pub todos: Arc<dyn TodoRepository>,
    /// Attachment object store.
    pub attachments: Arc<dyn AttachmentStore>,
    /// Bearer-token verifier.
    pub verifier: Arc<dyn TokenVerifier>,
}

impl AppState {
    /// Creates a new AppState from the given parts.
    pub fn new(
        todos: Arc<dyn TodoRepository>,
        attachments: Arc<dyn AttachmentStore>,
        verifier: Arc<dyn TokenVerifier>,
    ) -> Self {
        Self {
            todos,
            attachments,
            verifier,
        }
    }

    /// Creates AppState with the backends selected by the configuration.
    pub async fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
        let secret = config
            .jwt_secret
            .as_deref()
            .context("JWT_SECRET must be set")?;
        let verifier = Arc::new(JwtVerifier::from_secret(secret.as_bytes()));

        match config.storage {
            StorageBackend::DynamoDb => {
                let aws_config =
                    aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
                let dynamodb_client = aws_sdk_dynamodb::Client::new(&aws_config);
                let s3_client = aws_sdk_s3::Client::new(&aws_config);

                let todos = Arc::new(DynamoDbRepository::new(
                    dynamodb_client,
                    config.table_name.clone(),
                    config.owner_index.clone(),
                ));
                let attachments = Arc::new(S3AttachmentStore::new(
                    s3_client,
                    config.bucket_name.clone(),
                    config.upload_url_expiration(),
                ));

                Ok(Self::new(todos, attachments, verifier))
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; data is lost on restart");
                let todos = Arc::new(InMemoryRepository::new());
                let attachments = Arc::new(InMemoryAttachmentStore::new(
                    config.bucket_name.clone(),
                    config.upload_url_expiration(),
                ));

                Ok(Self::new(todos, attachments, verifier))
            }
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================

#[cfg(test)]
mod test_support {
    use super::*;

    use taskbox_core::auth::{AuthError, Result};
    use taskbox_core::todo::OwnerId;

    /// Verifier that treats the raw token as the owner id.
    ///
    /// Lets router tests authenticate as `Bearer u1` without minting real
    /// JWTs. The sentinel token `expired` is rejected to exercise the
    /// verification-failure path.
    pub struct StaticVerifier;

    impl TokenVerifier for StaticVerifier {
        fn verify(&self, token: &str) -> Result<OwnerId> {
            if token == "expired" {
                return Err(AuthError::InvalidToken("token expired".to_string()));
            }
            Ok(OwnerId::new(token))
        }
    }

    impl Default for AppState {
        /// Creates an AppState with in-memory storage for testing.
        fn default() -> Self {
            let todos = Arc::new(InMemoryRepository::new());
            let attachments = Arc::new(InMemoryAttachmentStore::new(
                "taskbox-attachments".to_string(),
                std::time::Duration::from_secs(300),
            ));

            Self::new(todos, attachments, Arc::new(StaticVerifier))
        }
    }
}
