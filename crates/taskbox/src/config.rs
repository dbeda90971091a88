use std::{env, time::Duration};

/// Which item-store backend to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// AWS DynamoDB + S3 (production).
    DynamoDb,
    /// Process-local maps and fake upload URLs (local development).
    Memory,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Storage backend selection (default: dynamodb)
    pub storage: StorageBackend,
    /// DynamoDB table holding todo items (default: "taskbox-todos")
    pub table_name: String,
    /// Secondary index keyed on the owner id (default: "GSI1")
    pub owner_index: String,
    /// S3 bucket for item attachments (default: "taskbox-attachments")
    pub bucket_name: String,
    /// Pre-signed upload URL validity in seconds (default: 300)
    pub upload_url_expiration_seconds: u64,
    /// HS256 secret for bearer-token verification.
    pub jwt_secret: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `STORAGE` - `dynamodb` or `memory` (default: dynamodb)
    /// - `TODOS_TABLE` - DynamoDB table name (default: "taskbox-todos")
    /// - `TODOS_OWNER_INDEX` - owner index name (default: "GSI1")
    /// - `ATTACHMENTS_BUCKET` - S3 bucket name (default: "taskbox-attachments")
    /// - `UPLOAD_URL_EXPIRATION` - upload URL validity in seconds (default: 300)
    /// - `JWT_SECRET` - HS256 token verification secret (required at startup)
    pub fn from_env() -> Self {
        let storage = match env::var("STORAGE").as_deref() {
            Ok("memory") => StorageBackend::Memory,
            _ => StorageBackend::DynamoDb,
        };

        Self {
            storage,
            table_name: env::var("TODOS_TABLE").unwrap_or_else(|_| "taskbox-todos".to_string()),
            owner_index: env::var("TODOS_OWNER_INDEX").unwrap_or_else(|_| "GSI1".to_string()),
            bucket_name: env::var("ATTACHMENTS_BUCKET")
                .unwrap_or_else(|_| "taskbox-attachments".to_string()),
            upload_url_expiration_seconds: env::var("UPLOAD_URL_EXPIRATION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            jwt_secret: env::var("JWT_SECRET").ok(),
        }
    }

    /// Get the upload URL validity window as a Duration.
    pub fn upload_url_expiration(&self) -> Duration {
        Duration::from_secs(self.upload_url_expiration_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url_expiration_conversion() {
        let config = Config {
            storage: StorageBackend::Memory,
            table_name: "todos".to_string(),
            owner_index: "GSI1".to_string(),
            bucket_name: "attachments".to_string(),
            upload_url_expiration_seconds: 600,
            jwt_secret: None,
        };

        assert_eq!(config.upload_url_expiration(), Duration::from_secs(600));
    }

    #[test]
    fn test_storage_backend_parsing() {
        // Default is DynamoDB when the variable is unset or unrecognized.
        env::remove_var("STORAGE");
        assert_eq!(Config::from_env().storage, StorageBackend::DynamoDb);

        env::set_var("STORAGE", "memory");
        assert_eq!(Config::from_env().storage, StorageBackend::Memory);
        env::remove_var("STORAGE");
    }
}
