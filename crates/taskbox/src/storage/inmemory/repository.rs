//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use taskbox_core::storage::{AttachmentStore, RepositoryError, Result, TodoRepository};
use taskbox_core::todo::{OwnerId, TodoItem, TodoPatch};

/// In-memory item store.
///
/// Uses a HashMap keyed by the (todo_id, owner_id) composite key wrapped in
/// `Arc<RwLock<_>>` for thread-safe access. Data is not persisted and will
/// be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    items: Arc<RwLock<HashMap<(Uuid, OwnerId), TodoItem>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryRepository {
    async fn list(&self, owner_id: &OwnerId) -> Result<Vec<TodoItem>> {
        let items = self.items.read().await;
        let mut owned: Vec<TodoItem> = items
            .values()
            .filter(|item| &item.owner_id == owner_id)
            .cloned()
            .collect();
        // Insertion order, same as the owner index sort key.
        owned.sort_by(|a, b| (a.created_at, a.todo_id).cmp(&(b.created_at, b.todo_id)));
        Ok(owned)
    }

    async fn get(&self, todo_id: Uuid, owner_id: &OwnerId) -> Result<Option<TodoItem>> {
        let items = self.items.read().await;
        Ok(items.get(&(todo_id, owner_id.clone())).cloned())
    }

    async fn create(&self, item: &TodoItem) -> Result<()> {
        let mut items = self.items.write().await;
        let key = (item.todo_id, item.owner_id.clone());
        if items.contains_key(&key) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "TodoItem",
                id: item.todo_id.to_string(),
            });
        }
        items.insert(key, item.clone());
        Ok(())
    }

    async fn update(
        &self,
        todo_id: Uuid,
        owner_id: &OwnerId,
        patch: TodoPatch,
    ) -> Result<TodoItem> {
        let mut items = self.items.write().await;
        let item = items
            .get_mut(&(todo_id, owner_id.clone()))
            .ok_or_else(|| RepositoryError::NotFound {
                entity_type: "TodoItem",
                id: todo_id.to_string(),
            })?;
        patch.apply_to(item);
        Ok(item.clone())
    }

    async fn delete(&self, todo_id: Uuid, owner_id: &OwnerId) -> Result<()> {
        let mut items = self.items.write().await;
        // Deleting an absent item is a no-op success.
        items.remove(&(todo_id, owner_id.clone()));
        Ok(())
    }

    async fn set_attachment_url(
        &self,
        todo_id: Uuid,
        owner_id: &OwnerId,
        url: &str,
    ) -> Result<()> {
        let mut items = self.items.write().await;
        let item = items
            .get_mut(&(todo_id, owner_id.clone()))
            .ok_or_else(|| RepositoryError::NotFound {
                entity_type: "TodoItem",
                id: todo_id.to_string(),
            })?;
        item.attachment_url = Some(url.to_string());
        Ok(())
    }
}

/// Attachment store that mints fake pre-signed URLs.
///
/// The URLs share the real store's shape (object key plus expiry and
/// signature query parameters) but sign nothing; every issuance carries a
/// fresh signature token.
#[derive(Debug, Clone)]
pub struct InMemoryAttachmentStore {
    bucket_name: String,
    url_expiration: Duration,
}

impl InMemoryAttachmentStore {
    pub fn new(bucket_name: String, url_expiration: Duration) -> Self {
        Self {
            bucket_name,
            url_expiration,
        }
    }
}

#[async_trait]
impl AttachmentStore for InMemoryAttachmentStore {
    async fn upload_url(&self, todo_id: Uuid) -> Result<String> {
        Ok(format!(
            "{}?X-Amz-Expires={}&X-Amz-Signature={}",
            self.object_url(todo_id),
            self.url_expiration.as_secs(),
            Uuid::new_v4().simple(),
        ))
    }

    fn object_url(&self, todo_id: Uuid) -> String {
        format!("https://{}.s3.amazonaws.com/{}", self.bucket_name, todo_id)
    }
}
