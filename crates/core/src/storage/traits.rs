use async_trait::async_trait;
use uuid::Uuid;

use crate::todo::{OwnerId, TodoItem, TodoPatch};

use super::Result;

/// Repository for todo item operations.
///
/// Every operation is scoped to a single item or a single owner's
/// collection; there are no multi-item transactions and no optimistic
/// concurrency control.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Gets all items for an owner, in insertion order.
    async fn list(&self, owner_id: &OwnerId) -> Result<Vec<TodoItem>>;

    /// Gets an item by its composite (todo_id, owner_id) key.
    ///
    /// Returns `None` both when the item does not exist and when it is
    /// owned by someone else; callers cannot distinguish the two.
    async fn get(&self, todo_id: Uuid, owner_id: &OwnerId) -> Result<Option<TodoItem>>;

    /// Creates a new item. The primary-key constraint is the only
    /// uniqueness guard.
    async fn create(&self, item: &TodoItem) -> Result<()>;

    /// Partially overwrites an item's mutable attributes and returns the
    /// updated item. Fields absent from the patch are untouched.
    async fn update(&self, todo_id: Uuid, owner_id: &OwnerId, patch: TodoPatch)
        -> Result<TodoItem>;

    /// Deletes an item. Deleting an absent item is a no-op success.
    async fn delete(&self, todo_id: Uuid, owner_id: &OwnerId) -> Result<()>;

    /// Writes the deterministic attachment URL onto an item.
    async fn set_attachment_url(&self, todo_id: Uuid, owner_id: &OwnerId, url: &str)
        -> Result<()>;
}

/// Object-store client for item attachments.
#[async_trait]
pub trait AttachmentStore: Send + Sync {
    /// Issues a time-boxed, write-only upload URL for the object keyed by
    /// `todo_id`. Nothing verifies that an upload ever happens.
    async fn upload_url(&self, todo_id: Uuid) -> Result<String>;

    /// The deterministic public URL of the object keyed by `todo_id`.
    fn object_url(&self, todo_id: Uuid) -> String;
}
