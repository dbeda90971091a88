use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of the user who owns a set of todo items.
///
/// Derived from the `sub` claim of a verified bearer token; never invented
/// by the server and never mutated after an item is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item.
///
/// Identity is the (todo_id, owner_id) composite key; uniqueness is enforced
/// by the backing table's primary-key constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub todo_id: Uuid,
    pub owner_id: OwnerId,
    pub title: String,
    pub due_date: NaiveDate,
    pub done: bool,
    /// Set once at creation; also drives insertion-ordered listing.
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
}

impl TodoItem {
    /// Creates a new item for the given owner with a generated id,
    /// `done = false`, and `created_at = now`.
    pub fn new(owner_id: OwnerId, title: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            todo_id: Uuid::new_v4(),
            owner_id,
            title: title.into(),
            due_date,
            done: false,
            created_at: Utc::now(),
            attachment_url: None,
        }
    }

    /// Sets a specific id for this item (useful for testing).
    pub fn with_todo_id(mut self, id: Uuid) -> Self {
        self.todo_id = id;
        self
    }
}

/// Partial overwrite of a todo item's mutable attributes.
///
/// Fields left as `None` are untouched by the update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub done: Option<bool>,
}

impl TodoPatch {
    /// Returns true if no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.due_date.is_none() && self.done.is_none()
    }

    /// Applies the patch to an existing item.
    pub fn apply_to(self, item: &mut TodoItem) {
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(due_date) = self.due_date {
            item.due_date = due_date;
        }
        if let Some(done) = self.done {
            item.done = done;
        }
    }
}
