use chrono::NaiveDate;
use serde::Deserialize;

use taskbox_core::todo::{OwnerId, TodoItem, TodoPatch};

/// Request payload for creating a new todo item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    pub title: String,
    pub due_date: NaiveDate,
}

impl CreateTodo {
    /// Converts the create request into a TodoItem owned by `owner_id`.
    pub fn into_item(self, owner_id: OwnerId) -> TodoItem {
        TodoItem::new(owner_id, self.title, self.due_date)
    }
}

/// Request payload for updating a todo item.
///
/// Absent fields are left untouched.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub done: Option<bool>,
}

impl UpdateTodo {
    pub fn into_patch(self) -> TodoPatch {
        TodoPatch {
            title: self.title,
            due_date: self.due_date,
            done: self.done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_parses_camel_case_body() {
        let payload: CreateTodo =
            serde_json::from_str(r#"{"title":"Buy milk","dueDate":"2024-01-01"}"#).unwrap();

        assert_eq!(payload.title, "Buy milk");
        assert_eq!(
            payload.due_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn create_requires_due_date() {
        let result = serde_json::from_str::<CreateTodo>(r#"{"title":"Buy milk"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_allows_partial_bodies() {
        let payload: UpdateTodo = serde_json::from_str(r#"{"done":true}"#).unwrap();
        let patch = payload.into_patch();

        assert_eq!(patch.done, Some(true));
        assert!(patch.title.is_none());
        assert!(patch.due_date.is_none());
    }

    #[test]
    fn into_item_fills_generated_fields() {
        let payload: CreateTodo =
            serde_json::from_str(r#"{"title":"Buy milk","dueDate":"2024-01-01"}"#).unwrap();
        let item = payload.into_item(OwnerId::new("u1"));

        assert_eq!(item.owner_id, OwnerId::new("u1"));
        assert!(!item.done);
        assert!(item.attachment_url.is_none());
    }
}
