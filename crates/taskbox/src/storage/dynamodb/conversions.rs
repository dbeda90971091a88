//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! domain types. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use taskbox_core::storage::RepositoryError;
use taskbox_core::todo::{OwnerId, TodoItem};

use super::keys;

pub const ENTITY_TYPE_TODO: &str = "TODO";

/// Convert a TodoItem to a DynamoDB item.
pub fn todo_to_item(todo: &TodoItem) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    // Keys
    item.insert(
        "PK".to_string(),
        AttributeValue::S(keys::todo_pk(todo.todo_id)),
    );
    item.insert(
        "SK".to_string(),
        AttributeValue::S(keys::todo_sk(&todo.owner_id)),
    );
    item.insert(
        "GSI1PK".to_string(),
        AttributeValue::S(keys::owner_gsi1_pk(&todo.owner_id)),
    );
    item.insert(
        "GSI1SK".to_string(),
        AttributeValue::S(keys::todo_gsi1_sk(todo.created_at, todo.todo_id)),
    );

    // Entity type
    item.insert(
        "entityType".to_string(),
        AttributeValue::S(ENTITY_TYPE_TODO.to_string()),
    );

    // Data
    item.insert(
        "todoId".to_string(),
        AttributeValue::S(todo.todo_id.to_string()),
    );
    item.insert(
        "ownerId".to_string(),
        AttributeValue::S(todo.owner_id.to_string()),
    );
    item.insert("title".to_string(), AttributeValue::S(todo.title.clone()));
    item.insert(
        "dueDate".to_string(),
        AttributeValue::S(todo.due_date.format("%Y-%m-%d").to_string()),
    );
    item.insert("done".to_string(), AttributeValue::Bool(todo.done));
    item.insert(
        "createdAt".to_string(),
        AttributeValue::S(todo.created_at.to_rfc3339()),
    );
    if let Some(url) = &todo.attachment_url {
        item.insert("attachmentUrl".to_string(), AttributeValue::S(url.clone()));
    }

    item
}

/// Convert a DynamoDB item to a TodoItem.
pub fn item_to_todo(item: &HashMap<String, AttributeValue>) -> Result<TodoItem, RepositoryError> {
    Ok(TodoItem {
        todo_id: get_uuid(item, "todoId")?,
        owner_id: OwnerId::new(get_string(item, "ownerId")?),
        title: get_string(item, "title")?,
        due_date: get_date(item, "dueDate")?,
        done: get_bool(item, "done")?,
        created_at: get_datetime(item, "createdAt")?,
        attachment_url: get_optional_string(item, "attachmentUrl"),
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

/// Get a required boolean attribute.
fn get_bool(item: &HashMap<String, AttributeValue>, key: &str) -> Result<bool, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_bool().ok())
        .copied()
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required UUID attribute.
fn get_uuid(item: &HashMap<String, AttributeValue>, key: &str) -> Result<Uuid, RepositoryError> {
    let s = get_string(item, key)?;
    Uuid::parse_str(&s)
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid UUID {}: {}", key, e)))
}

/// Get a required date attribute (YYYY-MM-DD format).
fn get_date(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<NaiveDate, RepositoryError> {
    let s = get_string(item, key)?;
    NaiveDate::parse_from_str(&s, "%Y-%m-%d")
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid date {}: {}", key, e)))
}

/// Get a required datetime attribute (RFC 3339 format).
fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let s = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_todo() -> TodoItem {
        TodoItem {
            todo_id: Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap(),
            owner_id: OwnerId::new("auth0|u1"),
            title: "Buy milk".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            done: false,
            created_at: DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
                .unwrap()
                .with_timezone(&Utc),
            attachment_url: None,
        }
    }

    #[test]
    fn test_todo_round_trip() {
        let todo = sample_todo();
        let item = todo_to_item(&todo);
        let parsed = item_to_todo(&item).unwrap();

        assert_eq!(parsed, todo);
    }

    #[test]
    fn test_todo_round_trip_with_attachment() {
        let mut todo = sample_todo();
        todo.attachment_url =
            Some("https://taskbox-attachments.s3.amazonaws.com/550e8400".to_string());

        let item = todo_to_item(&todo);
        let parsed = item_to_todo(&item).unwrap();

        assert_eq!(parsed.attachment_url, todo.attachment_url);
    }

    #[test]
    fn test_item_keys() {
        let item = todo_to_item(&sample_todo());

        assert_eq!(
            item["PK"].as_s().unwrap(),
            "TODO#550e8400-e29b-41d4-a716-446655440001"
        );
        assert_eq!(item["SK"].as_s().unwrap(), "OWNER#auth0|u1");
        assert_eq!(item["GSI1PK"].as_s().unwrap(), "OWNER#auth0|u1");
        assert_eq!(item["entityType"].as_s().unwrap(), ENTITY_TYPE_TODO);
    }

    #[test]
    fn test_missing_field_is_invalid_data() {
        let mut item = todo_to_item(&sample_todo());
        item.remove("title");

        let err = item_to_todo(&item).unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidData(_)));
    }

    #[test]
    fn test_bad_date_is_invalid_data() {
        let mut item = todo_to_item(&sample_todo());
        item.insert(
            "dueDate".to_string(),
            AttributeValue::S("01/01/2024".to_string()),
        );

        let err = item_to_todo(&item).unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidData(_)));
    }
}
