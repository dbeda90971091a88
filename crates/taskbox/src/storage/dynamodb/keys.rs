//! DynamoDB key generation functions.
//!
//! Pure functions for generating partition and sort keys following the
//! single-table design. All functions are sync and have no side effects.
//!
//! Table layout:
//! - `PK = TODO#<todo_id>`, `SK = OWNER#<owner_id>` - the composite item key
//! - `GSI1PK = OWNER#<owner_id>`, `GSI1SK = TODO#<created_at>#<todo_id>` -
//!   the owner index; the fixed-width RFC 3339 prefix makes the sort key
//!   lexicographically ordered by creation time.

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use taskbox_core::todo::OwnerId;

pub const TODO_PREFIX: &str = "TODO#";
pub const OWNER_PREFIX: &str = "OWNER#";

/// Generate primary partition key for a todo item.
///
/// Pattern: `TODO#<todo_id>`
pub fn todo_pk(todo_id: Uuid) -> String {
    format!("{TODO_PREFIX}{todo_id}")
}

/// Generate primary sort key for a todo item.
///
/// Pattern: `OWNER#<owner_id>`
pub fn todo_sk(owner_id: &OwnerId) -> String {
    format!("{OWNER_PREFIX}{owner_id}")
}

/// Generate GSI1 partition key for the owner listing.
///
/// Pattern: `OWNER#<owner_id>`
pub fn owner_gsi1_pk(owner_id: &OwnerId) -> String {
    format!("{OWNER_PREFIX}{owner_id}")
}

/// Generate GSI1 sort key for the owner listing.
///
/// Pattern: `TODO#<created_at>#<todo_id>`
///
/// The timestamp uses millisecond precision with a `Z` suffix so that all
/// sort keys have the same width and sort by creation time.
pub fn todo_gsi1_sk(created_at: DateTime<Utc>, todo_id: Uuid) -> String {
    format!(
        "{TODO_PREFIX}{}#{todo_id}",
        created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo_id() -> Uuid {
        Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap()
    }

    #[test]
    fn test_todo_pk() {
        assert_eq!(
            todo_pk(todo_id()),
            "TODO#550e8400-e29b-41d4-a716-446655440001"
        );
    }

    #[test]
    fn test_todo_sk() {
        assert_eq!(todo_sk(&OwnerId::new("auth0|u1")), "OWNER#auth0|u1");
    }

    #[test]
    fn test_owner_gsi1_pk() {
        assert_eq!(owner_gsi1_pk(&OwnerId::new("auth0|u1")), "OWNER#auth0|u1");
    }

    #[test]
    fn test_todo_gsi1_sk() {
        let created_at = DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(
            todo_gsi1_sk(created_at, todo_id()),
            "TODO#2024-01-15T10:30:00.000Z#550e8400-e29b-41d4-a716-446655440001"
        );
    }

    #[test]
    fn test_gsi1_sk_orders_by_creation_time() {
        let earlier = DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let later = DateTime::parse_from_rfc3339("2024-01-15T10:30:01Z")
            .unwrap()
            .with_timezone(&Utc);

        assert!(todo_gsi1_sk(earlier, todo_id()) < todo_gsi1_sk(later, todo_id()));
    }
}
