//! DynamoDB repository implementation.
//!
//! Implements `TodoRepository` from `taskbox_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use uuid::Uuid;

use taskbox_core::storage::{RepositoryError, Result, TodoRepository};
use taskbox_core::todo::{OwnerId, TodoItem, TodoPatch};

use super::conversions::{item_to_todo, todo_to_item};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_query_error,
    map_update_item_error,
};
use super::keys;

/// DynamoDB-based repository implementation.
///
/// One table holds all items under the (todo_id, owner_id) composite key;
/// the owner index provides insertion-ordered listing per owner.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
    owner_index: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client, table name,
    /// and owner index name.
    pub fn new(
        client: Client,
        table_name: impl Into<String>,
        owner_index: impl Into<String>,
    ) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            owner_index: owner_index.into(),
        }
    }
}

#[async_trait]
impl TodoRepository for DynamoDbRepository {
    async fn list(&self, owner_id: &OwnerId) -> Result<Vec<TodoItem>> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(&self.owner_index)
            .key_condition_expression("GSI1PK = :pk")
            .expression_attribute_values(":pk", AttributeValue::S(keys::owner_gsi1_pk(owner_id)))
            .send()
            .await
            .map_err(map_query_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_todo).collect()
    }

    async fn get(&self, todo_id: Uuid, owner_id: &OwnerId) -> Result<Option<TodoItem>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::todo_pk(todo_id)))
            .key("SK", AttributeValue::S(keys::todo_sk(owner_id)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_todo(&item)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, item: &TodoItem) -> Result<()> {
        let attributes = todo_to_item(item);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(attributes))
            .condition_expression("attribute_not_exists(PK)")
            .send()
            .await
            .map_err(|e| map_put_item_error(e, "TodoItem", item.todo_id.to_string()))?;

        Ok(())
    }

    async fn update(
        &self,
        todo_id: Uuid,
        owner_id: &OwnerId,
        patch: TodoPatch,
    ) -> Result<TodoItem> {
        if patch.is_empty() {
            // Nothing to write; resolve the current item instead.
            return self.get(todo_id, owner_id).await?.ok_or_else(|| {
                RepositoryError::NotFound {
                    entity_type: "TodoItem",
                    id: todo_id.to_string(),
                }
            });
        }

        let mut update = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::todo_pk(todo_id)))
            .key("SK", AttributeValue::S(keys::todo_sk(owner_id)))
            .condition_expression("attribute_exists(PK)")
            .return_values(ReturnValue::AllNew);

        // Partial overwrite: only the fields present in the patch are
        // written; everything else is untouched.
        let mut assignments = Vec::new();
        if let Some(title) = patch.title {
            assignments.push("#title = :title");
            update = update
                .expression_attribute_names("#title", "title")
                .expression_attribute_values(":title", AttributeValue::S(title));
        }
        if let Some(due_date) = patch.due_date {
            assignments.push("#dueDate = :dueDate");
            update = update
                .expression_attribute_names("#dueDate", "dueDate")
                .expression_attribute_values(
                    ":dueDate",
                    AttributeValue::S(due_date.format("%Y-%m-%d").to_string()),
                );
        }
        if let Some(done) = patch.done {
            assignments.push("#done = :done");
            update = update
                .expression_attribute_names("#done", "done")
                .expression_attribute_values(":done", AttributeValue::Bool(done));
        }

        let result = update
            .update_expression(format!("SET {}", assignments.join(", ")))
            .send()
            .await
            .map_err(|e| map_update_item_error(e, "TodoItem", todo_id.to_string()))?;

        let attributes = result.attributes.ok_or_else(|| {
            RepositoryError::Serialization("UpdateItem returned no attributes".to_string())
        })?;
        item_to_todo(&attributes)
    }

    async fn delete(&self, todo_id: Uuid, owner_id: &OwnerId) -> Result<()> {
        // Unconditional: deleting an absent item is a no-op success.
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::todo_pk(todo_id)))
            .key("SK", AttributeValue::S(keys::todo_sk(owner_id)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }

    async fn set_attachment_url(
        &self,
        todo_id: Uuid,
        owner_id: &OwnerId,
        url: &str,
    ) -> Result<()> {
        self.client
            .update_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::todo_pk(todo_id)))
            .key("SK", AttributeValue::S(keys::todo_sk(owner_id)))
            .condition_expression("attribute_exists(PK)")
            .update_expression("SET attachmentUrl = :attachmentUrl")
            .expression_attribute_values(":attachmentUrl", AttributeValue::S(url.to_string()))
            .send()
            .await
            .map_err(|e| map_update_item_error(e, "TodoItem", todo_id.to_string()))?;

        Ok(())
    }
}
