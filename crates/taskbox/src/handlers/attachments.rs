//! Attachment upload-URL handler.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use taskbox_core::storage::RepositoryError;

use crate::{context::CurrentOwner, handlers::AppError, state::AppState};

/// Issue a pre-signed upload URL for an item (POST /todos/{todo_id}/attachment).
///
/// Writes the deterministic attachment URL onto the item first, then issues
/// the time-boxed upload URL. Nothing verifies that the upload ever happens.
pub async fn create_attachment(
    CurrentOwner(owner): CurrentOwner,
    State(state): State<AppState>,
    Path(todo_id): Path<Uuid>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    tracing::debug!(todo_id = %todo_id, "Received upload URL request");

    // Confirm existence and ownership before touching the item.
    state
        .todos
        .get(todo_id, &owner)
        .await?
        .ok_or(RepositoryError::NotFound {
            entity_type: "TodoItem",
            id: todo_id.to_string(),
        })?;

    let attachment_url = state.attachments.object_url(todo_id);
    state
        .todos
        .set_attachment_url(todo_id, &owner, &attachment_url)
        .await?;

    let upload_url = state.attachments.upload_url(todo_id).await?;

    tracing::info!(todo_id = %todo_id, "Issued upload URL");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "uploadUrl": upload_url })),
    ))
}
