//! Todo CRUD handlers.
//!
//! Each handler derives the owner from the bearer token, performs one store
//! operation, and shapes the response. Mutating routes resolve the item
//! first; a miss (absent or owned by someone else) is a single,
//! undistinguished 404.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use taskbox_core::storage::RepositoryError;

use crate::{
    context::CurrentOwner,
    handlers::AppError,
    models::{CreateTodo, UpdateTodo},
    state::AppState,
};

/// Error response with message (for body validation errors).
fn error_response(
    status: StatusCode,
    message: impl Into<String>,
) -> (StatusCode, Json<serde_json::Value>) {
    let msg = message.into();
    tracing::warn!(status = %status, message = %msg, "API error");
    (status, Json(serde_json::json!({ "error": msg })))
}

fn not_found(todo_id: Uuid) -> AppError {
    AppError(
        RepositoryError::NotFound {
            entity_type: "TodoItem",
            id: todo_id.to_string(),
        }
        .into(),
    )
}

// ============================================================================
// List Todos
// ============================================================================

/// List the caller's items (GET /todos).
pub async fn list_todos(
    CurrentOwner(owner): CurrentOwner,
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let items = state.todos.list(&owner).await?;

    tracing::debug!(owner = %owner, count = items.len(), "Listed todos");

    Ok(Json(serde_json::json!({ "items": items })))
}

// ============================================================================
// Get Todo
// ============================================================================

/// Get a single item by ID (GET /todos/{todo_id}).
pub async fn get_todo(
    CurrentOwner(owner): CurrentOwner,
    State(state): State<AppState>,
    Path(todo_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let item = state
        .todos
        .get(todo_id, &owner)
        .await?
        .ok_or_else(|| not_found(todo_id))?;

    Ok(Json(serde_json::json!({ "item": item })))
}

// ============================================================================
// Create Todo
// ============================================================================

/// Create a new item (POST /todos).
pub async fn create_todo(
    CurrentOwner(owner): CurrentOwner,
    State(state): State<AppState>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<serde_json::Value>), Response> {
    let Json(payload) = payload.map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, format!("Failed to parse body: {e}"))
            .into_response()
    })?;

    tracing::debug!(payload = ?payload, "Received create todo request");

    let item = payload.into_item(owner);

    state
        .todos
        .create(&item)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    tracing::info!(todo_id = %item.todo_id, title = %item.title, "Created new todo");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "item": item })),
    ))
}

// ============================================================================
// Update Todo
// ============================================================================

/// Update an item by ID (PUT /todos/{todo_id}).
///
/// Partial overwrite: fields absent from the body are untouched.
pub async fn update_todo(
    CurrentOwner(owner): CurrentOwner,
    State(state): State<AppState>,
    Path(todo_id): Path<Uuid>,
    payload: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<serde_json::Value>, Response> {
    let Json(payload) = payload.map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, format!("Failed to parse body: {e}"))
            .into_response()
    })?;

    tracing::debug!(todo_id = %todo_id, payload = ?payload, "Received update todo request");

    // Confirm existence and ownership before mutating.
    state
        .todos
        .get(todo_id, &owner)
        .await
        .map_err(|e| AppError::from(e).into_response())?
        .ok_or_else(|| not_found(todo_id).into_response())?;

    let updated = state
        .todos
        .update(todo_id, &owner, payload.into_patch())
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    tracing::info!(todo_id = %todo_id, "Updated todo");

    Ok(Json(serde_json::json!({ "item": updated })))
}

// ============================================================================
// Delete Todo
// ============================================================================

/// Delete an item by ID (DELETE /todos/{todo_id}).
pub async fn delete_todo(
    CurrentOwner(owner): CurrentOwner,
    State(state): State<AppState>,
    Path(todo_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    tracing::debug!(todo_id = %todo_id, "Received delete todo request");

    let item = state
        .todos
        .get(todo_id, &owner)
        .await?
        .ok_or_else(|| not_found(todo_id))?;

    state.todos.delete(todo_id, &owner).await?;

    tracing::info!(todo_id = %todo_id, "Deleted todo");

    Ok(Json(serde_json::json!({ "item": item })))
}
