//! Handlers for task messages.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use taskboard_core::models::{Message, NewMessage};
use taskboard_core::types::DbId;
use taskboard_db::models::message::CreateMessage;
use taskboard_db::repositories::{MessageRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, JsonBody};
use crate::response::CreatedMessage;
use crate::state::AppState;

/// Body of `POST /api/messages/create`: the message and the parent task id.
#[derive(Debug, Deserialize)]
pub struct CreateMessageRequest {
    pub message: NewMessage,
    pub id: DbId,
}

/// POST /api/messages/create
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateMessageRequest>,
) -> AppResult<(StatusCode, Json<CreatedMessage>)> {
    let create = CreateMessage::from_new(input.id, input.message);
    let message = MessageRepo::create(&state.pool, &create).await?;
    tracing::info!(message_id = message.id, task_id = message.task_id, "Message created");
    Ok((StatusCode::CREATED, Json(CreatedMessage { message })))
}

/// GET /api/tasks/{id}/messages
pub async fn list_by_task(
    State(state): State<AppState>,
    IdPath(task_id): IdPath,
) -> AppResult<Json<Vec<Message>>> {
    TaskRepo::find_by_id(&state.pool, task_id)
        .await?
        .ok_or(AppError::not_found("Task", task_id))?;
    let messages = MessageRepo::list_by_task(&state.pool, task_id).await?;
    Ok(Json(messages))
}
