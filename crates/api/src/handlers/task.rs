//! Handlers for the `/tasks` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use taskboard_core::draft::NewTask;
use taskboard_core::models::{Task, UpdateTask};
use taskboard_core::types::DbId;
use taskboard_db::models::task::CreateTask;
use taskboard_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, JsonBody};
use crate::response::{CreatedTask, DeletedTask, UpdatedTask};
use crate::state::AppState;

/// Body of `POST /api/tasks/create`: the task fields and the parent project id.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub task: NewTask,
    pub id: DbId,
}

/// POST /api/tasks/create
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateTaskRequest>,
) -> AppResult<(StatusCode, Json<CreatedTask>)> {
    let create = CreateTask::from_new(input.id, input.task);
    let task = TaskRepo::create(&state.pool, &create).await?;
    tracing::info!(task_id = task.id, project_id = task.project_id, "Task created");
    Ok((StatusCode::CREATED, Json(CreatedTask { task })))
}

/// GET /api/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Task", id))?;
    Ok(Json(task))
}

/// PUT /api/tasks/update/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<UpdateTask>,
) -> AppResult<Json<UpdatedTask>> {
    let updated_task = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Task", id))?;
    tracing::info!(task_id = id, status = %updated_task.status, "Task updated");
    Ok(Json(UpdatedTask { updated_task }))
}

/// DELETE /api/tasks/delete/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<DeletedTask>> {
    let deleted_task = TaskRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Task", id))?;
    tracing::info!(task_id = id, "Task deleted");
    Ok(Json(DeletedTask { deleted_task }))
}
