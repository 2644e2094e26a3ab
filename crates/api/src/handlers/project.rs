//! Handlers for the `/projects` resource.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use taskboard_core::board::TaskBoard;
use taskboard_core::deadline;
use taskboard_core::models::{CreateProject, Project, ProjectWithTasks, Task};
use taskboard_core::types::DbId;
use taskboard_db::repositories::{ProjectRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::extract::IdPath;
use crate::response::{DeletedProject, PROJECT_CREATED};
use crate::state::AppState;

/// POST /api/projects/create
///
/// Accepts any project fields, including an empty or missing body.
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<&'static str>)> {
    let input = parse_create_body(&body)?;
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, "Project created");
    Ok((StatusCode::CREATED, Json(PROJECT_CREATED)))
}

fn parse_create_body(body: &[u8]) -> AppResult<CreateProject> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CreateProject::default());
    }
    Ok(serde_json::from_slice(body)?)
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ProjectWithTasks>> {
    let project = ProjectRepo::find_with_tasks(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    Ok(Json(project))
}

/// DELETE /api/projects/delete/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<DeletedProject>> {
    let deleted_project = ProjectRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    tracing::info!(project_id = id, "Project deleted");
    Ok(Json(DeletedProject { deleted_project }))
}

/// GET /api/projects/{id}/tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Vec<Task>>> {
    Ok(Json(load_tasks(&state, id).await?))
}

/// GET /api/projects/{id}/board
///
/// The project's task list rendered as of today (UTC).
pub async fn board(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<TaskBoard>> {
    let tasks = load_tasks(&state, id).await?;
    Ok(Json(TaskBoard::build(&tasks, deadline::today())))
}

async fn load_tasks(state: &AppState, project_id: DbId) -> AppResult<Vec<Task>> {
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::not_found("Project", project_id))?;
    Ok(TaskRepo::list_by_project(&state.pool, project_id).await?)
}
