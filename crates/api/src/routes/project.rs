//! Route definitions for the `/projects` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                 -> list
/// POST   /create           -> create
/// GET    /{id}             -> get_by_id
/// DELETE /delete/{id}      -> delete
/// GET    /{id}/tasks       -> list_tasks
/// GET    /{id}/board       -> board
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list))
        .route("/create", post(project::create))
        .route("/delete/{id}", delete(project::delete))
        .route("/{id}", get(project::get_by_id))
        .route("/{id}/tasks", get(project::list_tasks))
        .route("/{id}/board", get(project::board))
}
