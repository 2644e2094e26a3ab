pub mod health;
pub mod message;
pub mod project;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                       list (GET)
/// /projects/create                create (POST)
/// /projects/{id}                  get with tasks (GET)
/// /projects/delete/{id}           delete (DELETE)
/// /projects/{id}/tasks            list tasks (GET)
/// /projects/{id}/board            rendered task list (GET)
///
/// /tasks/create                   create (POST)
/// /tasks/{id}                     get (GET)
/// /tasks/update/{id}              update (PUT)
/// /tasks/delete/{id}              delete (DELETE)
/// /tasks/{id}/messages            list messages (GET)
///
/// /messages/create                create (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
        .nest("/messages", message::router())
}
