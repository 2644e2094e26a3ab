//! Route definitions for the `/tasks` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{message, task};
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// POST   /create           -> create
/// GET    /{id}             -> get_by_id
/// PUT    /update/{id}      -> update
/// DELETE /delete/{id}      -> delete
/// GET    /{id}/messages    -> message::list_by_task
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(task::create))
        .route("/update/{id}", put(task::update))
        .route("/delete/{id}", delete(task::delete))
        .route("/{id}", get(task::get_by_id))
        .route("/{id}/messages", get(message::list_by_task))
}
