//! Route definitions for the `/messages` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::message;
use crate::state::AppState;

/// Routes mounted at `/messages`.
///
/// ```text
/// POST   /create           -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/create", post(message::create))
}
