//! Error type returned by every handler.
//!
//! A failed request always answers `500 Internal Server Error` with the raw
//! error text in `error`; the client shows that text as is. `code` names the
//! kind of failure without changing the status.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use taskboard_core::error::CoreError;
use taskboard_core::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing rows and rejected domain values.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Anything sqlx reports, constraint violations included.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// A JSON body the `Json` extractor could not read.
    #[error("{}", .0.body_text())]
    Body(#[from] JsonRejection),

    /// A hand-parsed body that does not match its type.
    #[error("Failed to deserialize the JSON body: {0}")]
    Payload(#[from] serde_json::Error),

    /// A path segment that is not a valid id.
    #[error("{}", .0.body_text())]
    Path(#[from] PathRejection),
}

pub type AppResult<T> = Result<T, AppError>;

/// Wire shape of every failure.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
}

impl AppError {
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        AppError::Core(CoreError::NotFound { entity, id })
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Core(CoreError::NotFound { .. }) => "NOT_FOUND",
            AppError::Core(CoreError::Validation(_)) => "VALIDATION_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Body(_) | AppError::Payload(_) => "INVALID_BODY",
            AppError::Path(_) => "INVALID_PATH",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        match &self {
            AppError::Database(sqlx::Error::Database(db_err)) => tracing::error!(
                code,
                error = %db_err,
                sqlstate = db_err.code().as_deref().unwrap_or("unknown"),
                constraint = db_err.constraint().unwrap_or("none"),
                "Request failed"
            ),
            other => tracing::error!(code, error = %other, "Request failed"),
        }

        let body = ErrorBody {
            error: self.to_string(),
            code,
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
