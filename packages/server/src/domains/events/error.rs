//! Error taxonomy for the events domain.
//!
//! Three failure classes stay distinct all the way to the HTTP layer:
//! not-found (wrong id or wrong organizer), slug conflict (recoverable,
//! field-scoped), and infrastructure failure (propagated, not retried).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use super::data::SubmissionRejection;
use super::schema::FieldErrors;

#[derive(Debug, Error)]
pub enum EventError {
    /// No event matches the requested `(id, organizer_id)` pair.
    #[error("Event not found")]
    NotFound,

    /// Another event already uses the slug. Raised by the store's unique
    /// constraint when a concurrent write slips past the pre-check read.
    #[error("Slug cannot be used, please change")]
    SlugTaken,

    /// The store is unreachable or a query failed.
    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

impl EventError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EventError::NotFound => StatusCode::NOT_FOUND,
            EventError::SlugTaken => StatusCode::BAD_REQUEST,
            EventError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            EventError::NotFound => (
                status,
                Json(serde_json::json!({
                    "status": "error",
                    "message": "Event not found",
                })),
            )
                .into_response(),
            EventError::SlugTaken => (
                status,
                Json(SubmissionRejection::new(FieldErrors::slug_taken())),
            )
                .into_response(),
            EventError::Database(e) => {
                // Log internal details, keep the response generic
                error!(error = ?e, "Database error");
                (
                    status,
                    Json(serde_json::json!({
                        "status": "error",
                        "message": "A database error occurred",
                    })),
                )
                    .into_response()
            }
        }
    }
}
