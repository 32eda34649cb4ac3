use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::constants::{INVALID_SUBJECT_DETAIL, INVALID_SUBJECT_MESSAGE};
use crate::shared::types::ApiError;

#[derive(Debug, Error)]
pub enum AppError {
    /// The subject line does not match either accepted reference ID format.
    #[error("invalid subject line")]
    InvalidSubject,

    /// The subject line parsed, but the code is not bound to any user.
    /// Deliberately rendered with the same body as [`AppError::InvalidSubject`]
    /// so callers cannot distinguish a malformed code from an unknown one.
    #[error("unresolved reference code: {0}")]
    UnresolvedReference(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("note {0} not found")]
    NoteNotFound(i64),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// SMS dispatch failed or the transport reported a non-success status.
    /// Not surfaced through the webhook response; the orchestrator logs it.
    #[error("Notification failure: {0}")]
    Notification(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidSubject => (
                StatusCode::BAD_REQUEST,
                ApiError::new(INVALID_SUBJECT_MESSAGE, INVALID_SUBJECT_DETAIL),
            ),
            AppError::UnresolvedReference(ref code) => {
                tracing::warn!("Reference code '{}' is not bound to any user", code);
                (
                    StatusCode::BAD_REQUEST,
                    ApiError::new(INVALID_SUBJECT_MESSAGE, INVALID_SUBJECT_DETAIL),
                )
            }
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new(
                        "The email could not be stored.",
                        "An internal error occurred while storing the note and its attachments. No part of the email was saved.",
                    ),
                )
            }
            AppError::NoteNotFound(id) => (
                StatusCode::NOT_FOUND,
                ApiError::new(
                    "Note not found.",
                    format!("No note with note ID {} was found.", id),
                ),
            ),
            AppError::BadRequest(ref msg) => (
                StatusCode::BAD_REQUEST,
                ApiError::new(
                    msg.clone(),
                    "The request body could not be processed as an inbound email webhook payload.",
                ),
            ),
            AppError::Notification(ref msg) => {
                tracing::error!("Notification failure: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    ApiError::new(
                        "The notification could not be dispatched.",
                        "The SMS transport rejected the message or was unreachable.",
                    ),
                )
            }
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new(
                        "Internal server error.",
                        "An unexpected error occurred while processing the request.",
                    ),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_invalid_subject_and_unresolved_reference_share_a_body() {
        let (invalid_status, invalid_body) = body_json(AppError::InvalidSubject).await;
        let (unresolved_status, unresolved_body) =
            body_json(AppError::UnresolvedReference("MSAU2407240002".to_string())).await;

        assert_eq!(invalid_status, StatusCode::BAD_REQUEST);
        assert_eq!(unresolved_status, StatusCode::BAD_REQUEST);
        assert_eq!(invalid_body, unresolved_body);
        assert_eq!(invalid_body["status"], "error");
        assert_eq!(invalid_body["message"], INVALID_SUBJECT_MESSAGE);
        assert_eq!(invalid_body["detail"], INVALID_SUBJECT_DETAIL);
    }

    #[tokio::test]
    async fn test_note_not_found_body() {
        let (status, body) = body_json(AppError::NoteNotFound(42)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Note not found.");
        assert_eq!(body["detail"], "No note with note ID 42 was found.");
    }

    #[tokio::test]
    async fn test_database_error_does_not_leak_driver_details() {
        let (status, body) = body_json(AppError::Database(sqlx::Error::PoolTimedOut)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let rendered = body.to_string();
        assert!(!rendered.contains("PoolTimedOut"));
        assert!(!rendered.to_lowercase().contains("sqlx"));
    }
}
