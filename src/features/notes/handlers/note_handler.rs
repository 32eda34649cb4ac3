use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::core::error::{AppError, Result};
use crate::features::notes::services::NoteService;

/// Download a note's body as a text document
///
/// Serves the note's text as an attachment. SMS clients follow the media URL
/// embedded in the confirmation message to this endpoint.
#[utoipa::path(
    get,
    path = "/note/{id}",
    params(
        ("id" = i64, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note document", content_type = "text/plain"),
        (status = 404, description = "No note with that ID", body = crate::shared::types::ApiError)
    ),
    tag = "notes"
)]
pub async fn download_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<i64>,
) -> Result<Response> {
    let note = service
        .find_by_id(id)
        .await?
        .ok_or(AppError::NoteNotFound(id))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"note.txt\"",
            ),
        ],
        note.details,
    )
        .into_response())
}
