//! Note routes

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::notes::handlers;
use crate::features::notes::services::NoteService;

/// Create routes for the notes feature
///
/// Public: the note ID inside the SMS media URL is the only capability the
/// recipient's client holds.
pub fn routes(service: Arc<NoteService>) -> Router {
    Router::new()
        .route("/note/{id}", get(handlers::download_note))
        .with_state(service)
}
