use utoipa::{Modify, OpenApi};

use crate::features::inbound::{dtos as inbound_dtos, handlers as inbound_handlers};
use crate::features::notes::handlers as notes_handlers;
use crate::shared::types::{ApiError, ApiSuccess, ReferenceAccepted};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Inbound email webhook
        inbound_handlers::process_inbound_email,
        // Notes
        notes_handlers::download_note,
    ),
    components(
        schemas(
            inbound_dtos::InboundEmailForm,
            ReferenceAccepted,
            ApiSuccess<ReferenceAccepted>,
            ApiError,
        )
    ),
    tags(
        (name = "inbound", description = "Inbound email webhook"),
        (name = "notes", description = "Note document downloads"),
    ),
    info(
        title = "Mailnote API",
        version = "0.1.0",
        description = "Inbound email webhook that files notes against user accounts",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
