use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use tracing::debug;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::inbound::dtos::{InboundEmail, InboundEmailForm};
use crate::features::inbound::services::InboundEmailService;
use crate::features::notes::models::NewAttachment;
use crate::shared::types::{ApiSuccess, ReferenceAccepted};

/// Process an inbound email
///
/// Validates the reference ID in the subject line, stores the email body as
/// a note on the matching user's account and sends the user an SMS
/// confirmation. The response echoes the accepted reference ID.
#[utoipa::path(
    post,
    path = "/",
    request_body(
        content = InboundEmailForm,
        content_type = "multipart/form-data",
        description = "Inbound email fields as posted by the mail-to-webhook provider",
    ),
    responses(
        (status = 200, description = "Email stored as a note", body = ApiSuccess<ReferenceAccepted>),
        (status = 400, description = "Subject line carries no valid reference ID", body = crate::shared::types::ApiError)
    ),
    tag = "inbound"
)]
pub async fn process_inbound_email(
    State(service): State<Arc<InboundEmailService>>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<ApiSuccess<ReferenceAccepted>>> {
    // A request without a multipart body is handled like an empty form:
    // the empty subject fails validation with the standard rejection.
    let email = match multipart {
        Ok(multipart) => read_email_form(multipart).await?,
        Err(rejection) => {
            debug!("No multipart body on inbound request: {}", rejection);
            InboundEmail::default()
        }
    };
    email
        .validate()
        .map_err(|e| AppError::BadRequest(format!("Invalid inbound email payload: {}", e)))?;

    let reference_id = service.process(email).await?;

    Ok(Json(ApiSuccess::new(ReferenceAccepted { reference_id })))
}

/// Assemble an [`InboundEmail`] from the provider's multipart fields.
///
/// Text fields are matched by name; every part carrying a filename is an
/// attachment regardless of its field name (providers number them
/// `attachment1..N`). Unknown text fields are ignored.
async fn read_email_form(mut multipart: Multipart) -> Result<InboundEmail> {
    let mut email = InboundEmail::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        if field.file_name().is_some() {
            // Absent filenames stay empty strings; the SMS filename list
            // preserves them as such.
            let filename = field
                .file_name()
                .map(|s| s.to_string())
                .unwrap_or_default();
            let filetype = field
                .content_type()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "application/octet-stream".to_string());

            let data = field.bytes().await.map_err(|e| {
                debug!("Failed to read attachment bytes: {}", e);
                AppError::BadRequest(format!("Failed to read attachment data: {}", e))
            })?;

            email.attachments.push(NewAttachment {
                file: data.to_vec(),
                filename,
                filetype,
            });
            continue;
        }

        let value = field.text().await.map_err(|e| {
            debug!("Failed to read multipart field '{}': {}", field_name, e);
            AppError::BadRequest(format!("Failed to read field '{}': {}", field_name, e))
        })?;

        match field_name.as_str() {
            "subject" => email.subject = value,
            "from" => email.from = value,
            "text" => email.text = value,
            "html" => email.html = Some(value),
            _ => {}
        }
    }

    Ok(email)
}
