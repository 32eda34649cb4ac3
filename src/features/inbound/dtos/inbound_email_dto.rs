use utoipa::ToSchema;
use validator::Validate;

use crate::features::notes::models::NewAttachment;

/// An inbound email as assembled from the provider's multipart fields.
#[derive(Debug, Default, Validate)]
pub struct InboundEmail {
    /// Subject line; must carry the reference ID.
    #[validate(length(max = 998, message = "subject line too long"))]
    pub subject: String,
    /// Raw sender header, e.g. `The Sender <sender@example.com>`.
    #[validate(length(max = 320, message = "sender header too long"))]
    pub from: String,
    /// Plain-text message body; becomes the note's details.
    pub text: String,
    /// HTML message body, if the provider supplied one. Not persisted.
    pub html: Option<String>,
    pub attachments: Vec<NewAttachment>,
}

/// Webhook form fields for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct InboundEmailForm {
    /// Subject line carrying the reference ID
    #[schema(example = "Reference ID: MSAU2407240001")]
    pub subject: String,
    /// Sender header
    #[schema(example = "The Sender <sender@example.com>")]
    pub from: String,
    /// Plain-text message body
    pub text: String,
    /// HTML message body
    pub html: Option<String>,
    /// Attachment file parts; any part with a filename is treated as one
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub attachment: Option<String>,
}
