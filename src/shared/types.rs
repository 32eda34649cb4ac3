use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope for successful responses: `{"status": "success", "data": ...}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiSuccess<T> {
    pub status: String,
    pub data: T,
}

impl<T> ApiSuccess<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: "success".to_string(),
            data,
        }
    }
}

/// Envelope for error responses.
///
/// `message` is a one-line human summary; `detail` explains what a valid
/// request would have looked like. The shape is fixed so webhook providers
/// can parse rejections mechanically.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    pub status: String,
    pub message: String,
    pub detail: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            detail: detail.into(),
        }
    }
}

/// Payload of a successful webhook response, echoing the reference ID that
/// was extracted from the subject line.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReferenceAccepted {
    #[serde(rename = "reference id")]
    pub reference_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let body = serde_json::to_value(ApiSuccess::new(ReferenceAccepted {
            reference_id: "MSAU2407240001".to_string(),
        }))
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "status": "success",
                "data": { "reference id": "MSAU2407240001" }
            })
        );
    }

    #[test]
    fn test_error_envelope_shape() {
        let body = serde_json::to_value(ApiError::new("nope", "because")).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "status": "error",
                "message": "nope",
                "detail": "because"
            })
        );
    }
}
