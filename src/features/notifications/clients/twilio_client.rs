use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::core::config::TwilioConfig;
use crate::core::error::{AppError, Result};
use crate::features::notifications::services::SmsSender;

/// Subset of Twilio's message resource we care about.
#[derive(Debug, Deserialize)]
pub struct TwilioMessageResponse {
    pub sid: Option<String>,
    /// Submission status, e.g. "queued", "sent", "failed".
    pub status: String,
    pub error_message: Option<String>,
}

/// Client for Twilio's `Messages.json` REST endpoint.
pub struct TwilioClient {
    client: reqwest::Client,
    account_sid: String,
    auth_token: String,
    sender: String,
    base_url: String,
}

impl TwilioClient {
    pub fn new(config: &TwilioConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("MailnoteCore/1.0 (inbound-email-notes)")
                .timeout(Duration::from_secs(config.request_timeout_secs))
                .build()
                .expect("Failed to build HTTP client"),
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            sender: config.sender.clone(),
            base_url: config.api_base_url.clone(),
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url, self.account_sid
        )
    }
}

#[async_trait]
impl SmsSender for TwilioClient {
    /// Submit one SMS and return the transport's submission status.
    ///
    /// A timeout or a non-2xx API response is a notification failure; the
    /// returned status string is classified by the caller.
    async fn send_sms(&self, to: &str, body: &str, media_url: &str) -> Result<String> {
        let params = [
            ("To", to),
            ("From", self.sender.as_str()),
            ("Body", body),
            ("MediaUrl", media_url),
        ];

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Twilio request failed: {:?}", e);
                AppError::Notification(format!("Twilio request failed: {}", e))
            })?;

        if !response.status().is_success() {
            tracing::warn!("Twilio returned HTTP status: {}", response.status());
            return Err(AppError::Notification(format!(
                "Twilio returned HTTP status {}",
                response.status()
            )));
        }

        let message: TwilioMessageResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Twilio response: {:?}", e);
            AppError::Notification(format!("Failed to parse Twilio response: {}", e))
        })?;

        tracing::debug!(
            "Twilio accepted message: sid={:?}, status={}",
            message.sid,
            message.status
        );

        if let Some(error_message) = message.error_message {
            tracing::warn!("Twilio reported message error: {}", error_message);
        }

        Ok(message.status)
    }
}
