use async_trait::async_trait;
use minijinja::{context, Environment};
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::notes::models::NewAttachment;

/// Capability seam over the SMS transport.
///
/// Returns the transport's raw submission status; classification of that
/// status is the notifier's job.
#[async_trait]
pub trait SmsSender: Send + Sync {
    async fn send_sms(&self, to: &str, body: &str, media_url: &str) -> Result<String>;
}

/// Statuses that count as "successfully submitted".
///
/// `undelivered` is intentionally in this list: it means the carrier
/// accepted the message even though the handset never confirmed receipt,
/// and the original classification is preserved.
pub const SUCCESSFUL_MESSAGE_STATUSES: &[&str] = &[
    "accepted",
    "delivered",
    "queued",
    "read",
    "received",
    "receiving",
    "scheduled",
    "sending",
    "sent",
    "undelivered",
];

const SINGLE_ATTACHMENT_TEMPLATE_NAME: &str = "note_added_single";
const MULTIPLE_ATTACHMENT_TEMPLATE_NAME: &str = "note_added_multiple";

const SINGLE_ATTACHMENT_TEMPLATE: &str = r#"Hi {{ name }}. This a quick confirmation that "{{ filenames }}" has been added as a note on your account, along with the text, which you can find in the attachment to this SMS."#;

const MULTIPLE_ATTACHMENT_TEMPLATE: &str = r#"Hi {{ name }}. This a quick confirmation that "{{ filenames }}" have been added as a note on your account, along with the text, which you can find in the attachment to this SMS."#;

/// Composes and dispatches the new-note SMS confirmation.
pub struct NotificationService {
    sender: Arc<dyn SmsSender>,
    /// Public base URL used to build the note media link.
    app_base_url: String,
    env: Environment<'static>,
}

impl NotificationService {
    pub fn new(sender: Arc<dyn SmsSender>, app_base_url: String) -> Self {
        let mut env = Environment::new();
        env.add_template(SINGLE_ATTACHMENT_TEMPLATE_NAME, SINGLE_ATTACHMENT_TEMPLATE)
            .expect("Failed to register SMS template");
        env.add_template(
            MULTIPLE_ATTACHMENT_TEMPLATE_NAME,
            MULTIPLE_ATTACHMENT_TEMPLATE,
        )
        .expect("Failed to register SMS template");

        Self {
            sender,
            app_base_url,
            env,
        }
    }

    /// Notify a user that a note was added to their account.
    ///
    /// The message carries the comma-joined attachment filenames and a media
    /// URL the recipient's client uses to fetch the note document. A note
    /// with zero attachments reuses the singular phrasing with an empty
    /// filename list.
    pub async fn notify_note_created(
        &self,
        note_id: i64,
        recipient_phone: &str,
        recipient_name: &str,
        attachments: &[NewAttachment],
    ) -> Result<()> {
        let body = self.compose_message(recipient_name, attachments)?;
        let media_url = format!("{}/note/{}", self.app_base_url, note_id);

        let status = self
            .sender
            .send_sms(recipient_phone, &body, &media_url)
            .await?;

        if !Self::submission_succeeded(&status) {
            return Err(AppError::Notification(format!(
                "SMS submission for note {} returned status '{}'",
                note_id, status
            )));
        }

        tracing::info!(
            "SMS confirmation submitted: note_id={}, status={}",
            note_id,
            status
        );

        Ok(())
    }

    /// True iff the transport status means the message was accepted for
    /// delivery.
    pub fn submission_succeeded(status: &str) -> bool {
        SUCCESSFUL_MESSAGE_STATUSES.contains(&status)
    }

    fn compose_message(
        &self,
        recipient_name: &str,
        attachments: &[NewAttachment],
    ) -> Result<String> {
        let template_name = if attachments.len() > 1 {
            MULTIPLE_ATTACHMENT_TEMPLATE_NAME
        } else {
            SINGLE_ATTACHMENT_TEMPLATE_NAME
        };

        let filenames = attachments
            .iter()
            .map(|a| a.filename.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let template = self.env.get_template(template_name).map_err(|e| {
            AppError::Notification(format!("SMS template '{}' missing: {}", template_name, e))
        })?;

        template
            .render(context! { name => recipient_name, filenames => filenames })
            .map_err(|e| AppError::Notification(format!("Failed to render SMS body: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingSender {
        status: &'static str,
        sent: Mutex<Vec<(String, String, String)>>,
    }

    impl RecordingSender {
        fn with_status(status: &'static str) -> Arc<Self> {
            Arc::new(Self {
                status,
                sent: Mutex::new(Vec::new()),
            })
        }

        fn sent(&self) -> Vec<(String, String, String)> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SmsSender for RecordingSender {
        async fn send_sms(&self, to: &str, body: &str, media_url: &str) -> Result<String> {
            self.sent.lock().unwrap().push((
                to.to_string(),
                body.to_string(),
                media_url.to_string(),
            ));
            Ok(self.status.to_string())
        }
    }

    fn attachment(filename: &str) -> NewAttachment {
        NewAttachment {
            file: vec![1, 2, 3],
            filename: filename.to_string(),
            filetype: "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
                .to_string(),
        }
    }

    #[tokio::test]
    async fn test_single_attachment_message_body_and_media_url() {
        let sender = RecordingSender::with_status("queued");
        let service = NotificationService::new(
            sender.clone(),
            "https://localhost:8080".to_string(),
        );

        service
            .notify_note_created(1, "+1400058000", "The Sender", &[attachment("file1.docx")])
            .await
            .unwrap();

        let sent = sender.sent();
        assert_eq!(sent.len(), 1);
        let (to, body, media_url) = &sent[0];
        assert_eq!(to, "+1400058000");
        assert_eq!(
            body,
            "Hi The Sender. This a quick confirmation that \"file1.docx\" has been added as a note on your account, along with the text, which you can find in the attachment to this SMS."
        );
        assert_eq!(media_url, "https://localhost:8080/note/1");
    }

    #[tokio::test]
    async fn test_multiple_attachments_use_plural_phrasing() {
        let sender = RecordingSender::with_status("sent");
        let service =
            NotificationService::new(sender.clone(), "https://localhost:8080".to_string());

        service
            .notify_note_created(
                7,
                "+1400058000",
                "The Sender",
                &[attachment("file1.docx"), attachment("file2.docx")],
            )
            .await
            .unwrap();

        let sent = sender.sent();
        let (_, body, media_url) = &sent[0];
        assert!(body.contains("\"file1.docx, file2.docx\" have been added"));
        assert_eq!(media_url, "https://localhost:8080/note/7");
    }

    #[tokio::test]
    async fn test_zero_attachments_reuse_singular_template() {
        let sender = RecordingSender::with_status("queued");
        let service =
            NotificationService::new(sender.clone(), "https://localhost:8080".to_string());

        service
            .notify_note_created(3, "+1400058000", "The Sender", &[])
            .await
            .unwrap();

        let sent = sender.sent();
        let (_, body, _) = &sent[0];
        assert!(body.contains("\"\" has been added"));
    }

    #[tokio::test]
    async fn test_missing_filename_becomes_empty_string_in_list() {
        let sender = RecordingSender::with_status("queued");
        let service =
            NotificationService::new(sender.clone(), "https://localhost:8080".to_string());

        service
            .notify_note_created(
                4,
                "+1400058000",
                "The Sender",
                &[attachment("file1.docx"), attachment("")],
            )
            .await
            .unwrap();

        let sent = sender.sent();
        let (_, body, _) = &sent[0];
        assert!(body.contains("\"file1.docx, \" have been added"));
    }

    #[tokio::test]
    async fn test_scheduled_status_counts_as_submitted() {
        let sender = RecordingSender::with_status("scheduled");
        let service = NotificationService::new(sender, "https://localhost:8080".to_string());

        let result = service
            .notify_note_created(1, "+1400058000", "The Sender", &[attachment("a.docx")])
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_undelivered_status_counts_as_submitted() {
        assert!(NotificationService::submission_succeeded("undelivered"));
    }

    #[tokio::test]
    async fn test_unrecognized_status_is_a_failure() {
        let sender = RecordingSender::with_status("failed");
        let service = NotificationService::new(sender, "https://localhost:8080".to_string());

        let result = service
            .notify_note_created(1, "+1400058000", "The Sender", &[attachment("a.docx")])
            .await;

        assert!(matches!(result, Err(AppError::Notification(_))));
    }
}
