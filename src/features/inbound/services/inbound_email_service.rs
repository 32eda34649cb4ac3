use std::sync::Arc;

use crate::core::config::ResolutionMode;
use crate::core::error::{AppError, Result};
use crate::features::inbound::dtos::InboundEmail;
use crate::features::notes::services::NoteService;
use crate::features::notifications::services::NotificationService;
use crate::features::users::models::User;
use crate::features::users::services::UserService;
use crate::shared::validation;

/// Orchestrates one inbound email: subject validation, user resolution,
/// note ingestion, SMS confirmation.
pub struct InboundEmailService {
    users: Arc<UserService>,
    notes: Arc<NoteService>,
    notifications: Arc<NotificationService>,
    resolution_mode: ResolutionMode,
}

impl InboundEmailService {
    pub fn new(
        users: Arc<UserService>,
        notes: Arc<NoteService>,
        notifications: Arc<NotificationService>,
        resolution_mode: ResolutionMode,
    ) -> Self {
        Self {
            users,
            notes,
            notifications,
            resolution_mode,
        }
    }

    /// Run one email through the full pipeline, returning the accepted
    /// reference ID.
    ///
    /// Steps are strictly sequential: each depends on the previous step's
    /// output. A notification failure does not fail the request - the note
    /// is already stored, and the provider retrying the webhook would
    /// duplicate it.
    pub async fn process(&self, email: InboundEmail) -> Result<String> {
        let reference_id = validation::extract_reference_id(&email.subject)
            .ok_or(AppError::InvalidSubject)?
            .to_string();

        tracing::debug!(
            reference_id = %reference_id,
            attachments = email.attachments.len(),
            has_html = email.html.is_some(),
            "Inbound email accepted for processing"
        );

        let user = self.resolve_user(&reference_id, &email.from).await?;

        let note_id = self
            .notes
            .ingest(user.id, &email.text, &email.attachments)
            .await?;

        if let Err(e) = self
            .notifications
            .notify_note_created(note_id, &user.phone_number, &user.name, &email.attachments)
            .await
        {
            tracing::warn!("SMS confirmation for note {} failed: {}", note_id, e);
        }

        Ok(reference_id)
    }

    /// Map the email to a user account.
    ///
    /// Canonical mode requires the reference code to exist and be bound to a
    /// user before the account is resolved through it. The sender-email mode
    /// is the deprecated contract of early deployments: the subject is still
    /// validated syntactically, but the account comes from the sender
    /// address alone.
    async fn resolve_user(&self, reference_id: &str, from: &str) -> Result<User> {
        match self.resolution_mode {
            ResolutionMode::ReferenceBinding => {
                if !self.users.reference_is_bound(reference_id).await? {
                    return Err(AppError::UnresolvedReference(reference_id.to_string()));
                }

                self.users
                    .find_by_reference(reference_id)
                    .await?
                    .ok_or_else(|| AppError::UnresolvedReference(reference_id.to_string()))
            }
            ResolutionMode::SenderEmail => {
                let sender = validation::parse_sender(from).ok_or_else(|| {
                    AppError::BadRequest("The email sender header could not be parsed.".to_string())
                })?;

                tracing::debug!(
                    "Resolving by sender address: name='{}', address='{}'",
                    sender.name,
                    sender.address
                );

                self.users
                    .find_by_email(sender.address)
                    .await?
                    .ok_or_else(|| AppError::UnresolvedReference(reference_id.to_string()))
            }
        }
    }
}
