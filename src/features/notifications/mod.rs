//! Outbound SMS confirmations.
//!
//! When a note is ingested, the owning user gets a one-line SMS summarising
//! the attachments, with a media URL pointing back at the note document. The
//! transport is Twilio's Messages API behind the [`SmsSender`] seam so the
//! composer can be exercised without network access.

pub mod clients;
pub mod services;

pub use clients::TwilioClient;
pub use services::{NotificationService, SmsSender};
