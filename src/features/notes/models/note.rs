use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a note.
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Note {
    pub id: i64,
    pub user_id: i64,
    /// The plain-text body of the inbound email.
    pub details: String,
    pub created_at: DateTime<Utc>,
}
